//! Closed-form physics engines.
//!
//! This module implements:
//! - Coupled pendulums through normal-mode decomposition
//! - Newton's rings fringe intensity, monochromatic and band-averaged
//! - Wavelength to visible colour mapping
//! - The Kronig-Penney dispersion relation
//!
//! Every engine is a pure function of its validated parameters.

pub mod kronig_penney;
pub mod pendulums;
pub mod rings;
pub mod spectrum;

pub use kronig_penney::KronigPenneyProfile;
pub use pendulums::{NormalModeFrequencies, PendulumSimulation};
pub use rings::{monochromatic_intensity, RingsGeometry};
pub use spectrum::wavelength_to_rgb;
