//! Phys Modelling - closed-form physics simulations rendered to images
//!
//! Three independent pipelines, each Config → Engine → Output:
//! - coupled pendulums (normal modes), charted as angle and velocity plots
//! - Newton's rings, written as an RGB intensity image
//! - the Kronig-Penney model, charted as potential and dispersion plots

pub mod config;
pub mod export;
pub mod physics;
pub mod pipeline;
pub mod render;
pub mod state;

pub use config::{ConfigError, KronigPenneyParameters, PendulumParameters, RingsParameters};
pub use physics::{KronigPenneyProfile, NormalModeFrequencies, PendulumSimulation};
pub use state::{IntensityGrid, PendulumSample, PendulumTimeSeries};

/// Print the normal-mode frequencies of a finished pendulum run
pub fn print_frequencies(frequencies: &NormalModeFrequencies) {
    println!("Results:");
    println!("Normal frequency omega_1: {:.4} rad/s", frequencies.omega1);
    println!("Normal frequency omega_2: {:.4} rad/s", frequencies.omega2);
}
