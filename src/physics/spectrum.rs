//! Approximate visible-spectrum colour of a wavelength.
//!
//! Piecewise-linear ramps between the violet (380 nm) and deep red (780 nm)
//! limits. Anything outside that range is black.

use crate::state::Rgb;

/// Shortest visible wavelength (nm)
pub const VISIBLE_MIN_NM: f64 = 380.0;
/// Longest visible wavelength (nm)
pub const VISIBLE_MAX_NM: f64 = 780.0;

/// Perceptual RGB weight of `wavelength` (nm)
pub fn wavelength_to_rgb(wavelength: f64) -> Rgb {
    let w = wavelength;
    match w {
        w if (380.0..440.0).contains(&w) => [-(w - 440.0) / (440.0 - 380.0), 0.0, 1.0],
        w if (440.0..490.0).contains(&w) => [0.0, (w - 440.0) / (490.0 - 440.0), 1.0],
        w if (490.0..510.0).contains(&w) => [0.0, 1.0, -(w - 510.0) / (510.0 - 490.0)],
        w if (510.0..580.0).contains(&w) => [(w - 510.0) / (580.0 - 510.0), 1.0, 0.0],
        w if (580.0..645.0).contains(&w) => [1.0, -(w - 645.0) / (645.0 - 580.0), 0.0],
        w if (645.0..=780.0).contains(&w) => [1.0, 0.0, 0.0],
        _ => [0.0, 0.0, 0.0],
    }
}
