//! Newton's rings interference pattern.
//!
//! The grid spans a square of side `image_size` pixels centred on
//! c = image_size / 2. A pixel at distance r_px from the centre maps linearly
//! to a physical radius r = r_px · R / c, so the midpoint of each edge sits at
//! the lens radius R.
//!
//! Fringe intensity for one wavelength:
//!
//! I(r, λ) = ½ (1 + cos(2πr / λ))
//!
//! A non-zero spectrum width averages `SPECTRUM_SAMPLES` wavelengths across
//! [λc − Δλ/2, λc + Δλ/2), each weighted by its visible colour.

use rayon::prelude::*;

use super::spectrum::wavelength_to_rgb;
use crate::config::RingsParameters;
use crate::state::{IntensityGrid, Rgb};

/// Wavelength samples averaged in quasi-monochromatic mode
pub const SPECTRUM_SAMPLES: usize = 10;

/// Fringe intensity at radius `r` for one wavelength, in `[0, 1]`
pub fn monochromatic_intensity(r: f64, wavelength: f64) -> f64 {
    0.5 * (1.0 + (2.0 * std::f64::consts::PI * r / wavelength).cos())
}

/// Colour-weighted average over a band of wavelengths
pub fn quasi_monochromatic_intensity(r: f64, center: f64, width: f64) -> Rgb {
    let step = width / SPECTRUM_SAMPLES as f64;
    let mut total = [0.0; 3];

    for i in 0..SPECTRUM_SAMPLES {
        let wavelength = center - width / 2.0 + step * i as f64;
        let intensity = monochromatic_intensity(r, wavelength);
        let color = wavelength_to_rgb(wavelength);

        for (acc, weight) in total.iter_mut().zip(color) {
            *acc += intensity * weight;
        }
    }

    total.map(|c| c / SPECTRUM_SAMPLES as f64)
}

/// Pixel-to-lens geometry for one grid size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingsGeometry {
    /// Grid side length (px)
    pub size: usize,
    /// Centre coordinate, `size / 2` (px)
    pub center: f64,
    /// Physical radius per pixel
    pub scale: f64,
}

impl RingsGeometry {
    pub fn new(size: usize, lens_radius: f64) -> Self {
        let center = size as f64 / 2.0;
        Self {
            size,
            center,
            scale: lens_radius / center,
        }
    }

    /// Physical radius at pixel `(x, y)`
    pub fn radius_at(&self, x: usize, y: usize) -> f64 {
        let dx = x as f64 - self.center;
        let dy = y as f64 - self.center;
        (dx * dx + dy * dy).sqrt() * self.scale
    }
}

/// RGB intensity for a physical radius under `params`
pub fn intensity_at_radius(r: f64, params: &RingsParameters) -> Rgb {
    if params.is_monochromatic() {
        [monochromatic_intensity(r, params.wavelength); 3]
    } else {
        quasi_monochromatic_intensity(r, params.spectrum_center, params.spectrum_width)
    }
}

/// Fill the full intensity grid
///
/// Rows are evaluated in parallel. Each pixel depends only on its own
/// coordinates, so the result matches a sequential fill exactly.
pub fn simulate(params: &RingsParameters) -> IntensityGrid {
    let size = params.image_size;
    let geometry = RingsGeometry::new(size, params.lens_radius);

    log::info!(
        "Computing {}x{} Newton's rings grid ({})",
        size,
        size,
        if params.is_monochromatic() {
            format!("monochromatic, {} nm", params.wavelength)
        } else {
            format!(
                "{} nm band around {} nm",
                params.spectrum_width, params.spectrum_center
            )
        }
    );

    let mut pixels = vec![[0.0; 3]; size * size];
    pixels
        .par_chunks_exact_mut(size.max(1))
        .enumerate()
        .for_each(|(y, row)| {
            for (x, px) in row.iter_mut().enumerate() {
                *px = intensity_at_radius(geometry.radius_at(x, y), params);
            }
        });

    IntensityGrid::from_row_major(size, pixels)
}
