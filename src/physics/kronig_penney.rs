//! Kronig-Penney model of an electron in a periodic rectangular potential.
//!
//! Allowed energies satisfy
//!
//! P · sin(αa) / (αa) + cos(αa) = cos(ka)
//!
//! so a value of the left-hand side outside [-1, 1] marks a band gap. The
//! graphical analysis plots the left-hand side against αa together with the
//! ±1 bounds.

use crate::config::KronigPenneyParameters;

/// Below this |x| the sinc term is replaced by its limit
const SINC_LIMIT: f64 = 1e-10;

/// `points` evenly spaced values from `start` to `end` inclusive
pub fn linspace(start: f64, end: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (points as f64 - 1.0);
            (0..points).map(|i| start + i as f64 * step).collect()
        }
    }
}

/// Barrier height at `position`, zero inside a well
pub fn potential(position: f64, params: &KronigPenneyParameters) -> f64 {
    let n = (position / params.period).floor();
    let barrier_start = n * params.period + params.potential_width;
    let barrier_end = (n + 1.0) * params.period;

    if barrier_start < position && position < barrier_end {
        params.barrier_height
    } else {
        0.0
    }
}

/// Left-hand side of the dispersion relation at `x = αa`
pub fn dispersion_lhs(x: f64, barrier_strength: f64) -> f64 {
    if x.abs() > SINC_LIMIT {
        barrier_strength * (x.sin() / x) + x.cos()
    } else {
        barrier_strength + 1.0
    }
}

/// Sampled potential and dispersion curve
#[derive(Debug, Clone)]
pub struct KronigPenneyProfile {
    pub positions: Vec<f64>,
    pub potential: Vec<f64>,
    pub dispersion: Vec<f64>,
    pub barrier_strength: f64,
}

impl KronigPenneyProfile {
    /// Contiguous `[start, end]` position ranges where `|lhs| <= 1`
    pub fn allowed_bands(&self) -> Vec<(f64, f64)> {
        let mut bands = Vec::new();
        let mut current: Option<(f64, f64)> = None;

        for (&x, &f) in self.positions.iter().zip(&self.dispersion) {
            if f.abs() <= 1.0 {
                current = Some(match current {
                    Some((start, _)) => (start, x),
                    None => (x, x),
                });
            } else if let Some(band) = current.take() {
                bands.push(band);
            }
        }
        bands.extend(current);
        bands
    }
}

pub fn simulate(params: &KronigPenneyParameters) -> KronigPenneyProfile {
    let positions = linspace(params.x_start, params.x_end, params.points);
    let potential = positions.iter().map(|&x| potential(x, params)).collect();
    let dispersion = positions
        .iter()
        .map(|&x| dispersion_lhs(x, params.barrier_strength))
        .collect();

    KronigPenneyProfile {
        positions,
        potential,
        dispersion,
        barrier_strength: params.barrier_strength,
    }
}
