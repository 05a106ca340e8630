//! Potential and graphical-analysis charts for the Kronig-Penney model.

use std::ops::Range;

use super::chart::{ChartSeries, LineChart};
use super::theme::ChartColors;
use crate::physics::KronigPenneyProfile;

fn position_range(profile: &KronigPenneyProfile) -> Range<f64> {
    match (profile.positions.first(), profile.positions.last()) {
        (Some(&start), Some(&end)) if end > start => start..end,
        _ => 0.0..1.0,
    }
}

pub fn potential_chart(profile: &KronigPenneyProfile) -> LineChart {
    let points = profile
        .positions
        .iter()
        .copied()
        .zip(profile.potential.iter().copied())
        .collect();

    LineChart {
        title: "potential function in kronig-penney model".to_owned(),
        x_label: "position x".to_owned(),
        y_label: Some("potential U(x)".to_owned()),
        x_range: position_range(profile),
        y_range: -0.5..1.5,
        series: vec![ChartSeries::new(points, ChartColors::RED)],
    }
}

/// Dispersion left-hand side with the ±1 limits of cos(ka)
pub fn dispersion_chart(profile: &KronigPenneyProfile) -> LineChart {
    let curve = profile
        .positions
        .iter()
        .copied()
        .zip(profile.dispersion.iter().copied())
        .collect();
    let guide = |level: f64| -> Vec<(f64, f64)> {
        profile.positions.iter().map(|&x| (x, level)).collect()
    };

    LineChart {
        title: "kronig-penney model".to_owned(),
        x_label: "a * alpha".to_owned(),
        y_label: None,
        x_range: position_range(profile),
        y_range: -1.5..2.5,
        series: vec![
            ChartSeries::new(curve, ChartColors::BLUE),
            ChartSeries::new(guide(1.0), ChartColors::GUIDE_GREEN),
            ChartSeries::new(guide(-1.0), ChartColors::GUIDE_GREEN),
        ],
    }
}

/// Output file name for the graphical analysis, e.g. `1.00000.png`
pub fn dispersion_file_name(barrier_strength: f64) -> String {
    format!("{:.5}.png", barrier_strength)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispersion_file_name() {
        assert_eq!(dispersion_file_name(1.0), "1.00000.png");
        assert_eq!(dispersion_file_name(2.5), "2.50000.png");
    }
}
