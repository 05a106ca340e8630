//! Angle and velocity charts for a pendulum run.

use super::chart::{padded_range, ChartSeries, LineChart, LineStyle};
use super::theme::ChartColors;
use crate::state::PendulumTimeSeries;

/// Fraction of the run shown on the time axis
pub const VISIBLE_TIME_FRACTION: f64 = 0.5;

const Y_PADDING: f64 = 0.05;

/// "Coupled Pendulums": both angles against time
pub fn angles_chart(series: &PendulumTimeSeries, max_time: f64) -> LineChart {
    let (first, second) = series.angle_curves();
    pendulum_chart("Coupled Pendulums", "Angle (rad)", first, second, max_time)
}

/// "Velocity of Coupled Pendulums": both angular velocities against time
pub fn velocities_chart(series: &PendulumTimeSeries, max_time: f64) -> LineChart {
    let (first, second) = series.velocity_curves();
    pendulum_chart(
        "Velocity of Coupled Pendulums",
        "Velocity (rad/sec)",
        first,
        second,
        max_time,
    )
}

fn pendulum_chart(
    title: &str,
    y_label: &str,
    first: Vec<(f64, f64)>,
    second: Vec<(f64, f64)>,
    max_time: f64,
) -> LineChart {
    let x_max = max_time * VISIBLE_TIME_FRACTION;
    let visible = |points: Vec<(f64, f64)>| -> Vec<(f64, f64)> {
        points.into_iter().take_while(|&(t, _)| t <= x_max).collect()
    };
    let first = visible(first);
    let second = visible(second);

    let y_range = padded_range(first.iter().chain(&second).map(|&(_, y)| y), Y_PADDING);

    LineChart {
        title: title.to_owned(),
        x_label: "Time (sec)".to_owned(),
        y_label: Some(y_label.to_owned()),
        x_range: 0.0..x_max,
        y_range,
        series: vec![
            ChartSeries::new(first, ChartColors::RED).labelled("First pendulum"),
            ChartSeries::new(second, ChartColors::BLUE)
                .labelled("Second pendulum")
                .with_line(LineStyle::DASHED),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PendulumParameters;
    use crate::physics::pendulums::simulate;

    #[test]
    fn test_angles_chart_window() {
        let params = PendulumParameters {
            max_time: 2.0,
            time_step: 0.1,
            ..Default::default()
        };
        let sim = simulate(&params);
        let chart = angles_chart(&sim.series, params.max_time);

        assert_eq!(chart.x_range, 0.0..1.0);
        assert_eq!(chart.series.len(), 2);
        // 0.0..=1.0 in steps of 0.1
        assert_eq!(chart.series[0].points.len(), 11);
        assert_eq!(chart.series[0].line, LineStyle::Solid);
        assert_eq!(chart.series[1].line, LineStyle::DASHED);
        assert_eq!(chart.series[1].label.as_deref(), Some("Second pendulum"));
    }

    #[test]
    fn test_velocity_range_covers_data() {
        let params = PendulumParameters {
            max_time: 4.0,
            time_step: 0.01,
            ..Default::default()
        };
        let sim = simulate(&params);
        let chart = velocities_chart(&sim.series, params.max_time);
        for s in &chart.series {
            for &(_, v) in &s.points {
                assert!(chart.y_range.contains(&v));
            }
        }
    }
}
