//! Coupled pendulums via normal-mode decomposition.
//!
//! Two identical pendulums of length L and mass m are joined by a spring of
//! stiffness k attached at distance d from each pivot. In the small-angle
//! limit the motion splits into two normal modes:
//!
//! - in-phase:     ω₁ = √(g/L), the spring never stretches
//! - anti-phase:   ω₂ = √(g/L + 2kd²/(mL²))
//!
//! With mode amplitudes a = (φ₁⁰ + φ₂⁰)/2 and b = (φ₁⁰ − φ₂⁰)/2 and a uniform
//! damping envelope e^(−γt):
//!
//! φ₁(t) = (a cos ω₁t + b cos ω₂t) e^(−γt)
//! φ₂(t) = (a cos ω₁t − b cos ω₂t) e^(−γt)
//!
//! The velocities are the undamped derivatives scaled by the same envelope.

use serde::Serialize;

use crate::config::PendulumParameters;
use crate::state::{PendulumSample, PendulumTimeSeries};

/// Slack, in units of one step, for `max_time / time_step` landing just under
/// an integer
pub const STEP_COUNT_EPSILON: f64 = 1e-9;

/// Angular frequencies of the two normal modes (rad/s)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalModeFrequencies {
    /// In-phase mode
    pub omega1: f64,
    /// Anti-phase mode
    pub omega2: f64,
}

impl NormalModeFrequencies {
    pub fn from_parameters(params: &PendulumParameters) -> Self {
        let g_over_l = params.gravity_acceleration / params.pendulum_length;
        let coupling = 2.0 * params.spring_stiffness * params.distance_to_spring.powi(2)
            / (params.pendulum_mass * params.pendulum_length.powi(2));

        Self {
            omega1: g_over_l.sqrt(),
            omega2: (g_over_l + coupling).sqrt(),
        }
    }
}

/// Normal-mode amplitudes derived from the initial angles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeAmplitudes {
    pub in_phase: f64,
    pub anti_phase: f64,
}

impl ModeAmplitudes {
    pub fn from_angles(angle1: f64, angle2: f64) -> Self {
        Self {
            in_phase: (angle1 + angle2) / 2.0,
            anti_phase: (angle1 - angle2) / 2.0,
        }
    }
}

/// Output of one pendulum run
#[derive(Debug, Clone)]
pub struct PendulumSimulation {
    pub frequencies: NormalModeFrequencies,
    pub series: PendulumTimeSeries,
}

/// Number of samples for `[0, max_time]` at `time_step`: ⌊T/dt + ε⌋ + 1
pub fn sample_count(max_time: f64, time_step: f64) -> usize {
    (max_time / time_step + STEP_COUNT_EPSILON).floor() as usize + 1
}

/// State of both pendulums at time `t`
pub fn sample_at(
    t: f64,
    amplitudes: ModeAmplitudes,
    frequencies: NormalModeFrequencies,
    damping: f64,
) -> PendulumSample {
    let ModeAmplitudes { in_phase: a, anti_phase: b } = amplitudes;
    let NormalModeFrequencies { omega1, omega2 } = frequencies;

    let envelope = (-damping * t).exp();
    let (sin1, cos1) = (omega1 * t).sin_cos();
    let (sin2, cos2) = (omega2 * t).sin_cos();

    PendulumSample {
        t,
        phi1: (a * cos1 + b * cos2) * envelope,
        phi2: (a * cos1 - b * cos2) * envelope,
        v1: (-a * omega1 * sin1 - b * omega2 * sin2) * envelope,
        v2: (-a * omega1 * sin1 + b * omega2 * sin2) * envelope,
    }
}

/// Evaluate the closed-form solution on `t = i·dt`, `i = 0..sample_count`
///
/// Time is computed from the integer index so that no rounding error
/// accumulates across steps.
pub fn simulate(params: &PendulumParameters) -> PendulumSimulation {
    let frequencies = NormalModeFrequencies::from_parameters(params);
    let amplitudes = ModeAmplitudes::from_angles(params.initial_angle1, params.initial_angle2);
    let n = sample_count(params.max_time, params.time_step);

    log::debug!("Evaluating {} pendulum samples (dt = {} s)", n, params.time_step);

    let samples = (0..n)
        .map(|i| {
            let t = i as f64 * params.time_step;
            sample_at(t, amplitudes, frequencies, params.damping_coefficient)
        })
        .collect();

    log::info!(
        "Normal frequencies: omega_1 = {:.4} rad/s, omega_2 = {:.4} rad/s",
        frequencies.omega1,
        frequencies.omega2
    );

    PendulumSimulation {
        frequencies,
        series: PendulumTimeSeries::from_samples(samples),
    }
}
