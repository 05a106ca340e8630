//! Pendulum time-series data structures.

use serde::{Deserialize, Serialize};

/// Angles and angular velocities of both pendulums at one instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendulumSample {
    /// Time since release (s)
    pub t: f64,
    /// Angle of the first pendulum (rad)
    pub phi1: f64,
    /// Angle of the second pendulum (rad)
    pub phi2: f64,
    /// Angular velocity of the first pendulum (rad/s)
    pub v1: f64,
    /// Angular velocity of the second pendulum (rad/s)
    pub v2: f64,
}

/// Samples ordered by strictly increasing time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PendulumTimeSeries {
    samples: Vec<PendulumSample>,
}

impl PendulumTimeSeries {
    pub(crate) fn from_samples(samples: Vec<PendulumSample>) -> Self {
        debug_assert!(samples.windows(2).all(|w| w[0].t < w[1].t));
        Self { samples }
    }

    pub fn samples(&self) -> &[PendulumSample] {
        &self.samples
    }

    pub fn iter(&self) -> impl Iterator<Item = &PendulumSample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<&PendulumSample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&PendulumSample> {
        self.samples.last()
    }

    /// Timestamps in order
    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.t).collect()
    }

    /// `(t, phi1)` and `(t, phi2)` point lists
    pub fn angle_curves(&self) -> (Vec<(f64, f64)>, Vec<(f64, f64)>) {
        self.curves(|s| (s.phi1, s.phi2))
    }

    /// `(t, v1)` and `(t, v2)` point lists
    pub fn velocity_curves(&self) -> (Vec<(f64, f64)>, Vec<(f64, f64)>) {
        self.curves(|s| (s.v1, s.v2))
    }

    fn curves<F>(&self, pick: F) -> (Vec<(f64, f64)>, Vec<(f64, f64)>)
    where
        F: Fn(&PendulumSample) -> (f64, f64),
    {
        self.samples
            .iter()
            .map(|s| {
                let (a, b) = pick(s);
                ((s.t, a), (s.t, b))
            })
            .unzip()
    }
}

impl<'a> IntoIterator for &'a PendulumTimeSeries {
    type Item = &'a PendulumSample;
    type IntoIter = std::slice::Iter<'a, PendulumSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
