//! CSV time-series export for pendulum runs.

use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use super::batch::OutputBatch;
use crate::state::{PendulumSample, PendulumTimeSeries};

/// Record for CSV time-series export
#[derive(Debug, Clone, Serialize)]
pub struct TimeSeriesRecord {
    /// Simulation time (seconds)
    pub time_sec: f64,
    /// First pendulum angle (rad)
    pub phi1_rad: f64,
    /// Second pendulum angle (rad)
    pub phi2_rad: f64,
    /// First pendulum angular velocity (rad/s)
    pub v1_rad_per_sec: f64,
    /// Second pendulum angular velocity (rad/s)
    pub v2_rad_per_sec: f64,
}

impl From<&PendulumSample> for TimeSeriesRecord {
    fn from(s: &PendulumSample) -> Self {
        Self {
            time_sec: s.t,
            phi1_rad: s.phi1,
            phi2_rad: s.phi2,
            v1_rad_per_sec: s.v1,
            v2_rad_per_sec: s.v2,
        }
    }
}

/// Write every sample of `series` to `path`, one row per sample
pub fn export_series_csv<P: AsRef<Path>>(series: &PendulumTimeSeries, path: P) -> Result<()> {
    let mut batch = OutputBatch::new();
    batch.stage_csv(series, path.as_ref())?;
    batch.commit()?;

    log::info!("CSV export completed: {} ({} rows)", path.as_ref().display(), series.len());
    Ok(())
}
