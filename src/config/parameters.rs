//! Parameter structures for each simulation.
//!
//! Field names double as the JSON keys. Units are part of the field docs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::error::{require_non_negative, require_positive, ConfigError, Requirement};

/// Step used when a pendulum config omits `time_step`
pub const DEFAULT_TIME_STEP_SEC: f64 = 0.001;

/// Grid side length used when a rings config omits `image_size`
pub const DEFAULT_IMAGE_SIZE: usize = 5000;

/// Largest grid side a PNG can hold
pub const MAX_IMAGE_SIZE: usize = u32::MAX as usize;

fn default_time_step() -> f64 {
    DEFAULT_TIME_STEP_SEC
}

fn default_image_size() -> usize {
    DEFAULT_IMAGE_SIZE
}

fn read_config(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to open config file {}", path.display()))
}

/// Two identical pendulums joined by a spring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendulumParameters {
    /// Gravitational acceleration (m/s²)
    pub gravity_acceleration: f64,
    /// Pendulum length (m)
    pub pendulum_length: f64,
    /// Bob mass (kg)
    pub pendulum_mass: f64,
    /// Spring stiffness (N/m)
    #[serde(default)]
    pub spring_stiffness: f64,
    /// Exponential damping rate (1/s)
    #[serde(default)]
    pub damping_coefficient: f64,
    /// Distance from the pivot to the spring attachment (m)
    #[serde(default)]
    pub distance_to_spring: f64,
    /// Initial angle of the first pendulum (rad)
    #[serde(default)]
    pub initial_angle1: f64,
    /// Initial angle of the second pendulum (rad)
    #[serde(default)]
    pub initial_angle2: f64,
    /// Total simulated time (s)
    pub max_time: f64,
    /// Sampling step (s)
    #[serde(default = "default_time_step")]
    pub time_step: f64,
    /// Optional CSV dump of the computed series
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csv_output: Option<PathBuf>,
}

impl PendulumParameters {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Read, parse and validate a config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = read_config(path)?;
        let params = Self::from_json(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        log::info!("Loaded pendulum parameters from {:?}", path);
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("gravity_acceleration", self.gravity_acceleration)?;
        require_positive("pendulum_length", self.pendulum_length)?;
        require_positive("pendulum_mass", self.pendulum_mass)?;
        require_non_negative("spring_stiffness", self.spring_stiffness)?;
        require_non_negative("damping_coefficient", self.damping_coefficient)?;
        require_non_negative("distance_to_spring", self.distance_to_spring)?;
        require_positive("max_time", self.max_time)?;
        require_positive("time_step", self.time_step)?;
        Ok(())
    }
}

impl Default for PendulumParameters {
    fn default() -> Self {
        Self {
            gravity_acceleration: 9.8,
            pendulum_length: 1.0,
            pendulum_mass: 1.0,
            spring_stiffness: 10.0,
            damping_coefficient: 0.05,
            distance_to_spring: 0.5,
            initial_angle1: 0.1,
            initial_angle2: 0.0,
            max_time: 20.0,
            time_step: DEFAULT_TIME_STEP_SEC,
            csv_output: None,
        }
    }
}

/// Plano-convex lens resting on a flat plate
///
/// A zero `spectrum_width` selects monochromatic light at `wavelength`;
/// anything else averages a band around `spectrum_center`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingsParameters {
    /// Lens radius, in the same length unit as the wavelengths
    pub lens_radius: f64,
    /// Monochromatic wavelength (nm)
    pub wavelength: f64,
    /// Band center for quasi-monochromatic light (nm)
    #[serde(default)]
    pub spectrum_center: f64,
    /// Band width for quasi-monochromatic light (nm)
    #[serde(default)]
    pub spectrum_width: f64,
    /// Side length of the square output grid (px)
    #[serde(default = "default_image_size")]
    pub image_size: usize,
}

impl RingsParameters {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Read, parse and validate a config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = read_config(path)?;
        let params = Self::from_json(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        log::info!("Loaded Newton's rings parameters from {:?}", path);
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("lens_radius", self.lens_radius)?;
        require_non_negative("wavelength", self.wavelength)?;
        require_non_negative("spectrum_center", self.spectrum_center)?;
        require_non_negative("spectrum_width", self.spectrum_width)?;
        require_positive("image_size", self.image_size as f64)?;
        if self.image_size > MAX_IMAGE_SIZE {
            return Err(ConfigError::Invalid {
                field: "image_size",
                value: self.image_size as f64,
                requirement: Requirement::Custom("<= 4294967295"),
            });
        }
        Ok(())
    }

    /// True when a single wavelength is used
    pub fn is_monochromatic(&self) -> bool {
        self.spectrum_width == 0.0
    }
}

impl Default for RingsParameters {
    fn default() -> Self {
        Self {
            lens_radius: 10_000.0,
            wavelength: 550.0,
            spectrum_center: 0.0,
            spectrum_width: 0.0,
            image_size: DEFAULT_IMAGE_SIZE,
        }
    }
}

/// One-dimensional periodic rectangular potential
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KronigPenneyParameters {
    /// Width of the zero-potential well inside one period
    pub potential_width: f64,
    /// Lattice period
    pub period: f64,
    /// Height of the barrier between wells
    pub barrier_height: f64,
    /// First sampled position
    pub x_start: f64,
    /// Last sampled position
    pub x_end: f64,
    /// Number of sampled positions
    pub points: usize,
    /// Dimensionless barrier strength P
    pub barrier_strength: f64,
}

impl KronigPenneyParameters {
    /// Load from JSON file or return defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(params) => {
                    log::info!("Loaded Kronig-Penney parameters from {:?}", path.as_ref());
                    params
                }
                Err(e) => {
                    log::warn!("Failed to parse Kronig-Penney parameters: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Kronig-Penney parameters file not found, using defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("potential_width", self.potential_width)?;
        require_positive("period", self.period)?;
        if self.potential_width >= self.period {
            return Err(ConfigError::Invalid {
                field: "potential_width",
                value: self.potential_width,
                requirement: Requirement::Custom("< period"),
            });
        }
        if self.points < 2 {
            return Err(ConfigError::Invalid {
                field: "points",
                value: self.points as f64,
                requirement: Requirement::Custom(">= 2"),
            });
        }
        if !(self.x_end > self.x_start) {
            return Err(ConfigError::Invalid {
                field: "x_end",
                value: self.x_end,
                requirement: Requirement::Custom("> x_start"),
            });
        }
        Ok(())
    }
}

impl Default for KronigPenneyParameters {
    fn default() -> Self {
        Self {
            potential_width: 1.0,
            period: 2.0,
            barrier_height: 1.0,
            x_start: -10.0,
            x_end: 11.0,
            points: 1000,
            barrier_strength: 1.0,
        }
    }
}
