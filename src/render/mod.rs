//! Chart rendering using plotters.
//!
//! Charts are rasterized into memory and handed to [`crate::export`] for
//! writing, so every output image goes through the same PNG path.

mod chart;
pub mod kronig_penney;
pub mod pendulums;
mod theme;

pub use chart::{padded_range, ChartSeries, LineChart, LineStyle};
pub use theme::{points_to_px, ChartColors, ChartStyle, DEFAULT_DPI};
