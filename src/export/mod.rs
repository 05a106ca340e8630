//! Export functionality for simulation results.
//!
//! Provides PNG output for grids and charts, and CSV time-series export.
//! Every write goes through [`OutputBatch`], so a failed run leaves no
//! output behind.

mod batch;
mod csv_export;
mod image_export;

pub use batch::OutputBatch;
pub use csv_export::{export_series_csv, TimeSeriesRecord};
pub use image_export::{save_intensity_png, save_rgb_png};
