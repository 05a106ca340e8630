//! PNG output for intensity grids and rendered charts.

use std::path::Path;

use anyhow::{Context, Result};

use super::batch::OutputBatch;
use crate::state::IntensityGrid;

/// Save tightly packed 8-bit RGB pixels as PNG at `path`
pub fn save_rgb_png<P: AsRef<Path>>(pixels: &[u8], width: u32, height: u32, path: P) -> Result<()> {
    let mut batch = OutputBatch::new();
    batch.stage_png(pixels, width, height, path)?;
    batch.commit()
}

/// Pack the grid 1:1 into RGB bytes with truncating conversion
fn grid_to_png_bytes(grid: &IntensityGrid) -> Result<(Vec<u8>, u32)> {
    let size = u32::try_from(grid.size()).context("grid too large for PNG")?;
    Ok((grid.to_rgb8(), size))
}

/// Write the grid 1:1 as an RGB PNG
pub fn save_intensity_png<P: AsRef<Path>>(grid: &IntensityGrid, path: P) -> Result<()> {
    let (pixels, size) = grid_to_png_bytes(grid)?;
    save_rgb_png(&pixels, size, size, path)
}
