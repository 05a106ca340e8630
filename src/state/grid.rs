//! Square RGB intensity grid.

/// Linear RGB triple, each channel in `[0, 1]`
pub type Rgb = [f64; 3];

/// Row-major `size × size` grid of RGB intensities, origin top-left
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityGrid {
    size: usize,
    pixels: Vec<Rgb>,
}

impl IntensityGrid {
    /// Wrap a row-major pixel buffer. Returns `None` on a length mismatch.
    pub fn from_pixels(size: usize, pixels: Vec<Rgb>) -> Option<Self> {
        (pixels.len() == size * size).then_some(Self { size, pixels })
    }

    pub(crate) fn from_row_major(size: usize, pixels: Vec<Rgb>) -> Self {
        debug_assert_eq!(pixels.len(), size * size);
        Self { size, pixels }
    }

    /// Side length in pixels
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x < self.size && y < self.size {
            Some(self.pixels[y * self.size + x])
        } else {
            None
        }
    }

    /// Pack into 8-bit RGB bytes
    ///
    /// Channels are scaled by 255 and truncated, not rounded.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|px| px.iter().map(|&c| channel_to_u8(c)))
            .collect()
    }
}

/// `[0, 1]` float to byte with truncation. NaN maps to 0.
pub fn channel_to_u8(value: f64) -> u8 {
    (value * 255.0) as u8
}
