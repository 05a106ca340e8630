//! Chart styling.
//!
//! Styling is passed explicitly to every render call; nothing is shared
//! between charts.

/// Line colours used by the charts
pub struct ChartColors;

impl ChartColors {
    /// First pendulum, potential curve
    pub const RED: [u8; 3] = [255, 0, 0];
    /// Second pendulum, dispersion curve
    pub const BLUE: [u8; 3] = [0, 0, 255];
    /// ±1 band limits (Material green 700)
    pub const GUIDE_GREEN: [u8; 3] = [56, 142, 60];
    /// Canvas background
    pub const BACKGROUND: [u8; 3] = [255, 255, 255];
}

/// Resolution charts are laid out at
pub const DEFAULT_DPI: f64 = 96.0;

/// Per-call chart layout and stroke settings
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    /// Canvas width (px)
    pub width_px: u32,
    /// Canvas height (px)
    pub height_px: u32,
    /// Stroke width of data lines (px)
    pub line_width_px: u32,
    /// Caption font size (px)
    pub title_font_px: u32,
    /// Axis and legend font size (px)
    pub label_font_px: u32,
    /// Outer margin (px)
    pub margin_px: u32,
    /// Space reserved for tick labels on each axis (px)
    pub label_area_px: u32,
}

impl ChartStyle {
    /// Canvas of `width_in × height_in` inches at `dpi`
    pub fn from_inches(width_in: f64, height_in: f64, dpi: f64) -> Self {
        Self {
            width_px: (width_in * dpi).round() as u32,
            height_px: (height_in * dpi).round() as u32,
            ..Self::default()
        }
    }

    /// 5×3 inch canvas with a 0.7 pt line
    pub fn pendulum() -> Self {
        Self {
            line_width_px: points_to_px(0.7, DEFAULT_DPI),
            title_font_px: 14,
            label_font_px: 11,
            margin_px: 8,
            label_area_px: 32,
            ..Self::from_inches(5.0, 3.0, DEFAULT_DPI)
        }
    }

    /// 1024×768 canvas used for the Kronig-Penney plots
    pub fn kronig_penney() -> Self {
        Self {
            width_px: 1024,
            height_px: 768,
            title_font_px: 36,
            ..Self::default()
        }
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width_px: 800,
            height_px: 600,
            line_width_px: 1,
            title_font_px: 24,
            label_font_px: 14,
            margin_px: 10,
            label_area_px: 30,
        }
    }
}

/// Typographic points to whole pixels, never below one
pub fn points_to_px(points: f64, dpi: f64) -> u32 {
    ((points * dpi / 72.0).round() as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pendulum_canvas() {
        let style = ChartStyle::pendulum();
        assert_eq!((style.width_px, style.height_px), (480, 288));
        assert_eq!(style.line_width_px, 1);
    }

    #[test]
    fn test_points_to_px() {
        assert_eq!(points_to_px(72.0, 96.0), 96);
        assert_eq!(points_to_px(0.1, 96.0), 1);
    }
}
