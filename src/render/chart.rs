//! Line charts rendered into an in-memory RGB buffer.

use std::ops::Range;

use anyhow::{Context, Result};
use plotters::prelude::*;

use super::theme::{ChartColors, ChartStyle};

/// Stroke pattern of a series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    /// Alternating drawn and skipped segments (px)
    Dashed { dash_px: u32, gap_px: u32 },
}

impl LineStyle {
    /// 10 px on, 10 px off
    pub const DASHED: LineStyle = LineStyle::Dashed {
        dash_px: 10,
        gap_px: 10,
    };
}

/// One curve on a chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    /// Legend entry; unlabelled series are left out of the legend
    pub label: Option<String>,
    pub points: Vec<(f64, f64)>,
    pub color: [u8; 3],
    pub line: LineStyle,
}

impl ChartSeries {
    pub fn new(points: Vec<(f64, f64)>, color: [u8; 3]) -> Self {
        Self {
            label: None,
            points,
            color,
            line: LineStyle::Solid,
        }
    }

    pub fn labelled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_line(mut self, line: LineStyle) -> Self {
        self.line = line;
        self
    }
}

/// Titled cartesian chart with fixed axis ranges
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: Option<String>,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<ChartSeries>,
}

impl LineChart {
    /// Rasterize to tightly packed RGB bytes, `width_px × height_px × 3`
    pub fn render(&self, style: &ChartStyle) -> Result<Vec<u8>> {
        let (w, h) = (style.width_px, style.height_px);
        let [r, g, b] = ChartColors::BACKGROUND;
        let mut buffer = vec![0u8; w as usize * h as usize * 3];

        {
            let root = BitMapBackend::with_buffer(&mut buffer, (w, h)).into_drawing_area();
            root.fill(&RGBColor(r, g, b))?;

            let mut chart = ChartBuilder::on(&root)
                .caption(&self.title, ("sans-serif", style.title_font_px))
                .margin(style.margin_px)
                .x_label_area_size(style.label_area_px)
                .y_label_area_size(style.label_area_px)
                .build_cartesian_2d(self.x_range.clone(), self.y_range.clone())?;

            let mut mesh = chart.configure_mesh();
            mesh.x_desc(self.x_label.as_str())
                .label_style(("sans-serif", style.label_font_px));
            if let Some(y_label) = &self.y_label {
                mesh.y_desc(y_label.as_str());
            }
            mesh.draw()?;

            let mut has_legend = false;
            for series in &self.series {
                let [r, g, b] = series.color;
                let stroke = RGBColor(r, g, b).stroke_width(style.line_width_px);
                let points = series.points.iter().copied();

                let annotation = match series.line {
                    LineStyle::Solid => chart.draw_series(LineSeries::new(points, stroke))?,
                    LineStyle::Dashed { dash_px, gap_px } => {
                        chart.draw_series(DashedLineSeries::new(points, dash_px, gap_px, stroke))?
                    }
                };

                if let Some(label) = &series.label {
                    annotation
                        .label(label.as_str())
                        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], stroke));
                    has_legend = true;
                }
            }

            if has_legend {
                chart
                    .configure_series_labels()
                    .label_font(("sans-serif", style.label_font_px))
                    .background_style(&WHITE.mix(0.8))
                    .border_style(&BLACK)
                    .draw()?;
            }

            root.present()
                .with_context(|| format!("failed to render chart {:?}", self.title))?;
        }

        Ok(buffer)
    }
}

/// `[min, max]` of `values` widened by `fraction` of the span on both sides
///
/// A flat or empty input still yields a non-empty range.
pub fn padded_range<I>(values: I, fraction: f64) -> Range<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (min, max) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if min > max {
        return -1.0..1.0;
    }

    let span = max - min;
    let pad = if span > 0.0 { span * fraction } else { min.abs().max(1.0) * 0.5 };
    (min - pad)..(max + pad)
}
