//! Bar charts rendered as SVG, rasterized to PNG with resvg.

use std::fmt::Write as _;
use std::path::Path;

use resvg::tiny_skia::{self, Pixmap};
use resvg::usvg::{Options, Tree};
use tracing::info;

use crate::error::{ReportError, Result};

const CHART_WIDTH: u32 = 800;
const CHART_HEIGHT: u32 = 500;
const MARGIN_LEFT: f32 = 70.0;
const MARGIN_RIGHT: f32 = 30.0;
const MARGIN_TOP: f32 = 60.0;
const MARGIN_BOTTOM: f32 = 90.0;
const BAR_FILL: &str = "#87ceeb";
const AXIS_COLOR: &str = "#333333";

/// Simple vertical bar chart over category/count pairs.
///
/// Zero-count categories keep their labeled slot so the chart shows the full
/// partition even when nothing is missing.
#[derive(Debug, Clone)]
pub struct BarChart {
    title: String,
    y_label: String,
    bars: Vec<(String, usize)>,
}

impl BarChart {
    pub fn new(title: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            y_label: y_label.into(),
            bars: Vec::new(),
        }
    }

    pub fn push_bar(&mut self, label: impl Into<String>, count: usize) {
        self.bars.push((label.into(), count));
    }

    pub fn with_bars<I, L>(mut self, bars: I) -> Self
    where
        I: IntoIterator<Item = (L, usize)>,
        L: Into<String>,
    {
        for (label, count) in bars {
            self.push_bar(label, count);
        }
        self
    }

    /// Build the chart as an SVG document.
    pub fn to_svg(&self) -> String {
        let plot_width = CHART_WIDTH as f32 - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_height = CHART_HEIGHT as f32 - MARGIN_TOP - MARGIN_BOTTOM;
        let baseline = MARGIN_TOP + plot_height;
        let max_count = self.bars.iter().map(|(_, count)| *count).max().unwrap_or(0);
        let scale = plot_height / max_count.max(1) as f32;

        let mut svg = String::new();
        let _ = write!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{CHART_WIDTH}\" \
             height=\"{CHART_HEIGHT}\" viewBox=\"0 0 {CHART_WIDTH} {CHART_HEIGHT}\">"
        );
        let _ = write!(
            svg,
            "<rect width=\"{CHART_WIDTH}\" height=\"{CHART_HEIGHT}\" fill=\"white\"/>"
        );
        let _ = write!(
            svg,
            "<text x=\"{x}\" y=\"30\" text-anchor=\"middle\" font-family=\"sans-serif\" \
             font-size=\"20\" fill=\"{AXIS_COLOR}\">{title}</text>",
            x = CHART_WIDTH / 2,
            title = escape_xml(&self.title),
        );
        // Y-axis label, rotated along the axis.
        let _ = write!(
            svg,
            "<text x=\"20\" y=\"{y}\" text-anchor=\"middle\" font-family=\"sans-serif\" \
             font-size=\"14\" fill=\"{AXIS_COLOR}\" transform=\"rotate(-90 20 {y})\">{label}</text>",
            y = MARGIN_TOP + plot_height / 2.0,
            label = escape_xml(&self.y_label),
        );
        // Axes.
        let _ = write!(
            svg,
            "<line x1=\"{x0}\" y1=\"{y0}\" x2=\"{x0}\" y2=\"{y1}\" stroke=\"{AXIS_COLOR}\"/>\
             <line x1=\"{x0}\" y1=\"{y1}\" x2=\"{x1}\" y2=\"{y1}\" stroke=\"{AXIS_COLOR}\"/>",
            x0 = MARGIN_LEFT,
            y0 = MARGIN_TOP,
            y1 = baseline,
            x1 = MARGIN_LEFT + plot_width,
        );

        if !self.bars.is_empty() {
            let slot = plot_width / self.bars.len() as f32;
            let bar_width = slot * 0.6;
            for (idx, (label, count)) in self.bars.iter().enumerate() {
                let x = MARGIN_LEFT + slot * idx as f32 + (slot - bar_width) / 2.0;
                let height = *count as f32 * scale;
                let y = baseline - height;
                let center = x + bar_width / 2.0;
                let _ = write!(
                    svg,
                    "<rect x=\"{x:.1}\" y=\"{y:.1}\" width=\"{bar_width:.1}\" \
                     height=\"{height:.1}\" fill=\"{BAR_FILL}\" stroke=\"{AXIS_COLOR}\"/>"
                );
                let _ = write!(
                    svg,
                    "<text x=\"{center:.1}\" y=\"{vy:.1}\" text-anchor=\"middle\" \
                     font-family=\"sans-serif\" font-size=\"14\" fill=\"{AXIS_COLOR}\">{count}</text>",
                    vy = y - 6.0,
                );
                let _ = write!(
                    svg,
                    "<text x=\"{center:.1}\" y=\"{ly:.1}\" text-anchor=\"end\" \
                     font-family=\"sans-serif\" font-size=\"13\" fill=\"{AXIS_COLOR}\" \
                     transform=\"rotate(-45 {center:.1} {ly:.1})\">{label}</text>",
                    ly = baseline + 18.0,
                    label = escape_xml(label),
                );
            }
        }
        svg.push_str("</svg>");
        svg
    }

    /// Rasterize the chart and write it as a PNG.
    pub fn render_png(&self, path: &Path) -> Result<()> {
        let svg = self.to_svg();
        let mut options = Options::default();
        options.fontdb_mut().load_system_fonts();
        let tree = Tree::from_data(svg.as_bytes(), &options).map_err(|error| {
            ReportError::Chart {
                message: error.to_string(),
            }
        })?;
        let mut pixmap =
            Pixmap::new(CHART_WIDTH, CHART_HEIGHT).ok_or_else(|| ReportError::Chart {
                message: "failed to allocate pixmap".to_string(),
            })?;
        resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());
        pixmap
            .save_png(path)
            .map_err(|error| ReportError::Chart {
                message: error.to_string(),
            })?;
        info!(path = %path.display(), bars = self.bars.len(), "wrote chart");
        Ok(())
    }
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
