//! SVG chart rendering.
//!
//! Charts are templated directly as SVG text: one stroked polyline plus a
//! translucent fill polygon per algorithm, a logarithmic array-size axis,
//! fixed axis labels, and a legend keyed by algorithm name. No plotting
//! library is involved; the output is a single self-contained `.svg` file
//! per benchmark variant.

use crate::{ReportError, SeriesTable};
use sortbench_core::Algorithm;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Chart dimensions in pixels.
#[derive(Debug, Clone, Copy)]
pub struct ChartStyle {
    /// Total chart width.
    pub width: u32,
    /// Total chart height.
    pub height: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 500,
        }
    }
}

const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;

const X_AXIS_LABEL: &str = "array size";
const Y_AXIS_LABEL: &str = "milliseconds";

const SERIES_COLORS: [&str; 3] = ["#1f77b4", "#ff7f0e", "#2ca02c"];
const STROKE_OPACITY: f64 = 0.75;
const FILL_OPACITY: f64 = 0.1;
const Y_TICKS: u32 = 5;

/// Render one summary chart for a variant's series table.
pub fn render_chart(
    table: &SeriesTable,
    title: &str,
    style: &ChartStyle,
) -> Result<String, ReportError> {
    if table.is_empty() {
        return Err(ReportError::EmptyTable);
    }

    let width = f64::from(style.width);
    let height = f64::from(style.height);
    let plot_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    // Logarithmic x mapping; sizes span multiple orders of magnitude.
    let log_min = (table.sizes()[0] as f64).log10();
    let log_max = (table.sizes()[table.len() - 1] as f64).log10();
    let log_span = if log_max > log_min {
        log_max - log_min
    } else {
        1.0
    };
    let x_at = |size: u64| {
        MARGIN_LEFT + ((size as f64).log10() - log_min) / log_span * plot_width
    };

    let y_max = (table.max_value() * 1.05).max(1.0);
    let y_at = |value: f64| MARGIN_TOP + plot_height - (value / y_max) * plot_height;
    let baseline = MARGIN_TOP + plot_height;

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = style.width,
        h = style.height,
    );
    let _ = writeln!(svg, r#"<rect width="{width}" height="{height}" fill="white"/>"#);
    let _ = writeln!(
        svg,
        r#"<text x="{x}" y="28" text-anchor="middle" font-family="sans-serif" font-size="16">{title}</text>"#,
        x = width / 2.0,
        title = xml_escape(title),
    );

    // Gridlines and tick labels.
    for &size in table.sizes() {
        let x = x_at(size);
        let _ = writeln!(
            svg,
            r##"<line x1="{x:.1}" y1="{y1:.1}" x2="{x:.1}" y2="{y2:.1}" stroke="#dddddd"/>"##,
            y1 = MARGIN_TOP,
            y2 = baseline,
        );
        let _ = writeln!(
            svg,
            r#"<text x="{x:.1}" y="{y:.1}" text-anchor="middle" font-family="sans-serif" font-size="11">{label}</text>"#,
            y = baseline + 18.0,
            label = format_size(size),
        );
    }
    for tick in 0..=Y_TICKS {
        let value = y_max * f64::from(tick) / f64::from(Y_TICKS);
        let y = y_at(value);
        let _ = writeln!(
            svg,
            r##"<line x1="{x1:.1}" y1="{y:.1}" x2="{x2:.1}" y2="{y:.1}" stroke="#dddddd"/>"##,
            x1 = MARGIN_LEFT,
            x2 = width - MARGIN_RIGHT,
        );
        let _ = writeln!(
            svg,
            r#"<text x="{x:.1}" y="{ty:.1}" text-anchor="end" font-family="sans-serif" font-size="11">{value:.0}</text>"#,
            x = MARGIN_LEFT - 8.0,
            ty = y + 4.0,
        );
    }

    // One translucent fill plus one curve per algorithm.
    for (index, algorithm) in Algorithm::ALL.into_iter().enumerate() {
        let color = SERIES_COLORS[index];
        let series = table.series(algorithm);

        let mut fill_points = String::new();
        let mut line_points = String::new();
        for (&size, &value) in table.sizes().iter().zip(series) {
            let _ = write!(line_points, "{:.1},{:.1} ", x_at(size), y_at(value));
        }
        fill_points.push_str(line_points.trim_end());
        let _ = write!(
            fill_points,
            " {:.1},{base:.1} {:.1},{base:.1}",
            x_at(table.sizes()[table.len() - 1]),
            x_at(table.sizes()[0]),
            base = baseline,
        );

        let _ = writeln!(
            svg,
            r#"<polygon points="{fill_points}" fill="{color}" fill-opacity="{FILL_OPACITY}"/>"#,
        );
        let _ = writeln!(
            svg,
            r#"<polyline points="{points}" fill="none" stroke="{color}" stroke-width="2" stroke-opacity="{STROKE_OPACITY}"/>"#,
            points = line_points.trim_end(),
        );
    }

    // Plot frame.
    let _ = writeln!(
        svg,
        r##"<rect x="{x}" y="{y}" width="{w:.1}" height="{h:.1}" fill="none" stroke="#333333"/>"##,
        x = MARGIN_LEFT,
        y = MARGIN_TOP,
        w = plot_width,
        h = plot_height,
    );

    // Axis labels.
    let _ = writeln!(
        svg,
        r#"<text x="{x:.1}" y="{y:.1}" text-anchor="middle" font-family="sans-serif" font-size="13">{X_AXIS_LABEL}</text>"#,
        x = MARGIN_LEFT + plot_width / 2.0,
        y = height - 16.0,
    );
    let _ = writeln!(
        svg,
        r#"<text x="18" y="{y:.1}" text-anchor="middle" font-family="sans-serif" font-size="13" transform="rotate(-90 18 {y:.1})">{Y_AXIS_LABEL}</text>"#,
        y = MARGIN_TOP + plot_height / 2.0,
    );

    // Legend, top-right corner of the plot area.
    let legend_x = width - MARGIN_RIGHT - 130.0;
    for (index, algorithm) in Algorithm::ALL.into_iter().enumerate() {
        let y = MARGIN_TOP + 16.0 + 18.0 * index as f64;
        let _ = writeln!(
            svg,
            r#"<line x1="{x1:.1}" y1="{y:.1}" x2="{x2:.1}" y2="{y:.1}" stroke="{color}" stroke-width="2" stroke-opacity="{STROKE_OPACITY}"/>"#,
            x1 = legend_x,
            x2 = legend_x + 24.0,
            color = SERIES_COLORS[index],
        );
        let _ = writeln!(
            svg,
            r#"<text x="{x:.1}" y="{ty:.1}" font-family="sans-serif" font-size="12">{name}</text>"#,
            x = legend_x + 30.0,
            ty = y + 4.0,
            name = algorithm.tag(),
        );
    }

    svg.push_str("</svg>\n");
    Ok(svg)
}

/// Render and persist a chart as `<dir>/<title>.svg`, creating the output
/// directory if absent. Returns the written path.
pub fn save_chart(
    table: &SeriesTable,
    title: &str,
    dir: &Path,
    style: &ChartStyle,
) -> Result<PathBuf, ReportError> {
    let svg = render_chart(table, title, style)?;
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{title}.svg"));
    fs::write(&path, svg)?;
    Ok(path)
}

/// Compact tick label for a size; powers of ten render as `1e<k>`.
fn format_size(size: u64) -> String {
    if size >= 10 && 10u64.pow(size.ilog10()) == size {
        format!("1e{}", size.ilog10())
    } else {
        size.to_string()
    }
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
