#![warn(missing_docs)]
//! Sortbench Report - Aggregated Series and Chart Output
//!
//! Consumes the per-variant sweep results and produces the persisted
//! artifacts:
//! - SVG summary chart (log-scale size axis, one filled curve per algorithm)
//! - JSON series dump (machine-readable)

mod json;
mod series;
mod svg;

pub use json::{SeriesReport, generate_json_report, save_json_report};
pub use series::SeriesTable;
pub use svg::{ChartStyle, render_chart, save_chart};

use thiserror::Error;

/// Failure while rendering or persisting a report artifact.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The series table holds no configurations to plot.
    #[error("series table is empty, nothing to render")]
    EmptyTable,

    /// Filesystem failure writing an artifact.
    #[error("failed to write report artifact: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("failed to serialize series report: {0}")]
    Json(#[from] serde_json::Error),
}
