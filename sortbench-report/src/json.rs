//! JSON series output.

use crate::{ReportError, SeriesTable};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Machine-readable dump of one variant's aggregated series.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesReport<'a> {
    /// Variant label (compiler name or prebuilt tag).
    pub variant: &'a str,
    /// Tool version that produced the report.
    pub version: &'static str,
    /// UTC timestamp of report generation.
    pub generated_at: DateTime<Utc>,
    /// The aggregated table: size sequence plus aligned mean series.
    pub table: &'a SeriesTable,
}

/// Generate a prettified JSON report for one variant.
pub fn generate_json_report(table: &SeriesTable, variant: &str) -> Result<String, ReportError> {
    let report = SeriesReport {
        variant,
        version: env!("CARGO_PKG_VERSION"),
        generated_at: Utc::now(),
        table,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Persist the JSON report as `<dir>/<title>.json`. Returns the written path.
pub fn save_json_report(
    table: &SeriesTable,
    title: &str,
    dir: &Path,
) -> Result<PathBuf, ReportError> {
    let json = generate_json_report(table, title)?;
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{title}.json"));
    fs::write(&path, json)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortbench_core::Measure;

    #[test]
    fn json_report_round_trips_series_values() {
        let mut table = SeriesTable::new();
        table.push_mean(1_000, &Measure::new(12.0, 45.0, 9.0));
        table.push_mean(10_000, &Measure::new(130.0, 480.0, 95.0));

        let json = generate_json_report(&table, "g++").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["variant"], "g++");
        assert_eq!(value["table"]["sizes"][1], 10_000);
        assert_eq!(value["table"]["qsort"][0], 45.0);
        assert_eq!(value["table"]["qqsort"][1], 95.0);
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn json_report_is_written_next_to_charts() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut table = SeriesTable::new();
        table.push_mean(1_000, &Measure::new(1.0, 2.0, 3.0));

        let path = save_json_report(&table, "clang++", dir.path()).unwrap();
        assert_eq!(path, dir.path().join("clang++.json"));
        assert!(path.exists());
    }
}
