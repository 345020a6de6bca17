//! Benchmark trial execution.
//!
//! A [`Benchmark`] is a handle to one runnable variant: an executable path
//! plus a human-readable label. Each trial spawns the executable with the
//! `(size, seed)` configuration in process environment variables, blocks
//! until it exits, and parses the captured output into a `Measure`. The
//! handle owns no OS resources between invocations.

use sortbench_core::{Measure, RunError, parse_measure};
use std::path::PathBuf;
use std::process::Command;

/// Seam between the sweep driver and subprocess execution, so the driver can
/// be exercised with injected runners in tests.
pub trait TrialRunner {
    /// Variant label (compiler name or prebuilt tag).
    fn label(&self) -> &str;

    /// Execute one trial at `(size, seed)` and parse its output.
    fn run(&self, size: u64, seed: u64) -> Result<Measure, RunError>;
}

/// Handle to one benchmark executable variant.
#[derive(Debug, Clone)]
pub struct Benchmark {
    exe: PathBuf,
    label: String,
}

impl Benchmark {
    /// Wrap an executable path with its variant label.
    pub fn new(exe: impl Into<PathBuf>, label: impl Into<String>) -> Self {
        Self {
            exe: exe.into(),
            label: label.into(),
        }
    }
}

impl TrialRunner for Benchmark {
    fn label(&self) -> &str {
        &self.label
    }

    fn run(&self, size: u64, seed: u64) -> Result<Measure, RunError> {
        // Blocking call: no argv, configuration via SIZE/SEED, full output
        // capture. A hung executable blocks the run; no timeout exists.
        let output = Command::new(&self.exe)
            .env("SIZE", size.to_string())
            .env("SEED", seed.to_string())
            .output()?;

        let text = combined_output(&output.stdout, &output.stderr);

        if !output.status.success() {
            return Err(RunError::ExitFailure {
                status: output.status,
                output: text,
            });
        }

        parse_measure(&text)
    }
}

/// Concatenate captured stdout and stderr into the single text stream the
/// parser and diagnostics operate on. Metric lines arrive on stdout; the
/// line scan ignores everything it does not recognize.
fn combined_output(stdout: &[u8], stderr: &[u8]) -> String {
    let mut text = String::from_utf8_lossy(stdout).into_owned();
    if !stderr.is_empty() {
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        text.push_str(&String::from_utf8_lossy(stderr));
    }
    text
}
