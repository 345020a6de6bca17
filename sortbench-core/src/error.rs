//! Error taxonomy for compile and trial failures.
//!
//! Both error kinds carry the captured subprocess output verbatim so the
//! caller can surface it to the operator; recovery is always skip-and-continue
//! at the provider or sweep level.

use crate::algorithm::Algorithm;
use std::process::ExitStatus;
use thiserror::Error;

/// A compiler front-end exited non-zero while building a benchmark variant.
///
/// Recovered at the provider level: the variant is dropped from the run and
/// the remaining compilers proceed.
#[derive(Debug, Error)]
#[error("compiler '{compiler}' failed to build the benchmark")]
pub struct CompileError {
    /// Identifying name of the compiler front-end (e.g. `g++`).
    pub compiler: String,
    /// Combined stdout/stderr captured from the compiler invocation.
    pub output: String,
}

/// A single benchmark trial failed.
///
/// Recovered at the sweep level: the trial is skipped and the sweep continues
/// with the next seed.
#[derive(Debug, Error)]
pub enum RunError {
    /// The benchmark process could not be started.
    #[error("failed to spawn benchmark executable: {0}")]
    Spawn(#[from] std::io::Error),

    /// The benchmark process exited non-zero. No parsing is attempted; the
    /// captured output is carried verbatim as the diagnostic.
    #[error("benchmark exited with {status}")]
    ExitFailure {
        /// Exit status reported by the OS.
        status: ExitStatus,
        /// Combined stdout/stderr captured from the run.
        output: String,
    },

    /// The process exited zero but one expected metric line never appeared.
    #[error("benchmark output is missing the '{0}' measure")]
    MissingMetric(Algorithm),
}

impl RunError {
    /// Captured subprocess output attached to this error, if any.
    pub fn captured_output(&self) -> Option<&str> {
        match self {
            RunError::ExitFailure { output, .. } => Some(output),
            _ => None,
        }
    }
}
