#![warn(missing_docs)]
//! Sortbench Core - Measurement Types
//!
//! This crate provides the leaf types shared by the sortbench orchestrator:
//! - `Algorithm` tags matching the executable-under-test wire contract
//! - `Measure` for per-trial timings with accumulation and averaging
//! - line-oriented output parsing for captured benchmark output
//! - the error taxonomy for compile and trial failures

mod algorithm;
mod error;
mod measure;

pub use algorithm::Algorithm;
pub use error::{CompileError, RunError};
pub use measure::{Measure, parse_measure};
