//! Sweep driver: the cross product of sizes and seeds against one variant.

use crate::config::SortbenchConfig;
use crate::format::indent_diagnostic;
use crate::runner::TrialRunner;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use sortbench_core::Measure;
use sortbench_report::SeriesTable;

/// Immutable sweep parameters, shared read-only by every variant in a run.
///
/// The seed set is produced once per process so all variants are measured
/// against identical inputs; it is reproducible run-over-run only when
/// pinned in configuration.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Array sizes, ascending.
    pub sizes: Vec<u64>,
    /// Seed set, one trial per seed.
    pub seeds: Vec<u64>,
}

impl SweepConfig {
    /// Build the sweep from configuration, generating the seed set unless
    /// one is pinned.
    pub fn from_config(config: &SortbenchConfig) -> Self {
        let seeds = match &config.sweep.seeds {
            Some(pinned) => pinned.clone(),
            None => {
                let mut rng = rand::rng();
                (0..config.sweep.trials)
                    .map(|_| rng.random_range(1..=10_000))
                    .collect()
            }
        };

        let mut sizes = config.sweep.sizes.clone();
        sizes.sort_unstable();

        Self { sizes, seeds }
    }

    /// Nominal trial count per size: the configured number of seeds.
    pub fn trial_count(&self) -> u32 {
        self.seeds.len() as u32
    }

    /// Total number of trials in the sweep.
    pub fn total_trials(&self) -> u64 {
        (self.sizes.len() * self.seeds.len()) as u64
    }
}

/// Drive the full sweep against one variant and aggregate the results.
///
/// Per size: a fresh running `Measure` accumulates every successful trial;
/// a failed trial is reported and skipped, never aborting the size or the
/// sweep. The running total is divided by the nominal trial count (the
/// configured number of seeds, not the number of successes) and appended as
/// that size's mean. Every configured size therefore contributes exactly one
/// entry per series, regardless of how many trials failed.
pub fn run_sweep(runner: &dyn TrialRunner, sweep: &SweepConfig) -> SeriesTable {
    let mut table = SeriesTable::new();

    let pb = ProgressBar::new(sweep.total_trials());
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    for &size in &sweep.sizes {
        let mut total = Measure::default();

        for &seed in &sweep.seeds {
            pb.set_message(format!("{} size={size} seed={seed}", runner.label()));
            match runner.run(size, seed) {
                Ok(measure) => total.add(&measure),
                Err(error) => {
                    tracing::error!(
                        "could not measure benchmark for '{}' (size={size} seed={seed}): {error}",
                        runner.label(),
                    );
                    if let Some(output) = error.captured_output() {
                        tracing::error!("{}", indent_diagnostic(output));
                    }
                }
            }
            pb.inc(1);
        }

        total.divide(sweep.trial_count());
        table.push_mean(size, &total);
    }

    pb.finish_and_clear();
    table
}
