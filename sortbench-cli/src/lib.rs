#![warn(missing_docs)]
//! Sortbench CLI
//!
//! Orchestrates the comparative sorting benchmark: resolves one executable
//! variant per compiler (or the single prebuilt binary on Windows), drives
//! each variant across the size x seed sweep, and renders one summary chart
//! per variant.

mod compiler;
mod config;
mod format;
mod runner;
mod sweep;

pub use compiler::{Compiler, compile_variants, compilers_from_config, is_windows, resolve_variants};
pub use config::SortbenchConfig;
pub use format::indent_diagnostic;
pub use runner::{Benchmark, TrialRunner};
pub use sweep::{SweepConfig, run_sweep};

use clap::{Parser, Subcommand};
use sortbench_report::{ChartStyle, save_chart, save_json_report};
use std::path::PathBuf;

/// Sortbench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "sortbench")]
#[command(author, version, about = "Comparative sorting-benchmark orchestrator")]
pub struct Cli {
    /// Optional subcommand (Run, List, Init); defaults to Run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Array sizes to sweep, ascending (overrides sortbench.toml)
    #[arg(long, value_delimiter = ',')]
    pub sizes: Vec<u64>,

    /// Number of random seeds per size
    #[arg(long)]
    pub trials: Option<usize>,

    /// Pin the seed set explicitly for reproducible runs
    #[arg(long, value_delimiter = ',')]
    pub seeds: Vec<u64>,

    /// Output directory for chart artifacts
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write a JSON series dump per variant
    #[arg(long)]
    pub json: bool,

    /// Path to the prebuilt benchmark executable (Windows strategy)
    #[arg(long)]
    pub prebuilt: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the benchmark sweep (default)
    Run,
    /// Print the planned sweep and variants without executing
    List,
    /// Write a default sortbench.toml into the current directory
    Init,
}

/// Run the sortbench CLI. This is the entry point for the binary.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the sortbench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("sortbench_cli=debug")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("sortbench_cli=info")
            .init();
    }

    // Discover sortbench.toml configuration (CLI flags override)
    let mut config = SortbenchConfig::discover().unwrap_or_default();
    apply_overrides(&cli, &mut config);

    match cli.command {
        Some(Commands::List) => list_plan(&config),
        Some(Commands::Init) => init_config(),
        Some(Commands::Run) | None => run_benchmarks(&config),
    }
}

/// Layer CLI flags over the discovered configuration.
fn apply_overrides(cli: &Cli, config: &mut SortbenchConfig) {
    if !cli.sizes.is_empty() {
        config.sweep.sizes = cli.sizes.clone();
    }
    if let Some(trials) = cli.trials {
        config.sweep.trials = trials;
    }
    if !cli.seeds.is_empty() {
        config.sweep.seeds = Some(cli.seeds.clone());
    }
    if let Some(ref output) = cli.output {
        config.output.directory = output.to_string_lossy().into_owned();
    }
    if cli.json {
        config.output.json = true;
    }
    if let Some(ref prebuilt) = cli.prebuilt {
        config.prebuilt.path = prebuilt.to_string_lossy().into_owned();
    }
}

fn run_benchmarks(config: &SortbenchConfig) -> anyhow::Result<()> {
    if config.sweep.sizes.is_empty() {
        anyhow::bail!("no array sizes configured, nothing to sweep");
    }
    // One seed set per process, shared by every variant. Validated after
    // construction so a pinned empty list is caught the same as trials = 0;
    // an empty set would make the mean divisor zero.
    let sweep = SweepConfig::from_config(config);
    if sweep.seeds.is_empty() {
        anyhow::bail!("at least one trial per size is required");
    }
    tracing::debug!("seed set: {:?}", sweep.seeds);

    let variants = resolve_variants(config);
    if variants.is_empty() {
        anyhow::bail!("no benchmark executables available, nothing to run");
    }

    let output_dir = PathBuf::from(&config.output.directory);
    let style = ChartStyle {
        width: config.visuals.width,
        height: config.visuals.height,
    };

    for benchmark in &variants {
        tracing::info!(
            "sweeping '{}' across {} sizes x {} seeds",
            benchmark.label(),
            sweep.sizes.len(),
            sweep.seeds.len(),
        );

        let table = run_sweep(benchmark, &sweep);

        let chart = save_chart(&table, benchmark.label(), &output_dir, &style)?;
        println!("Chart written to: {}", chart.display());

        if config.output.json {
            let json = save_json_report(&table, benchmark.label(), &output_dir)?;
            println!("Series written to: {}", json.display());
        }
    }

    Ok(())
}

fn list_plan(config: &SortbenchConfig) -> anyhow::Result<()> {
    println!("Sortbench Plan:");

    if is_windows() {
        println!("├── variant: {} (prebuilt: {})", config.prebuilt.label, config.prebuilt.path);
    } else {
        for compiler in compilers_from_config(config) {
            println!("├── variant: {} (compiled from source)", compiler.name());
        }
    }

    let sizes: Vec<String> = config.sweep.sizes.iter().map(u64::to_string).collect();
    println!("├── sizes: {}", sizes.join(", "));
    match &config.sweep.seeds {
        Some(seeds) => {
            let seeds: Vec<String> = seeds.iter().map(u64::to_string).collect();
            println!("├── seeds: {} (pinned)", seeds.join(", "));
        }
        None => println!("├── seeds: {} random per run", config.sweep.trials),
    }
    println!("└── output: {}/", config.output.directory);

    Ok(())
}

fn init_config() -> anyhow::Result<()> {
    let path = PathBuf::from("sortbench.toml");
    if path.exists() {
        anyhow::bail!("sortbench.toml already exists, refusing to overwrite");
    }
    std::fs::write(&path, SortbenchConfig::default_toml())?;
    println!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn overrides_replace_config_values() {
        let cli = Cli::parse_from([
            "sortbench",
            "--sizes",
            "100,1000",
            "--trials",
            "2",
            "--output",
            "charts",
            "--json",
        ]);
        let mut config = SortbenchConfig::default();
        apply_overrides(&cli, &mut config);

        assert_eq!(config.sweep.sizes, vec![100, 1_000]);
        assert_eq!(config.sweep.trials, 2);
        assert_eq!(config.output.directory, "charts");
        assert!(config.output.json);
    }

    #[test]
    fn pinned_seeds_flag_sets_seed_list() {
        let cli = Cli::parse_from(["sortbench", "--seeds", "42,1337"]);
        let mut config = SortbenchConfig::default();
        apply_overrides(&cli, &mut config);
        assert_eq!(config.sweep.seeds, Some(vec![42, 1337]));
    }

    #[test]
    fn empty_pinned_seed_list_is_rejected() {
        // Pinned seeds take precedence over `trials`, so an empty list must
        // be rejected up front; otherwise every mean divides by zero.
        let mut config = SortbenchConfig::default();
        config.sweep.seeds = Some(vec![]);
        let error = run_benchmarks(&config).unwrap_err();
        assert!(error.to_string().contains("at least one trial"));
    }

    #[test]
    fn zero_trials_without_pinned_seeds_is_rejected() {
        let mut config = SortbenchConfig::default();
        config.sweep.trials = 0;
        assert!(run_benchmarks(&config).is_err());
    }

    #[test]
    fn defaults_leave_config_untouched() {
        let cli = Cli::parse_from(["sortbench"]);
        let mut config = SortbenchConfig::default();
        apply_overrides(&cli, &mut config);
        assert_eq!(config.sweep.sizes, SortbenchConfig::default().sweep.sizes);
        assert!(config.sweep.seeds.is_none());
        assert!(!config.output.json);
    }
}
