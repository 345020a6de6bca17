//! Configuration loading from sortbench.toml
//!
//! Sortbench configuration can be specified in a `sortbench.toml` file in the
//! project root. The configuration is automatically discovered by walking up
//! from the current directory; CLI flags override file values.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Sortbench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SortbenchConfig {
    /// Sweep configuration (sizes, trial count, pinned seeds)
    #[serde(default)]
    pub sweep: SweepSection,
    /// Compile-strategy configuration
    #[serde(default)]
    pub build: BuildSection,
    /// Prebuilt-strategy configuration
    #[serde(default)]
    pub prebuilt: PrebuiltSection,
    /// Output configuration
    #[serde(default)]
    pub output: OutputSection,
    /// Chart dimensions
    #[serde(default)]
    pub visuals: VisualsSection,
}

/// Parameter sweep configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepSection {
    /// Array sizes, ascending
    #[serde(default = "default_sizes")]
    pub sizes: Vec<u64>,
    /// Number of random seeds per size
    #[serde(default = "default_trials")]
    pub trials: usize,
    /// Pinned seed set; when set, runs are reproducible and `trials` is
    /// ignored in favor of the list length
    #[serde(default)]
    pub seeds: Option<Vec<u64>>,
}

impl Default for SweepSection {
    fn default() -> Self {
        Self {
            sizes: default_sizes(),
            trials: default_trials(),
            seeds: None,
        }
    }
}

fn default_sizes() -> Vec<u64> {
    // Powers of ten, 10^3 through 10^7
    (3..8).map(|power| 10u64.pow(power)).collect()
}
fn default_trials() -> usize {
    5
}

/// Compile-strategy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildSection {
    /// Compiler front-ends to build with, one variant each
    #[serde(default = "default_compilers")]
    pub compilers: Vec<String>,
    /// Source files handed to every compiler
    #[serde(default = "default_sources")]
    pub sources: Vec<String>,
    /// Fixed flag set passed to every compiler
    #[serde(default = "default_flags")]
    pub flags: Vec<String>,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            compilers: default_compilers(),
            sources: default_sources(),
            flags: default_flags(),
        }
    }
}

fn default_compilers() -> Vec<String> {
    vec!["g++".to_string(), "clang++".to_string()]
}
fn default_sources() -> Vec<String> {
    vec!["main.cpp".to_string()]
}
fn default_flags() -> Vec<String> {
    ["-std=c++17", "-flto", "-O2", "-Wall", "-Werror", "-pedantic"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Prebuilt-strategy configuration (used on Windows, where no local
/// toolchain is assumed)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrebuiltSection {
    /// Path to the version-controlled prebuilt executable
    #[serde(default = "default_prebuilt_path")]
    pub path: String,
    /// Label for the prebuilt variant
    #[serde(default = "default_prebuilt_label")]
    pub label: String,
}

impl Default for PrebuiltSection {
    fn default() -> Self {
        Self {
            path: default_prebuilt_path(),
            label: default_prebuilt_label(),
        }
    }
}

fn default_prebuilt_path() -> String {
    ["prebuilt", "benchmark-msvc.exe"]
        .iter()
        .collect::<std::path::PathBuf>()
        .to_string_lossy()
        .into_owned()
}
fn default_prebuilt_label() -> String {
    "msvc".to_string()
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    /// Directory charts are written into, one `<label>.svg` per variant
    #[serde(default = "default_output_dir")]
    pub directory: String,
    /// Also write a `<label>.json` series dump per variant
    #[serde(default)]
    pub json: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            json: false,
        }
    }
}

fn default_output_dir() -> String {
    "assets".to_string()
}

/// Chart dimensions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualsSection {
    /// Chart width in pixels
    #[serde(default = "default_width")]
    pub width: u32,
    /// Chart height in pixels
    #[serde(default = "default_height")]
    pub height: u32,
}

impl Default for VisualsSection {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

fn default_width() -> u32 {
    1000
}
fn default_height() -> u32 {
    500
}

impl SortbenchConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from the current directory
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join("sortbench.toml");
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# Sortbench Configuration

[sweep]
# Array sizes, ascending (powers of ten span the log-scale chart axis)
sizes = [1000, 10000, 100000, 1000000, 10000000]
# Number of random seeds per size; the seed set is generated once per run
# and shared across all variants
trials = 5
# Pin the seed set for reproducible runs (uncomment to enable)
# seeds = [42, 1337, 7, 99, 2023]

[build]
# Compiler front-ends; each successful build becomes one chart variant
compilers = ["g++", "clang++"]
# Benchmark sources handed to every compiler
sources = ["main.cpp"]
# Fixed flag set; warnings escalate to errors, LTO on, C++17 pinned
flags = ["-std=c++17", "-flto", "-O2", "-Wall", "-Werror", "-pedantic"]

[prebuilt]
# Used on Windows instead of compiling from source
path = "prebuilt/benchmark-msvc.exe"
label = "msvc"

[output]
# Directory for chart artifacts
directory = "assets"
# Also write a JSON series dump per variant
json = false

[visuals]
# Chart dimensions
width = 1000
height = 500
"#
        .to_string()
    }
}
