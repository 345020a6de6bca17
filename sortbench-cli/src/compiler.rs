//! Executable provider: compile strategy and prebuilt strategy.
//!
//! On Windows the workflow assumes no local C++ toolchain and points at a
//! fixed, version-controlled prebuilt executable. Everywhere else each
//! configured compiler front-end builds the benchmark from source with a
//! fixed flag set; every program invocation recompiles, nothing is cached.

use crate::config::SortbenchConfig;
use crate::format::indent_diagnostic;
use crate::runner::Benchmark;
use sortbench_core::CompileError;
use std::path::PathBuf;
use std::process::Command;

/// One compiler front-end invocation producing one benchmark variant.
#[derive(Debug, Clone)]
pub struct Compiler {
    cxx: String,
    sources: Vec<PathBuf>,
    flags: Vec<String>,
    out: PathBuf,
}

impl Compiler {
    /// Describe a compile of `sources` with `flags` into `out`.
    pub fn new(
        cxx: impl Into<String>,
        sources: Vec<PathBuf>,
        flags: Vec<String>,
        out: impl Into<PathBuf>,
    ) -> Self {
        Self {
            cxx: cxx.into(),
            sources,
            flags,
            out: out.into(),
        }
    }

    /// Identifying name of the front-end, used as the variant label.
    pub fn name(&self) -> &str {
        &self.cxx
    }

    /// Invoke the compiler. On success the produced executable becomes a
    /// labeled [`Benchmark`] handle; on non-zero exit the combined output is
    /// wrapped as a [`CompileError`].
    pub fn compile(&self) -> Result<Benchmark, CompileError> {
        let output = Command::new(&self.cxx)
            .args(&self.sources)
            .args(&self.flags)
            .arg("-o")
            .arg(&self.out)
            .output()
            .map_err(|e| CompileError {
                compiler: self.cxx.clone(),
                output: e.to_string(),
            })?;

        if !output.status.success() {
            let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
            text.push_str(&String::from_utf8_lossy(&output.stderr));
            return Err(CompileError {
                compiler: self.cxx.clone(),
                output: text,
            });
        }

        Ok(Benchmark::new(&self.out, &self.cxx))
    }
}

/// Platform predicate selecting the provider strategy.
pub fn is_windows() -> bool {
    cfg!(target_os = "windows")
}

/// Build the compiler list from configuration, one per front-end, each with
/// its own `./benchmark-<cxx>` output path.
pub fn compilers_from_config(config: &SortbenchConfig) -> Vec<Compiler> {
    let sources: Vec<PathBuf> = config.build.sources.iter().map(PathBuf::from).collect();
    config
        .build
        .compilers
        .iter()
        .map(|cxx| {
            Compiler::new(
                cxx,
                sources.clone(),
                config.build.flags.clone(),
                format!("./benchmark-{cxx}"),
            )
        })
        .collect()
}

/// Compile every configured variant, dropping the ones that fail.
///
/// A compile failure is surfaced to the operator with the compiler named and
/// the captured output prefixed per line; the remaining compilers proceed.
pub fn compile_variants(compilers: &[Compiler]) -> Vec<Benchmark> {
    let mut variants = Vec::with_capacity(compilers.len());
    for compiler in compilers {
        tracing::info!("compiling benchmark with '{}'", compiler.name());
        match compiler.compile() {
            Ok(benchmark) => variants.push(benchmark),
            Err(error) => {
                tracing::error!("could not compile source code using '{}'", error.compiler);
                tracing::error!("{}", indent_diagnostic(&error.output));
            }
        }
    }
    variants
}

/// Resolve the benchmark variants for this run.
///
/// Windows: a single prebuilt handle. Elsewhere: one handle per compiler
/// that built successfully.
pub fn resolve_variants(config: &SortbenchConfig) -> Vec<Benchmark> {
    if is_windows() {
        vec![Benchmark::new(
            &config.prebuilt.path,
            &config.prebuilt.label,
        )]
    } else {
        compile_variants(&compilers_from_config(config))
    }
}
