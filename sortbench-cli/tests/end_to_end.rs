//! End-to-end tests driving a fake benchmark executable.
//!
//! A generated shell script stands in for the compiled C++ benchmark: it
//! honors the SIZE/SEED environment contract and prints metric lines in the
//! `[<tag>] <text> <ms>` wire format.

#![cfg(unix)]

use sortbench_core::{Algorithm, Measure, RunError};
use sortbench_cli::{Benchmark, Compiler, SweepConfig, TrialRunner, compile_variants, run_sweep};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[test]
fn run_parses_metric_lines_from_a_real_subprocess() {
    let dir = TempDir::new().unwrap();
    let exe = write_script(
        dir.path(),
        "bench",
        "echo '[cppsort] elapsed 12'\n\
         echo 'note: diagnostics are ignored' >&2\n\
         echo '[qsort] elapsed 45'\n\
         echo '[qqsort] elapsed 9'\n",
    );

    let bench = Benchmark::new(exe, "fake");
    let measure = bench.run(1_000, 42).unwrap();
    assert_eq!(measure, Measure::new(12.0, 45.0, 9.0));
}

#[test]
fn size_and_seed_reach_the_subprocess_environment() {
    let dir = TempDir::new().unwrap();
    let exe = write_script(
        dir.path(),
        "bench",
        "echo \"[cppsort] size ${SIZE}\"\n\
         echo \"[qsort] seed ${SEED}\"\n\
         echo '[qqsort] elapsed 1'\n",
    );

    let bench = Benchmark::new(exe, "fake");
    let measure = bench.run(777, 4242).unwrap();
    assert_eq!(measure.cppsort, 777.0);
    assert_eq!(measure.qsort, 4242.0);
}

#[test]
fn nonzero_exit_fails_with_captured_output() {
    let dir = TempDir::new().unwrap();
    let exe = write_script(
        dir.path(),
        "bench",
        "echo '[cppsort] elapsed 12'\n\
         echo 'fatal: out of memory' >&2\n\
         exit 3\n",
    );

    let bench = Benchmark::new(exe, "fake");
    match bench.run(1_000, 42) {
        Err(RunError::ExitFailure { output, .. }) => {
            assert!(output.contains("fatal: out of memory"));
            // No parsing of partial output is attempted.
            assert!(output.contains("[cppsort] elapsed 12"));
        }
        other => panic!("expected ExitFailure, got {other:?}"),
    }
}

#[test]
fn missing_metric_line_fails_naming_the_metric() {
    let dir = TempDir::new().unwrap();
    let exe = write_script(
        dir.path(),
        "bench",
        "echo '[cppsort] elapsed 12'\n\
         echo '[qqsort] elapsed 9'\n",
    );

    let bench = Benchmark::new(exe, "fake");
    assert!(matches!(
        bench.run(1_000, 42),
        Err(RunError::MissingMetric(Algorithm::Qsort))
    ));
}

#[test]
fn full_sweep_aggregates_across_sizes_and_seeds() {
    let dir = TempDir::new().unwrap();
    // Deterministic timings derived from the trial configuration: the mean
    // over seeds {2, 4} at size S is (S + 3, 2S + 3, 3).
    let exe = write_script(
        dir.path(),
        "bench",
        "echo \"[cppsort] elapsed $((SIZE + SEED))\"\n\
         echo \"[qsort] elapsed $((SIZE * 2 + SEED))\"\n\
         echo \"[qqsort] elapsed ${SEED}\"\n",
    );

    let bench = Benchmark::new(exe, "fake");
    let sweep = SweepConfig {
        sizes: vec![100, 1_000],
        seeds: vec![2, 4],
    };

    let table = run_sweep(&bench, &sweep);
    assert_eq!(table.sizes(), &[100, 1_000]);
    assert_eq!(table.series(Algorithm::CppSort), &[103.0, 1_003.0]);
    assert_eq!(table.series(Algorithm::Qsort), &[203.0, 2_003.0]);
    assert_eq!(table.series(Algorithm::Qqsort), &[3.0, 3.0]);
}

#[test]
fn failing_compiler_is_dropped_and_the_rest_proceed() {
    let dir = TempDir::new().unwrap();

    // A fake front-end that accepts the `<sources> <flags> -o <out>`
    // contract and emits a working benchmark script at the output path.
    let good = write_script(
        dir.path(),
        "goodcc",
        r#"while [ "$1" != "-o" ]; do shift; done
out="$2"
printf '%s\n' '#!/bin/sh' \
  "echo '[cppsort] elapsed 1'" \
  "echo '[qsort] elapsed 2'" \
  "echo '[qqsort] elapsed 3'" > "$out"
chmod +x "$out"
"#,
    );
    let bad = write_script(dir.path(), "badcc", "echo 'error: no such flag' >&2\nexit 1\n");

    let out = dir.path().join("benchmark-good");
    let compilers = vec![
        Compiler::new(
            bad.to_string_lossy().into_owned(),
            vec![PathBuf::from("main.cpp")],
            vec![],
            dir.path().join("benchmark-bad"),
        ),
        Compiler::new(
            good.to_string_lossy().into_owned(),
            vec![PathBuf::from("main.cpp")],
            vec![],
            &out,
        ),
    ];

    let variants = compile_variants(&compilers);
    assert_eq!(variants.len(), 1);
    assert!(out.exists());

    let measure = variants[0].run(10, 1).unwrap();
    assert_eq!(measure, Measure::new(1.0, 2.0, 3.0));
}
