//! Prism test runner.
//!
//! Runs a TOML manifest of visual regression tests against the headless
//! reference engine and exits nonzero if any case fails. This is the step
//! that turns logged `PRISM_ERROR` lines and comparison failures into a
//! build failure.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p prism-testrunner -- <manifest.toml>
//! ```
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Set log level (e.g., info, debug, trace)

mod manifest;

use std::process::ExitCode;

use anyhow::{bail, Context};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use prism_engine::stub::StubLoader;
use prism_engine::{EngineInstance, OptionsHandle};
use prism_harness::{run_basic_test, run_render_test, RenderArgs, TestReport, TestSettings};

use crate::manifest::{Manifest, TestKind, TestSpec};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_help();
        return ExitCode::SUCCESS;
    }
    let [manifest_path] = args.as_slice() else {
        eprintln!("expected exactly one manifest path, see --help");
        return ExitCode::FAILURE;
    };

    match run_manifest(manifest_path) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Run every case in the manifest. Returns whether all of them passed.
fn run_manifest(path: &str) -> anyhow::Result<bool> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read manifest {path}"))?;
    let manifest = Manifest::parse(&text)
        .with_context(|| format!("failed to parse manifest {path}"))?;

    if manifest.tests.is_empty() {
        bail!("manifest {path} contains no test cases");
    }

    let mut passed = 0usize;
    for spec in &manifest.tests {
        let report = run_case(&manifest, spec);
        info!("{}: {report}", spec.name);
        if report.passed() {
            passed += 1;
        }
    }

    let total = manifest.tests.len();
    info!("{passed}/{total} test cases passed");
    Ok(passed == total)
}

fn run_case(manifest: &Manifest, spec: &TestSpec) -> TestReport {
    let loader = StubLoader::new();
    let surface = manifest.surface();

    match spec.kind {
        TestKind::Basic => run_basic_test(&loader, TestSettings::new(surface)),
        TestKind::Render => {
            let (Some(data), Some(baseline)) = (&spec.data, &spec.baseline) else {
                return missing_input(spec);
            };

            let mut settings = TestSettings::new(surface);
            if !spec.options.is_empty() {
                let options = spec.options.clone();
                settings = settings.with_run_before(move |ctx| {
                    for (key, value) in &options {
                        ctx.engine.options().set(key, value);
                    }
                    Ok(())
                });
            }

            let mut config = manifest.harness_config();
            if let Some(threshold) = spec.threshold {
                config = config.with_threshold(threshold);
            }

            run_render_test(
                &loader,
                settings,
                &RenderArgs::new(data.clone(), baseline.clone()),
                &config,
            )
        }
    }
}

fn missing_input(spec: &TestSpec) -> TestReport {
    let message = format!(
        "render test {:?} needs both a data file and a baseline image",
        spec.name
    );
    error!("{message}");
    TestReport {
        outcome: prism_harness::TestOutcome::Error(message),
    }
}

fn print_help() {
    eprintln!(
        "Prism visual regression test runner

USAGE:
    prism-testrunner <manifest.toml>

OPTIONS:
    -h, --help    Print this help message

The manifest describes the render surface, the asset roots and the test
cases; see the repository documentation for the schema. The process exits
nonzero when any case fails, errors, or the manifest is empty."
    );
}
