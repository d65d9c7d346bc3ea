// src/bin/backend_check.rs

//! Runs the special-function validation harness against the built-in
//! series backend and prints the per-function error report.
//! `backend_check --json` emits the report as JSON instead.

use std::process::ExitCode;

use orbview::validation::{run_validation, BackendStatus, FunctionReport, SeriesBackend};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let json = std::env::args().any(|a| a == "--json");

    let backend = SeriesBackend;
    let report = run_validation(Some(&backend));

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("failed to serialize report: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!(
            "backend: {}",
            report.backend.as_deref().unwrap_or("unavailable")
        );
        print_function("factorial", &report.factorial);
        print_function("laguerre", &report.laguerre);
        print_function("legendre", &report.legendre);
        print_function("harmonics", &report.harmonics);
    }

    if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_function(name: &str, r: &FunctionReport) {
    let status = match r.status {
        BackendStatus::Passed => "passed",
        BackendStatus::Failed => "FAILED",
        BackendStatus::Unavailable => "unavailable",
    };
    println!(
        "{name:<10} {status:<12} samples={:<5} max_rel={:.3e} max_abs={:.3e} threshold={:.0e}",
        r.samples, r.max_relative_error, r.max_absolute_error, r.threshold
    );
}
