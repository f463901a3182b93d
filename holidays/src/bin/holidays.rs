//! Compute the holidays of one year and write them to disk.
//!
//! Configuration comes from `holidays.toml` and `HOLIDAYS_*` variables (see
//! [`holidays::ExportSettings`]); log verbosity from `RUST_LOG`.

use std::process::ExitCode;

use holidays::{export, ExportSettings, Orchestrator};
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = ExportSettings::load().unwrap_or_else(|e| {
        warn!(error = %e, "could not load configuration, using defaults");
        ExportSettings::default()
    });

    let record = match Orchestrator::new(settings.settings()).run() {
        Ok(record) => record,
        Err(e) => {
            error!(error = %e, "holiday computation failed");
            return ExitCode::FAILURE;
        }
    };

    let dir = match settings.resolve_output_dir() {
        Ok(dir) => dir,
        Err(e) => {
            error!(error = %e, "no usable output directory");
            return ExitCode::FAILURE;
        }
    };

    let report = export(&record, &dir, &settings.formats);
    if report.written.is_empty() && !settings.formats.is_empty() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
