use std::{io, process::ExitCode};

use tracing_subscriber::EnvFilter;

mod batch;
mod config;
mod error;
mod orders;
mod records;
mod report;

use config::Config;

fn main() -> ExitCode {
    init_logging();

    let config = Config::default();
    let result = batch::run(&config, &mut io::stdout().lock());
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "batch run failed");
            println!("{}", e.console_message());
            ExitCode::FAILURE
        }
    }
}

// Diagnostics go to stderr; stdout carries the summary.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "sales_orders=warn".into()),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
