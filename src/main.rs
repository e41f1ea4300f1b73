use std::process::ExitCode;

use pokerhands::{scan_file, ReportFormat, ScanConfig};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokerhands=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match ScanConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    // A path on the command line wins over POKER_HANDS_FILE
    let config = match std::env::args().nth(1) {
        Some(path) => config.with_input_path(path),
        None => config,
    };

    info!(
        path = %config.input_path.display(),
        on_error = ?config.on_error,
        "Scoring hand records"
    );

    let tally = match scan_file(&config.input_path, config.on_error) {
        Ok(tally) => tally,
        Err(e) => {
            error!(error = %e, "Scan failed");
            return ExitCode::FAILURE;
        }
    };

    match config.report_format {
        ReportFormat::Text => println!("{tally}"),
        ReportFormat::Json => match serde_json::to_string_pretty(&tally) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                error!(error = %e, "Failed to serialize report");
                return ExitCode::FAILURE;
            }
        },
    }

    ExitCode::SUCCESS
}
