use std::io::Read;

use fitmate_core::config::Settings;
use fitmate_core::{EvaluateFitRequest, FitEvaluator};
use thiserror::Error;
use tracing::{debug, error, info};

/// Errors surfaced by the CLI evaluator
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid request JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> Result<(), CliError> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting FitMate core evaluator...");

    // Load configuration
    let settings = Settings::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    let evaluator = FitEvaluator::new(settings.baseline.into());
    debug!(baseline = ?evaluator.baseline(), "evaluator initialized");

    // Read the evaluation request from the file argument, or stdin.
    let raw = match std::env::args().nth(1) {
        Some(path) => {
            info!("Reading evaluation request from {}", path);
            std::fs::read_to_string(path)?
        }
        None => {
            info!("Reading evaluation request from stdin");
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let request: EvaluateFitRequest = serde_json::from_str(&raw)?;
    let response = evaluator.respond(&request);

    info!(
        score = response.fit.fit_score,
        status = ?response.fit.fit_status,
        "evaluation complete"
    );

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
