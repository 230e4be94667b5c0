//! # medina-quote
//!
//! ## Usage
//! ```bash
//! # Quote an order from a file
//! cargo run -p medina-quote -- order.json
//!
//! # Or from stdin
//! cat order.json | cargo run -p medina-quote
//!
//! # Shipping and loyalty parameters come from the environment
//! MEDINA_SHIPPING_FEE=7 MEDINA_POINTS_RATE=0.02 cargo run -p medina-quote -- order.json
//! ```
//!
//! Logs go to stderr (`RUST_LOG` overrides the default filter) so stdout
//! carries only the JSON response.

use std::io::Read;
use std::process::ExitCode;

use medina_core::{LoyaltyProgram, PricingConfig};
use medina_quote::error::ApiError;
use medina_quote::{quote_json, QuoteResponse};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(response) => match serde_json::to_string_pretty(&response) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("Failed to serialize response: {}", e);
                ExitCode::FAILURE
            }
        },
        Err(err) => {
            error!(code = ?err.code, "{}", err.message);
            match serde_json::to_string(&err) {
                Ok(json) => println!("{}", json),
                Err(_) => println!("{}", err),
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<QuoteResponse, ApiError> {
    let pricing_config = PricingConfig::from_env()?;
    let loyalty = LoyaltyProgram::from_env()?;
    info!(
        threshold = %pricing_config.free_shipping_threshold,
        fee = %pricing_config.standard_shipping_fee,
        floor_total = pricing_config.floor_total_at_zero,
        loyalty_active = loyalty.active,
        "Configuration loaded"
    );

    let body = read_request()?;
    quote_json(&body, &pricing_config, &loyalty)
}

/// Reads the request from the first argument, or stdin when absent.
fn read_request() -> Result<String, ApiError> {
    match std::env::args().nth(1) {
        Some(path) => {
            info!(%path, "Reading order request");
            Ok(std::fs::read_to_string(path)?)
        }
        None => {
            let mut body = String::new();
            std::io::stdin().read_to_string(&mut body)?;
            Ok(body)
        }
    }
}

/// Initializes the tracing subscriber.
///
/// Default: INFO, debug for medina crates, overridable with RUST_LOG.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,medina_core=debug,medina_quote=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
