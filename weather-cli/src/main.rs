//! Binary crate for the `weather` command-line tool.
//!
//! This crate focuses on:
//! - Loading `.env` and setting up logging
//! - Parsing CLI arguments
//! - Human-friendly output formatting
//! - Turning a [`weather_core::WeatherError`] into a message and exit status

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod output;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine; the key may come from the real environment.
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cmd = cli::Cli::parse();
    match cmd.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("[ERROR] {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
