#![forbid(unsafe_code)]

mod assets;
mod cli;
mod config;
mod constants;
mod countdown;
mod fonts;
mod gui;
mod readout;
mod spells;
mod tracker;
mod types;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level as TraceLevel};
use tracing_subscriber::FmtSubscriber;

use cli::Cli;
use config::AppConfig;

fn parse_log_level(value: &str) -> TraceLevel {
    match value.to_lowercase().as_str() {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // --log-level wins over LOG_LEVEL
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| std::env::var("LOG_LEVEL").ok())
        .unwrap_or_else(|| "info".to_string());

    let subscriber = FmtSubscriber::builder()
        .with_max_level(parse_log_level(&log_level))
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config_path = cli.config.clone().unwrap_or_else(AppConfig::path);
    let mut config = AppConfig::load_from(&config_path)?;
    config.apply_cli(&cli);
    info!("config={:#?}", config);

    gui::run_gui(config)
}
