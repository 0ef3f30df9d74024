use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

mod config;
mod scenario;

use config::load_config;

#[derive(Parser, Debug)]
#[command(name = "aquatics-simulator")]
#[command(about = "Headless scenario driver for the aquatics engine", long_about = None)]
struct Args {
    /// Path to a TOML config; built-in defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the configured scenario (boat-drop, paddle-strokes, swimmer)
    #[arg(long)]
    scenario: Option<String>,
    /// Override the number of fixed steps to simulate
    #[arg(long)]
    steps: Option<u32>,
    /// Override the fixed physics step in seconds
    #[arg(long)]
    dt: Option<f32>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut cfg = load_config(args.config.as_deref())?;
    if let Some(scenario) = args.scenario {
        cfg.scenario = scenario;
    }
    if let Some(steps) = args.steps {
        cfg.steps = steps;
    }
    if let Some(dt) = args.dt {
        cfg.dt = dt;
    }
    cfg.validate()?;
    info!(?cfg, "Simulator config loaded");

    let summary = scenario::run(&cfg)?;
    info!(?summary, "Scenario complete");
    Ok(())
}
