//! Navigation simulator.
//!
//! Replays a scripted sequence of clicks, back/forward presses and redirects
//! against an in-memory host and prints what the navigator did.
//!
//! ```text
//!   config.toml ──▶ loader ──▶ validation ──▶ Simulation
//!                                               │
//!                     ┌─────────────────────────┤
//!                     ▼                         ▼
//!               MemoryHost ◀──── events ──── Navigator ──▶ views ──▶ MemoryTarget
//!                     │                                               │
//!                     └──────────────── SimulationReport ◀────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use spa_navigator::config::{load_config, NavigatorConfig};
use spa_navigator::observability::logging::init_logging;
use spa_navigator::simulation::Simulation;

#[derive(Parser)]
#[command(name = "spa-navigator")]
#[command(about = "Replay navigation scripts against the client-side router", long_about = None)]
struct Cli {
    /// TOML configuration; the built-in dog app routes are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,

    /// Override the configured log level.
    #[arg(short, long)]
    log_level: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => NavigatorConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.observability.log_level = level;
    }

    init_logging(&config.observability)?;

    tracing::info!(
        origin = %config.host.origin,
        initial_path = %config.host.initial_path,
        routes = config.routes.len(),
        steps = config.script.len(),
        "Configuration loaded"
    );

    let report = Simulation::new(config).run()?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }

    tracing::info!(navigations = report.navigations.len(), "Simulation complete");
    Ok(())
}
