//! appenv
//!
//! Startup entry point: loads the process configuration from the environment,
//! audits fallback defaults for the selected run mode and prints a redacted
//! summary.

mod cli;

use appenv_core::{ConfigLoader, ConfigSummary, Configuration, ProcessEnv, RunMode, audit};
use clap::Parser;
use cli::{Args, OutputFormat};
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();

    tracing::info!("Starting appenv v{}", env!("CARGO_PKG_VERSION"));

    let mode = match args.mode {
        Some(mode) => mode,
        None => RunMode::from_source(&ProcessEnv).map_err(|e| {
            tracing::error!("Failed to determine run mode: {}", e);
            e
        })?,
    };

    let resolved = ConfigLoader::new(ProcessEnv)
        .apply_port_override(args.apply_port)
        .resolve();

    audit(&resolved, mode, args.strict).map_err(|e| {
        tracing::error!("Configuration rejected: {}", e);
        e
    })?;

    let summary = ConfigSummary::new(&resolved, mode);
    let config: Arc<Configuration> = Arc::new(resolved.into_config());

    tracing::info!(
        %mode,
        port = config.port(),
        public_server_url = config.public_server_url(),
        "Configuration loaded"
    );

    match args.format {
        OutputFormat::Text => print!("{summary}"),
        OutputFormat::Json => println!("{}", summary.to_json()?),
    }

    Ok(())
}

/// Initialize the tracing subscriber with environment-based filtering.
///
/// Logs go to stderr so stdout carries only the summary.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
