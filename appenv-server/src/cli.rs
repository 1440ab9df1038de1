//! Command line arguments.

use appenv_core::RunMode;
use clap::{Parser, ValueEnum};

/// Load the service's startup configuration from the environment and report it
#[derive(Parser, Debug)]
#[command(name = "appenv")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Summary output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Refuse to start in production while development placeholder defaults are active
    #[arg(long, env = "APPENV_STRICT")]
    pub strict: bool,

    /// Parse PORT and apply it to the listen port (ignored otherwise)
    #[arg(long)]
    pub apply_port: bool,

    /// Run mode; overrides APP_ENV
    #[arg(short, long)]
    pub mode: Option<RunMode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
