//! Command-line interface for folder-scan

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod scan;

pub use scan::ScanArgs;

/// Recursively scan a folder and report file counts, sizes and types
#[derive(Parser)]
#[command(name = "folder-scan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    scan: ScanArgs,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    scan::run(cli.scan)
}
