//! Archlens - Heuristic architecture and code-quality auditor CLI

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use archlens::cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // RUST_LOG overrides the --log-level flag when set.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.clone()));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    cli::run(cli)
}
