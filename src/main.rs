//! CLI entry point for the scan-path reconstruction tool

use clap::Parser;
use scanstitch::io::cli::{Cli, FileProcessor};
use tracing_subscriber::EnvFilter;

fn main() -> scanstitch::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
