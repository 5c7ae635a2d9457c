//! CLI entry point for corpus statistics and word cloud generation

use clap::Parser;
use textcloud::io::cli::{Analyzer, Cli};
use textcloud::io::configuration::DEFAULT_LOG_FILTER;
use tracing_subscriber::EnvFilter;

fn main() -> textcloud::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    Analyzer::new(cli).run()
}
