mod cli;

use std::process::ExitCode;

use anyhow::Result;
use tracing_subscriber::{registry::Registry, prelude::*, EnvFilter};
use tracing_tree::HierarchicalLayer;

use crate::cli::CLI;

fn main() -> Result<ExitCode> {
    let cli = CLI::init()?;
    let verbosity = cli.get_verbosity_level()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.log_directive()));
    let subscriber = Registry::default()
        .with(filter)
        .with(HierarchicalLayer::new(2));
    tracing::subscriber::set_global_default(subscriber)?;

    cli.run()
}
