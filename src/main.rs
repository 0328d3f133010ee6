use std::io::{self, BufReader};

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kalah_core::GameConfig;
use kalah_shell::Shell;

fn main() -> Result<()> {
    // stdout carries the board; logs go to stderr, quiet unless RUST_LOG says otherwise
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
    info!("kalah starting");

    let shell = Shell::new(GameConfig::default(), io::stdout())?;
    shell.run(BufReader::new(io::stdin()))?;
    Ok(())
}
