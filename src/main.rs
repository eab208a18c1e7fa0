mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let listener = TcpListener::bind(cli.bind)
        .await
        .with_context(|| format!("failed to bind {}", cli.bind))?;

    months::server::serve(listener)
        .await
        .context("server stopped unexpectedly")
}
