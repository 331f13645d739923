//! Loop swap server command-line client.

mod cli;
mod config;
mod logging;

use clap::Parser;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init_logging(&cli.logs)?;

    cli.run().await
}
