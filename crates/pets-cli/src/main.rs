//! Pets CLI Application
//!
//! Command-line front end for the pet records store.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, ListArgs};
use clap::Parser;
use cli::Cli;
use log::{info, warn};
use pets_core::PetServiceBuilder;
use renderer::{OutputFormat, TerminalRenderer};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        json,
        command,
    } = Args::parse();

    let service = PetServiceBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to open pet store")?;

    let renderer = TerminalRenderer::new(OutputFormat::from_flags(no_color, json));

    info!("Pets started on {}", service.database_path().display());

    let cli = Cli::new(service, renderer);
    let outcome = match command {
        Some(command) => cli.handle_command(command).await,
        None => cli.list_pets(&ListArgs::default()).await,
    };
    let closed = cli.shutdown().await;
    command_result(outcome, closed)
}

/// A failed command's error wins over a failed shutdown, which is only logged.
fn command_result(outcome: Result<()>, closed: Result<()>) -> Result<()> {
    match (outcome, closed) {
        (Err(e), Err(close_err)) => {
            warn!("{close_err:#}");
            Err(e)
        }
        (outcome, closed) => outcome.and(closed),
    }
}
