//! Prosperitas CLI Application
//!
//! Command-line front-end for the Prosperitas learning tracker.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use prosperitas_core::{
    content::{ContentProvider, GeminiConfig, GeminiProvider, StaticProvider},
    ProgressStoreBuilder,
};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        offline,
        command,
    } = Args::parse();

    let store = ProgressStoreBuilder::new()
        .with_database_path(database_file)
        .build()
        .context("Failed to initialize progress store")?;

    let content: Box<dyn ContentProvider> = if offline {
        Box::new(StaticProvider::new())
    } else {
        let provider = GeminiProvider::new(GeminiConfig::from_env())
            .context("Failed to initialize content provider")?;
        if !provider.is_configured() {
            info!("No API key set; generated content falls back to built-in texts");
        }
        Box::new(provider)
    };

    let renderer = TerminalRenderer::new(!no_color);

    info!("Prosperitas started");

    let mut cli = Cli::new(store, content, renderer);
    match command {
        Some(Dashboard) | None => cli.dashboard().await,
        Some(Library(args)) => cli.library(&args.into()),
        Some(Lesson { command }) => cli.handle_lesson_command(command).await,
        Some(Favorites) => cli.favorites(),
        Some(Simulate(args)) => cli.simulate(args.into()),
        Some(Quote) => cli.quote().await,
        Some(Reset(args)) => cli.reset(&args.into()),
    }
}
