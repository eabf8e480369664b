//! Kinetic CLI Application
//!
//! Terminal front end for the Kinetic training site: plan generation and
//! storage, the theme preference, and the hero carousel.

mod args;
mod carousel;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use kinetic_core::{params::ListPlans, PlannerBuilder};
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        data_dir,
        no_color,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_data_dir(data_dir)
        .build()
        .await
        .context("Failed to initialize planner")?;

    if planner
        .seed_demo_plans()
        .await
        .context("Failed to seed demo plans")?
    {
        info!("Seeded demo plans in {}", planner.data_dir().display());
    }

    let theme = planner.theme().await.context("Failed to read theme")?;
    let renderer = TerminalRenderer::new(!no_color, theme);

    match command {
        Some(Plan { command }) => {
            Cli::new(planner, renderer)
                .handle_plan_command(command)
                .await
        }
        Some(Theme { command }) => {
            Cli::new(planner, renderer)
                .handle_theme_command(command)
                .await
        }
        Some(Carousel(args)) => carousel::run(&args, renderer).await,
        None => {
            Cli::new(planner, renderer)
                .list_plans(&ListPlans::default())
                .await
        }
    }
}
