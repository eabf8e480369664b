use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CarouselArgs, PlanCommands, ThemeCommands};

/// Command-line front end for Kinetic
///
/// Generates and keeps week-by-week training plans, switches the light/dark
/// theme preference, and runs the hero carousel against the terminal.
/// Without a subcommand, lists the saved plans.
#[derive(Parser)]
#[command(version, about, name = "kinetic")]
pub struct Args {
    /// Directory holding saved plans and preferences. Defaults to
    /// $XDG_DATA_HOME/kinetic
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate and manage training plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Show or change the colour theme
    #[command(alias = "t")]
    Theme {
        #[command(subcommand)]
        command: ThemeCommands,
    },
    /// Run the hero carousel, reading commands from stdin
    #[command(alias = "c")]
    Carousel(CarouselArgs),
}
