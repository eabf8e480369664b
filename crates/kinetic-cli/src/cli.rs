//! Subcommand arguments and their handlers.
//!
//! Each clap argument struct converts into the matching core parameter type,
//! so the core never depends on clap:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use kinetic_core::{
    carousel::CarouselConfig,
    display::PlanOverview,
    params::{DeletePlan, GeneratePlan, Id, ListPlans},
    theme::Theme,
    Planner,
};

use crate::renderer::TerminalRenderer;

/// Generate a plan from the builder form fields
#[derive(Args)]
pub struct GeneratePlanArgs {
    /// Sport to train for, e.g. "Soccer"
    pub sport: String,
    /// Experience level: Beginner, Intermediate or Advanced
    #[arg(short, long, default_value = "Intermediate")]
    pub level: String,
    /// Plan length in weeks; anything that is not a positive number means 6
    #[arg(short, long)]
    pub weeks: Option<String>,
    /// Training focus, e.g. "Endurance" (defaults to "Skill")
    #[arg(short, long)]
    pub focus: Option<String>,
    /// Free-form notes stored with the plan
    #[arg(short, long)]
    pub notes: Option<String>,
    /// Save the generated plan
    #[arg(long)]
    pub save: bool,
}

impl From<&GeneratePlanArgs> for GeneratePlan {
    fn from(val: &GeneratePlanArgs) -> Self {
        GeneratePlan::from_form(
            &val.sport,
            &val.level,
            val.weeks.as_deref().unwrap_or_default(),
            val.focus.as_deref().unwrap_or_default(),
            val.notes.as_deref().unwrap_or_default(),
        )
    }
}

/// Prefill the builder from a catalogue template
#[derive(Args)]
pub struct TemplatePlanArgs {
    /// Template name, e.g. "Soccer — Endurance Builder"
    pub name: String,
    /// Plan length in weeks (defaults to 8)
    #[arg(short, long)]
    pub weeks: Option<u32>,
    /// Save the generated plan
    #[arg(long)]
    pub save: bool,
}

impl From<&TemplatePlanArgs> for GeneratePlan {
    fn from(val: &TemplatePlanArgs) -> Self {
        GeneratePlan::from_template(&val.name, val.weeks)
    }
}

/// List saved plans, newest first
#[derive(Args)]
pub struct ListPlansArgs {
    /// Show at most this many plans
    #[arg(long, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub limit: Option<usize>,
    /// Show the first weeks and notes of each plan
    #[arg(long)]
    pub detailed: bool,
}

impl From<&ListPlansArgs> for ListPlans {
    fn from(val: &ListPlansArgs) -> Self {
        ListPlans { limit: val.limit }
    }
}

/// Show every week of a saved plan
#[derive(Args)]
pub struct ShowPlanArgs {
    /// ID of the plan to display
    pub id: String,
}

impl From<ShowPlanArgs> for Id {
    fn from(val: ShowPlanArgs) -> Self {
        Id { id: val.id }
    }
}

/// Regenerate a saved plan from its inputs
#[derive(Args)]
pub struct ContinuePlanArgs {
    /// ID of the plan to continue
    pub id: String,
    /// Save the regenerated plan
    #[arg(long)]
    pub save: bool,
}

/// Delete a saved plan permanently
#[derive(Args)]
pub struct DeletePlanArgs {
    /// ID of the plan to delete
    pub id: String,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeletePlanArgs> for DeletePlan {
    fn from(val: DeletePlanArgs) -> Self {
        DeletePlan {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Generate a plan and preview its first week
    #[command(aliases = ["g", "new"])]
    Generate(GeneratePlanArgs),
    /// Generate a plan from a template name
    #[command(alias = "tpl")]
    Template(TemplatePlanArgs),
    /// List saved plans
    #[command(aliases = ["l", "ls"])]
    List(ListPlansArgs),
    /// Show a saved plan in full
    #[command(alias = "s")]
    Show(ShowPlanArgs),
    /// Regenerate a saved plan from its inputs
    Continue(ContinuePlanArgs),
    /// Delete a saved plan
    #[command(aliases = ["d", "rm"])]
    Delete(DeletePlanArgs),
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(val: ThemeArg) -> Self {
        match val {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

#[derive(Subcommand)]
pub enum ThemeCommands {
    /// Print the stored theme
    Show,
    /// Switch between light and dark
    Toggle,
    /// Store a specific theme
    Set {
        #[arg(value_enum)]
        theme: ThemeArg,
    },
}

/// Carousel timing and deck size
#[derive(Args)]
pub struct CarouselArgs {
    /// Number of slides in the deck
    #[arg(long, default_value_t = 3)]
    pub slides: usize,
    /// Delay between automatic advances, in milliseconds
    #[arg(long, default_value_t = 5000)]
    pub interval_ms: u64,
    /// Transition lock length, in milliseconds
    #[arg(long, default_value_t = 800)]
    pub transition_ms: u64,
    /// Horizontal travel a swipe must exceed
    #[arg(long, default_value_t = 50.0)]
    pub swipe_threshold: f64,
    /// Stop after this many milliseconds, even after stdin closes
    #[arg(long)]
    pub run_for_ms: Option<u64>,
}

impl From<&CarouselArgs> for CarouselConfig {
    fn from(val: &CarouselArgs) -> Self {
        CarouselConfig::default()
            .with_auto_advance_interval(Duration::from_millis(val.interval_ms))
            .with_transition_duration(Duration::from_millis(val.transition_ms))
            .with_swipe_threshold(val.swipe_threshold)
    }
}

/// Runs plan and theme subcommands against a planner.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Generate(args) => {
                self.generate(&GeneratePlan::from(&args), args.save).await
            }
            PlanCommands::Template(args) => {
                self.generate(&GeneratePlan::from(&args), args.save).await
            }
            PlanCommands::List(args) => {
                if args.detailed {
                    self.list_overviews(args.limit).await
                } else {
                    self.list_plans(&ListPlans::from(&args)).await
                }
            }
            PlanCommands::Show(args) => {
                let plan = self
                    .planner
                    .show_plan(&args.into())
                    .await
                    .context("Failed to show plan")?;
                self.renderer.render(&plan.to_string())
            }
            PlanCommands::Continue(args) => {
                let result = self
                    .planner
                    .continue_plan(&Id { id: args.id }, args.save)
                    .await
                    .context("Failed to continue plan")?;
                self.renderer.render(&result.to_string())
            }
            PlanCommands::Delete(args) => {
                let result = self
                    .planner
                    .delete_plan(&args.into())
                    .await
                    .context("Failed to delete plan")?;
                self.renderer.render(&result.to_string())
            }
        }
    }

    pub async fn handle_theme_command(&self, command: ThemeCommands) -> Result<()> {
        let result = match command {
            ThemeCommands::Show => self.planner.theme_result().await,
            ThemeCommands::Toggle => self.planner.toggle_theme_result().await,
            ThemeCommands::Set { theme } => self.planner.set_theme_result(theme.into()).await,
        }
        .context("Failed to update theme")?;

        self.renderer.render(&result.to_string())
    }

    pub async fn list_plans(&self, params: &ListPlans) -> Result<()> {
        let summaries = self
            .planner
            .list_plans_summary(params)
            .await
            .context("Failed to list plans")?;

        self.renderer
            .render(&format!("# Saved plans\n\n{summaries}"))
    }

    async fn list_overviews(&self, limit: Option<usize>) -> Result<()> {
        let plans = self
            .planner
            .list_plans()
            .await
            .context("Failed to list plans")?;

        if plans.is_empty() {
            return self.list_plans(&ListPlans { limit }).await;
        }

        let mut output = String::from("# Saved plans\n\n");
        for plan in plans.iter().take(limit.unwrap_or(usize::MAX)) {
            output.push_str(&PlanOverview(plan).to_string());
            output.push('\n');
        }

        self.renderer.render(&output)
    }

    async fn generate(&self, params: &GeneratePlan, save: bool) -> Result<()> {
        let result = self
            .planner
            .generate_plan_result(params, save)
            .await
            .context("Failed to generate plan")?;

        self.renderer.render(&result.to_string())
    }
}
