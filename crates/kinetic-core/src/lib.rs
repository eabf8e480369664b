//! Core library for the Kinetic training site.
//!
//! Two independent pieces live here:
//!
//! - the hero [`carousel`]: a deterministic slide controller with a
//!   transition lock, an auto-advance timer and swipe recognition, plus a
//!   tokio [`carousel::driver`] that feeds it events and deadlines;
//! - the plan side: a [`generator`] turning form inputs into a week-by-week
//!   schedule, a [`store`] persisting plans in key-value [`storage`], the
//!   [`theme`] preference, and the async [`Planner`] facade the CLI uses.
//!
//! Output goes through `Display` implementations in [`display`], which
//! produce markdown for the terminal renderer.
//!
//! # Quick Start
//!
//! ```rust
//! use kinetic_core::{params::GeneratePlan, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_data_dir(Some("kinetic-data"))
//!     .build()
//!     .await?;
//!
//! let params = GeneratePlan::from_form("Soccer", "Intermediate", "8", "Endurance", "");
//! let result = planner.generate_plan_result(&params, true).await?;
//! println!("{result}");
//!
//! use kinetic_core::params::ListPlans;
//! for summary in planner.list_plans_summary(&ListPlans::default()).await? {
//!     println!("Plan: {}", summary.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod carousel;
pub mod display;
pub mod error;
pub mod generator;
pub mod models;
pub mod params;
pub mod planner;
pub mod storage;
pub mod store;
pub mod theme;

pub use carousel::{Carousel, CarouselConfig, CarouselEvent, Navigation, SlideSurface};
pub use display::{DeleteResult, GenerateResult, PlanSummaries, ThemeResult};
pub use error::{KineticError, Result};
pub use models::{Level, Plan, PlanSummary, Session, Week};
pub use params::{DeletePlan, GeneratePlan, Id, ListPlans};
pub use planner::{Planner, PlannerBuilder};
pub use store::PlanStore;
pub use theme::Theme;
