//! Data models for workout plans.
//!
//! These are the records the plan store persists. The serialized shape keeps
//! the field names the site has always written to local storage
//! (`sessionsPerWeek`, `weeklyStructure`, `createdAt`, ...) so an existing
//! plan list decodes unchanged. Display implementations live in
//! [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use kinetic_core::models::{Level, Plan, Session, Week};
//! use jiff::Timestamp;
//!
//! let plan = Plan {
//!     id: "plan_1".to_string(),
//!     name: "Rowing • Skill (1w)".to_string(),
//!     sport: "Rowing".to_string(),
//!     level: Level::Beginner,
//!     duration_weeks: 1,
//!     focus: "Skill".to_string(),
//!     notes: String::new(),
//!     sessions_per_week: 2,
//!     weekly_structure: vec![Week {
//!         week_number: 1,
//!         sessions: vec![
//!             Session { kind: "Skill/Practice".to_string(), duration_minutes: 48 },
//!             Session { kind: "Speed/Intensity".to_string(), duration_minutes: 19 },
//!         ],
//!     }],
//!     created_at: Timestamp::UNIX_EPOCH,
//! };
//! assert_eq!(plan.total_minutes(), 67);
//! ```

pub mod level;
pub mod plan;
pub mod summary;


pub use level::Level;
pub use plan::{Plan, Session, Week};
pub use summary::PlanSummary;
