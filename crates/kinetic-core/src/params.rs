//! Parameter structures for Kinetic operations
//!
//! These structures are shared by every interface (the CLI today) and carry
//! no framework-specific derives. Interface layers define their own argument
//! types and convert into these with `From`.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │───▶│  Core Params    │───▶│   Planner /     │
//! │  (clap derives) │    │ (minimal deps)  │    │   Generator     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Form input is coerced here rather than validated: the plan builder never
//! rejects what the user typed, it falls back to defaults.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::models::{Level, Plan};

/// Weeks used when the duration field is missing or unparsable.
pub const DEFAULT_DURATION_WEEKS: u32 = 6;

/// Longest plan the builder generates; longer requests are capped.
pub const MAX_DURATION_WEEKS: u32 = 104;

/// Weeks used when a template does not state its length.
pub const DEFAULT_TEMPLATE_WEEKS: u32 = 8;

/// Sport used when the sport field is empty.
pub const DEFAULT_SPORT: &str = "Custom";

/// Focus used when the focus field is empty.
pub const DEFAULT_FOCUS: &str = "Skill";

/// Generic parameters for operations requiring just a plan ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the plan to operate on
    pub id: String,
}

/// Parameters for listing saved plans.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPlans {
    /// Show at most this many plans, newest first
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Parameters for deleting a saved plan.
///
/// Deletion is destructive, so the caller has to confirm it explicitly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeletePlan {
    /// ID of the plan to delete
    pub id: String,
    /// Whether the user confirmed the deletion
    #[serde(default)]
    pub confirmed: bool,
}

/// Inputs of the plan builder form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratePlan {
    /// Sport the plan trains for
    pub sport: String,
    /// Experience level
    pub level: Level,
    /// Plan length in weeks
    pub duration_weeks: u32,
    /// Training focus, e.g. "Endurance"
    pub focus: String,
    /// Free-form notes
    #[serde(default)]
    pub notes: String,
}

impl Default for GeneratePlan {
    fn default() -> Self {
        Self {
            sport: DEFAULT_SPORT.to_string(),
            level: Level::Beginner,
            duration_weeks: DEFAULT_DURATION_WEEKS,
            focus: DEFAULT_FOCUS.to_string(),
            notes: String::new(),
        }
    }
}

impl GeneratePlan {
    /// Build a request from raw form values.
    ///
    /// Missing or unparsable values never fail:
    /// - an empty sport becomes `"Custom"` and an empty focus `"Skill"`;
    /// - an unrecognised level is treated as `Intermediate`;
    /// - a duration that is not a positive integer becomes 6 weeks.
    ///
    /// ```rust
    /// use kinetic_core::{models::Level, params::GeneratePlan};
    ///
    /// let request = GeneratePlan::from_form("Soccer", "Expert", "eight", "Endurance", "");
    /// assert_eq!(request.level, Level::Intermediate);
    /// assert_eq!(request.duration_weeks, 6);
    /// ```
    pub fn from_form(sport: &str, level: &str, duration: &str, focus: &str, notes: &str) -> Self {
        let level = level.parse().unwrap_or_else(|_| {
            warn!("Unrecognised level '{level}', using Intermediate intensity");
            Level::Intermediate
        });

        Self {
            sport: non_empty_or(sport, DEFAULT_SPORT),
            level,
            duration_weeks: parse_duration_weeks(duration),
            focus: non_empty_or(focus, DEFAULT_FOCUS),
            notes: notes.to_string(),
        }
    }

    /// Prefill a request from a catalogue template such as
    /// `"Soccer — Endurance Builder"`.
    ///
    /// The sport is the part of the name before the dash and the focus is
    /// Endurance when the name mentions it.
    pub fn from_template(name: &str, weeks: Option<u32>) -> Self {
        let sport = name.split('—').next().unwrap_or_default();
        let focus = if name.contains("Endurance") {
            "Endurance"
        } else {
            DEFAULT_FOCUS
        };

        Self {
            sport: non_empty_or(sport, DEFAULT_SPORT),
            duration_weeks: cap_weeks(
                weeks
                    .filter(|w| *w > 0)
                    .unwrap_or(DEFAULT_TEMPLATE_WEEKS),
            ),
            focus: focus.to_string(),
            ..Self::default()
        }
    }

    /// Reuse the inputs of a saved plan, e.g. to continue or regenerate it.
    pub fn from_plan(plan: &Plan) -> Self {
        Self {
            sport: non_empty_or(&plan.sport, DEFAULT_SPORT),
            level: plan.level,
            duration_weeks: if plan.duration_weeks > 0 {
                cap_weeks(plan.duration_weeks)
            } else {
                DEFAULT_TEMPLATE_WEEKS
            },
            focus: non_empty_or(&plan.focus, DEFAULT_FOCUS),
            notes: plan.notes.clone(),
        }
    }
}

/// Parse a duration field, defaulting to six weeks.
///
/// Leading digits are honoured (`"10 weeks"` is 10) and zero, negative or
/// non-numeric input falls back to the default. Lengths beyond
/// [`MAX_DURATION_WEEKS`] are capped.
pub fn parse_duration_weeks(raw: &str) -> u32 {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();

    match digits.parse::<u64>() {
        Ok(weeks) if weeks > 0 => cap_weeks(u32::try_from(weeks).unwrap_or(u32::MAX)),
        // Only overflow can fail on a non-empty run of digits.
        Err(_) if !digits.is_empty() => cap_weeks(u32::MAX),
        _ => {
            if !raw.trim().is_empty() {
                warn!("Unusable duration '{raw}', using {DEFAULT_DURATION_WEEKS} weeks");
            }
            DEFAULT_DURATION_WEEKS
        }
    }
}

/// Limits a plan length to [`MAX_DURATION_WEEKS`].
pub fn cap_weeks(weeks: u32) -> u32 {
    if weeks > MAX_DURATION_WEEKS {
        warn!("Duration of {weeks} weeks is too long, using {MAX_DURATION_WEEKS} weeks");
        MAX_DURATION_WEEKS
    } else {
        weeks
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
