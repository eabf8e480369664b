//! Workout plan model definition.

use jiff::Timestamp;
use serde::{Deserialize, Deserializer, Serialize};

use super::Level;

/// A single training session inside a week.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// Category label, e.g. "Long Endurance" or "Recovery & Mobility"
    #[serde(rename = "type")]
    pub kind: String,

    /// Session length in minutes
    #[serde(rename = "duration")]
    pub duration_minutes: u32,
}

/// One week of a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Week {
    /// 1-based week number
    #[serde(rename = "week")]
    pub week_number: u32,

    /// Sessions in the order they should be trained
    #[serde(default)]
    pub sessions: Vec<Session>,
}

/// A generated workout plan as persisted in the plan store.
///
/// `weekly_structure` always holds `duration_weeks` weeks and every week holds
/// `sessions_per_week` sessions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Unique identifier, `plan_` followed by a random UUID
    pub id: String,

    /// Display name combining sport, focus and length
    pub name: String,

    /// Sport the plan trains for (free text)
    pub sport: String,

    /// Experience level the plan was generated for
    pub level: Level,

    /// Plan length in weeks; stored negative lengths read as 0
    #[serde(rename = "duration", deserialize_with = "lenient_weeks")]
    pub duration_weeks: u32,

    /// Training focus, e.g. "Endurance" or "Skill"
    pub focus: String,

    /// Free-form notes entered with the plan
    #[serde(default)]
    pub notes: String,

    /// Sessions scheduled in each week (2 to 6)
    pub sessions_per_week: u32,

    /// Week-by-week schedule
    #[serde(default)]
    pub weekly_structure: Vec<Week>,

    /// When the plan was generated (UTC)
    pub created_at: Timestamp,
}

impl Plan {
    /// First week of the schedule, used for previews.
    pub fn first_week(&self) -> Option<&Week> {
        self.weekly_structure.first()
    }

    /// Total planned minutes across every week.
    pub fn total_minutes(&self) -> u64 {
        self.weekly_structure
            .iter()
            .flat_map(|week| week.sessions.iter())
            .map(|session| u64::from(session.duration_minutes))
            .sum()
    }
}

/// Reads a week count the site may have stored as any integer.
///
/// The site's form accepted negative lengths and generated no weeks for
/// them, so values below zero become 0 and oversized values saturate.
fn lenient_weeks<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let weeks = i64::deserialize(deserializer)?;
    Ok(u32::try_from(weeks.max(0)).unwrap_or(u32::MAX))
}
