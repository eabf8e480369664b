//! Plan summary model for list views.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Level, Plan};

/// Compact view of a plan for the saved-plans list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanSummary {
    /// Unique identifier of the plan
    pub id: String,

    /// Display name of the plan
    pub name: String,

    /// Experience level
    pub level: Level,

    /// Plan length in weeks
    pub duration_weeks: u32,

    /// Sessions per week
    pub sessions_per_week: u32,

    /// Notes entered with the plan, if any
    pub notes: Option<String>,

    /// Timestamp when the plan was generated (UTC)
    pub created_at: Timestamp,
}

impl From<&Plan> for PlanSummary {
    fn from(plan: &Plan) -> Self {
        Self {
            id: plan.id.clone(),
            name: plan.name.clone(),
            level: plan.level,
            duration_weeks: plan.duration_weeks,
            sessions_per_week: plan.sessions_per_week,
            notes: if plan.notes.trim().is_empty() {
                None
            } else {
                Some(plan.notes.clone())
            },
            created_at: plan.created_at,
        }
    }
}
