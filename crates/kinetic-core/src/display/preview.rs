//! Compact plan renderings for the builder preview and the dashboard.

use std::fmt;

use crate::models::{Plan, Session};

/// Number of weeks shown in a [`PlanOverview`].
pub const OVERVIEW_WEEKS: usize = 3;

/// Preview shown right after a plan is generated.
///
/// Shows the plan header and the first week's sessions only.
pub struct PlanPreview<'a>(pub &'a Plan);

impl fmt::Display for PlanPreview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.0;

        writeln!(f, "## {}", plan.name)?;
        writeln!(f)?;
        writeln!(
            f,
            "{} • {} sessions/week • {} weeks",
            plan.level, plan.sessions_per_week, plan.duration_weeks
        )?;
        writeln!(f)?;
        writeln!(f, "**First week snapshot:**")?;
        writeln!(f)?;

        match plan.first_week() {
            Some(week) => {
                for session in &week.sessions {
                    writeln!(f, "- {}", CompactSession(session))?;
                }
            }
            None => writeln!(f, "- No sessions scheduled")?,
        }
        Ok(())
    }
}

/// Dashboard view of a saved plan: its first few weeks on one line each.
pub struct PlanOverview<'a>(pub &'a Plan);

impl fmt::Display for PlanOverview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.0;

        writeln!(f, "## {}", plan.name)?;
        writeln!(f)?;
        writeln!(
            f,
            "{} • {} sessions/week • {} weeks • {} min total",
            plan.level,
            plan.sessions_per_week,
            plan.duration_weeks,
            plan.total_minutes()
        )?;
        writeln!(f)?;

        for week in plan.weekly_structure.iter().take(OVERVIEW_WEEKS) {
            let sessions: Vec<String> = week
                .sessions
                .iter()
                .map(|session| CompactSession(session).to_string())
                .collect();
            writeln!(f, "- Week {}: {}", week.week_number, sessions.join(", "))?;
        }

        let hidden = plan.weekly_structure.len().saturating_sub(OVERVIEW_WEEKS);
        if hidden > 0 {
            writeln!(f, "- ... and {hidden} more weeks")?;
        }

        writeln!(f)?;
        let notes = plan.notes.trim();
        writeln!(f, "Notes: {}", if notes.is_empty() { "–" } else { notes })
    }
}

struct CompactSession<'a>(&'a Session);

impl fmt::Display for CompactSession<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}m)", self.0.kind, self.0.duration_minutes)
    }
}
