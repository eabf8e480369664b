//! Display implementations for domain models.
//!
//! Every model renders as markdown for the terminal renderer.

use std::fmt;

use super::{LocalDate, LocalDateTime};
use crate::models::{Level, Plan, PlanSummary, Session, Week};

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} min)", self.kind, self.duration_minutes)
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### Week {}", self.week_number)?;
        writeln!(f)?;
        for session in &self.sessions {
            writeln!(f, "- {session}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.name)?;
        writeln!(f)?;

        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Sport: {}", self.sport)?;
        writeln!(f, "- Level: {}", self.level)?;
        writeln!(f, "- Focus: {}", self.focus)?;
        writeln!(
            f,
            "- Schedule: {} sessions/week • {} weeks",
            self.sessions_per_week, self.duration_weeks
        )?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;

        if !self.notes.trim().is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.notes)?;
        }

        if self.weekly_structure.is_empty() {
            writeln!(f, "\nNo weeks in this plan.")?;
        } else {
            writeln!(f, "\n## Weekly structure")?;
            writeln!(f)?;
            for week in &self.weekly_structure {
                write!(f, "{week}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Schedule**: {} sessions/week • {} weeks",
            self.sessions_per_week, self.duration_weeks
        )?;
        writeln!(
            f,
            "- **Level**: {} • **Created**: {}",
            self.level,
            LocalDate(&self.created_at)
        )?;
        writeln!(
            f,
            "- **Notes**: {}",
            self.notes.as_deref().unwrap_or("No notes")
        )?;
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use crate::{generator::generate_plan_at, models::PlanSummary, params::GeneratePlan};

    fn plan(notes: &str) -> crate::models::Plan {
        let params = GeneratePlan {
            sport: "Soccer".to_string(),
            level: crate::models::Level::Intermediate,
            duration_weeks: 2,
            focus: "Endurance".to_string(),
            notes: notes.to_string(),
        };
        generate_plan_at(&params, Timestamp::from_second(1_700_000_000).unwrap())
    }

    #[test]
    fn test_plan_display() {
        let plan = plan("Intervals on Tuesdays");
        let output = plan.to_string();

        assert!(output.starts_with("# Soccer • Endurance (2w)\n"));
        assert!(output.contains(&format!("- ID: {}", plan.id)));
        assert!(output.contains("- Schedule: 3 sessions/week • 2 weeks"));
        assert!(output.contains("Intervals on Tuesdays"));
        assert!(output.contains("### Week 2"));
        assert!(output.contains("- Long Endurance (68 min)"));
    }

    #[test]
    fn test_summary_display_without_notes() {
        let summary = PlanSummary::from(&plan(""));
        let output = summary.to_string();

        assert!(output.contains("## Soccer • Endurance (2w) (ID: plan_"));
        assert!(output.contains("- **Level**: Intermediate"));
        assert!(output.contains("- **Notes**: No notes"));
    }
}
