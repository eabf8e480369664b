//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use super::PlanPreview;
use crate::{models::Plan, theme::Theme};

/// Outcome of generating a plan, optionally saved.
pub struct GenerateResult {
    pub plan: Plan,
    pub saved: bool,
}

impl GenerateResult {
    pub fn new(plan: Plan, saved: bool) -> Self {
        Self { plan, saved }
    }
}

impl fmt::Display for GenerateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.saved {
            writeln!(
                f,
                "Saved plan '{}' (ID: {})",
                self.plan.name, self.plan.id
            )?;
        } else {
            writeln!(f, "Generated plan (not saved). Pass --save to keep it.")?;
        }
        writeln!(f)?;
        write!(f, "{}", PlanPreview(&self.plan))
    }
}

/// Outcome of deleting a plan.
///
/// ```rust
/// use kinetic_core::display::DeleteResult;
///
/// let result = DeleteResult::new("plan_1".to_string(), "Soccer • Skill (6w)".to_string());
/// assert_eq!(result.to_string(), "Deleted plan 'Soccer • Skill (6w)' (ID: plan_1)\n");
/// ```
pub struct DeleteResult {
    pub id: String,
    pub name: String,
}

impl DeleteResult {
    pub fn new(id: String, name: String) -> Self {
        Self { id, name }
    }
}

impl From<&Plan> for DeleteResult {
    fn from(plan: &Plan) -> Self {
        Self::new(plan.id.clone(), plan.name.clone())
    }
}

impl fmt::Display for DeleteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Deleted plan '{}' (ID: {})", self.name, self.id)
    }
}

/// Current theme, and whether this operation changed it.
pub struct ThemeResult {
    pub theme: Theme,
    pub changed: bool,
}

impl ThemeResult {
    pub fn unchanged(theme: Theme) -> Self {
        Self {
            theme,
            changed: false,
        }
    }

    pub fn changed(theme: Theme) -> Self {
        Self {
            theme,
            changed: true,
        }
    }
}

impl fmt::Display for ThemeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.changed {
            writeln!(f, "Theme switched to {} {}", self.theme, self.theme.icon())
        } else {
            writeln!(f, "Theme: {} {}", self.theme, self.theme.icon())
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::{generator::generate_plan_at, params::GeneratePlan};

    #[test]
    fn test_generate_result_messages() {
        let plan = generate_plan_at(&GeneratePlan::default(), Timestamp::UNIX_EPOCH);

        let saved = GenerateResult::new(plan.clone(), true).to_string();
        assert!(saved.starts_with(&format!(
            "Saved plan 'Custom • Skill (6w)' (ID: {})",
            plan.id
        )));
        assert!(saved.contains("First week snapshot:"));

        let unsaved = GenerateResult::new(plan, false).to_string();
        assert!(unsaved.starts_with("Generated plan (not saved)"));
    }

    #[test]
    fn test_theme_result() {
        assert_eq!(ThemeResult::unchanged(Theme::Light).to_string(), "Theme: light ☀\n");
        assert_eq!(
            ThemeResult::changed(Theme::Dark).to_string(),
            "Theme switched to dark ☾\n"
        );
    }
}
