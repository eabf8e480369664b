//! Theme operations for the Planner.

use super::Planner;
use crate::{
    error::Result,
    theme::{Theme, ThemePreference},
};

impl Planner {
    /// Stored theme, light by default.
    pub async fn theme(&self) -> Result<Theme> {
        self.with_storage(|storage| ThemePreference::new(storage).current())
            .await
    }

    pub async fn set_theme(&self, theme: Theme) -> Result<()> {
        self.with_storage(move |storage| ThemePreference::new(storage).set(theme))
            .await
    }

    /// Flips the stored theme and returns the new one.
    pub async fn toggle_theme(&self) -> Result<Theme> {
        self.with_storage(|storage| ThemePreference::new(storage).toggle())
            .await
    }
}
