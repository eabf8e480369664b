//! Light/dark theme preference.
//!
//! A single component owns the `theme` storage key. There is exactly one
//! initialisation path: read the stored token, fall back to light.

use std::{fmt, str::FromStr};

use log::info;
use serde::{Deserialize, Serialize};

use crate::{error::Result, storage::KeyValueStorage};

/// Storage key holding the theme token.
pub const THEME_KEY: &str = "theme";

/// Colour scheme of the site.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(format!("Invalid theme: {s}")),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Theme {
    /// Token written to storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Glyph shown on the toggle: a moon in dark mode, a sun in light mode.
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Light => "☀",
            Theme::Dark => "☾",
        }
    }
}

/// Theme preference persisted in key-value storage.
pub struct ThemePreference<S> {
    storage: S,
}

impl<S: KeyValueStorage> ThemePreference<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Stored theme; light when nothing usable is stored.
    pub fn current(&self) -> Result<Theme> {
        Ok(self
            .storage
            .get_item(THEME_KEY)?
            .and_then(|token| token.parse().ok())
            .unwrap_or_default())
    }

    /// Persists `theme`.
    pub fn set(&mut self, theme: Theme) -> Result<()> {
        self.storage.set_item(THEME_KEY, theme.as_str())?;
        info!("Theme set to {theme}");
        Ok(())
    }

    /// Switches to the other theme and returns it.
    pub fn toggle(&mut self) -> Result<Theme> {
        let next = self.current()?.toggled();
        self.set(next)?;
        Ok(next)
    }
}
