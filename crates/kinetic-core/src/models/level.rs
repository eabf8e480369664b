//! Training level enumeration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Experience level selected on the plan form.
///
/// Stored as its capitalised name. Unknown names decode to
/// [`Level::Intermediate`] so that one odd record never invalidates a whole
/// stored plan list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(from = "String", into = "String")]
pub enum Level {
    /// Newcomers, scaled down to 70% intensity
    Beginner,

    /// Baseline intensity
    #[default]
    Intermediate,

    /// Experienced athletes, scaled up to 130% intensity
    Advanced,
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Level::Beginner),
            "intermediate" => Ok(Level::Intermediate),
            "advanced" => Ok(Level::Advanced),
            _ => Err(format!("Invalid level: {s}")),
        }
    }
}

impl From<String> for Level {
    fn from(value: String) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.as_str().to_string()
    }
}

impl Level {
    /// Name as shown on the form and in stored records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }

    /// Multiplier applied to session counts and durations.
    pub fn intensity(&self) -> f64 {
        match self {
            Level::Beginner => 0.7,
            Level::Intermediate => 1.0,
            Level::Advanced => 1.3,
        }
    }
}
