//! Carousel tuning parameters.

use std::time::Duration;

use crate::error::{KineticError, Result};

/// Default delay between automatic advances.
pub const DEFAULT_AUTO_ADVANCE_INTERVAL: Duration = Duration::from_millis(5000);

/// Default length of the visual slide transition, during which navigation is
/// locked.
pub const DEFAULT_TRANSITION_DURATION: Duration = Duration::from_millis(800);

/// Default minimum horizontal travel for a touch to count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;

/// Timing and gesture settings for a [`super::Carousel`].
///
/// ```rust
/// use std::time::Duration;
/// use kinetic_core::carousel::CarouselConfig;
///
/// let config = CarouselConfig::default()
///     .with_auto_advance_interval(Duration::from_secs(8))
///     .with_swipe_threshold(80.0);
/// assert_eq!(config.transition_duration, Duration::from_millis(800));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    /// Delay between automatic advances, measured from the last transition
    pub auto_advance_interval: Duration,
    /// Transition lock length
    pub transition_duration: Duration,
    /// Horizontal travel a swipe must exceed
    pub swipe_threshold: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_advance_interval: DEFAULT_AUTO_ADVANCE_INTERVAL,
            transition_duration: DEFAULT_TRANSITION_DURATION,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

impl CarouselConfig {
    pub fn with_auto_advance_interval(mut self, interval: Duration) -> Self {
        self.auto_advance_interval = interval;
        self
    }

    pub fn with_transition_duration(mut self, duration: Duration) -> Self {
        self.transition_duration = duration;
        self
    }

    pub fn with_swipe_threshold(mut self, threshold: f64) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    /// Checks that the settings describe a usable carousel.
    ///
    /// # Errors
    ///
    /// Returns `KineticError::Configuration` for a zero auto-advance interval
    /// or a negative or non-finite swipe threshold.
    pub fn validate(&self) -> Result<()> {
        if self.auto_advance_interval.is_zero() {
            return Err(KineticError::configuration(
                "auto-advance interval must be greater than zero",
            ));
        }
        if !self.swipe_threshold.is_finite() || self.swipe_threshold < 0.0 {
            return Err(KineticError::configuration(format!(
                "swipe threshold must be a non-negative number, got {}",
                self.swipe_threshold
            )));
        }
        Ok(())
    }
}
