//! Hero carousel controller.
//!
//! [`Carousel`] is a timer-free state machine over a deck of N slides with
//! index-aligned indicators. It owns two deadlines:
//!
//! - the **settle** deadline, set by every transition. While it is pending
//!   the transition lock is held and all navigation is rejected;
//! - the **auto-advance** deadline, cancelled by every transition and
//!   re-armed when the transition settles, so the interval always counts
//!   from the most recent slide change. It is also cancelled while the
//!   pointer hovers the deck, the page is hidden, or playback is paused.
//!
//! Time is passed in by the caller. [`driver::run`] wires the machine to tokio
//! timers and an event channel; tests drive it with hand-made instants.
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use kinetic_core::carousel::{Carousel, CarouselConfig, SlideSurface};
//!
//! struct Deck(Vec<bool>);
//!
//! impl SlideSurface for Deck {
//!     fn slide_count(&self) -> usize {
//!         self.0.len()
//!     }
//!     fn set_active(&mut self, index: usize, active: bool) {
//!         self.0[index] = active;
//!     }
//! }
//!
//! let t0 = Instant::now();
//! let mut carousel = Carousel::new(Deck(vec![false; 3]), CarouselConfig::default(), t0)?;
//!
//! carousel.poll(t0 + Duration::from_millis(5000));
//! assert_eq!(carousel.current_index(), 1);
//! assert!(carousel.is_transitioning());
//! # Ok::<(), kinetic_core::KineticError>(())
//! ```

mod config;
pub mod driver;
mod swipe;


use std::{fmt, time::Instant};

use log::{debug, error, info};

pub use config::{
    CarouselConfig, DEFAULT_AUTO_ADVANCE_INTERVAL, DEFAULT_SWIPE_THRESHOLD,
    DEFAULT_TRANSITION_DURATION,
};
pub use swipe::{classify as classify_swipe, SwipeDirection, SwipeTracker};

use crate::error::{KineticError, Result};

/// The visual side of a slide deck.
///
/// `set_active` marks or unmarks both the slide at `index` and its
/// indicator; the controller keeps exactly one index marked once settled.
pub trait SlideSurface {
    /// Number of slides. Fixed for the lifetime of the controller.
    fn slide_count(&self) -> usize;

    /// Marks (`true`) or unmarks (`false`) the slide and indicator at `index`.
    fn set_active(&mut self, index: usize, active: bool);
}

/// Keyboard keys the carousel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}

/// Input delivered to a carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselEvent {
    /// An indicator dot was selected
    IndicatorSelected(usize),
    /// A key was pressed
    Key(Key),
    /// A touch began at the given position
    TouchStart { x: f64, y: f64 },
    /// A touch ended at the given position
    TouchEnd { x: f64, y: f64 },
    /// The pointer moved over the deck
    PointerEntered,
    /// The pointer left the deck
    PointerLeft,
    /// The page was hidden or shown again
    VisibilityChanged { hidden: bool },
    /// Playback paused explicitly
    Pause,
    /// Playback resumed explicitly
    Resume,
}

/// Why a navigation request was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The requested slide is already shown
    SameSlide,
    /// A transition is still settling
    Transitioning,
    /// The index does not name a slide
    OutOfRange { index: usize, total: usize },
}

/// Outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// The deck switched slides and is now settling
    Started { from: usize, to: usize },
    /// Nothing changed
    Rejected(Rejection),
}

impl Navigation {
    pub fn is_started(&self) -> bool {
        matches!(self, Navigation::Started { .. })
    }
}

/// Snapshot of the carousel for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideStatus {
    /// 1-based number of the shown slide
    pub current: usize,
    /// Number of slides
    pub total: usize,
    /// Whether an auto-advance is scheduled
    pub auto_playing: bool,
    /// Whether the transition lock is held
    pub transitioning: bool,
}

impl fmt::Display for SlideStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Slide {}/{}", self.current, self.total)?;
        if self.transitioning {
            write!(f, " (transitioning)")?;
        } else if self.auto_playing {
            write!(f, " (auto-playing)")?;
        } else {
            write!(f, " (paused)")?;
        }
        Ok(())
    }
}

/// Carousel controller bound to one slide surface.
pub struct Carousel<S> {
    surface: S,
    config: CarouselConfig,
    total: usize,
    current: usize,
    settle_at: Option<Instant>,
    auto_advance_at: Option<Instant>,
    hovered: bool,
    hidden: bool,
    paused: bool,
    swipe: SwipeTracker,
}

impl<S: SlideSurface> Carousel<S> {
    /// Builds a controller showing the first slide, with auto-advance armed
    /// from `now`.
    ///
    /// # Errors
    ///
    /// Returns `KineticError::Configuration` when the surface has no slides
    /// or `config` is unusable. The caller should then leave the deck inert.
    pub fn new(mut surface: S, config: CarouselConfig, now: Instant) -> Result<Self> {
        config.validate()?;

        let total = surface.slide_count();
        if total == 0 {
            error!("Carousel has no slides, leaving it inert");
            return Err(KineticError::configuration("carousel has no slides"));
        }

        for index in 0..total {
            surface.set_active(index, index == 0);
        }

        let mut carousel = Self {
            surface,
            config,
            total,
            current: 0,
            settle_at: None,
            auto_advance_at: None,
            hovered: false,
            hidden: false,
            paused: false,
            swipe: SwipeTracker::new(),
        };
        carousel.start_auto_advance(now);

        info!("Carousel initialized with {total} slides");
        Ok(carousel)
    }

    /// Index of the shown slide.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.total
    }

    /// Always false: a controller is never built over an empty deck.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Whether the transition lock is held.
    pub fn is_transitioning(&self) -> bool {
        self.settle_at.is_some()
    }

    /// When the next auto-advance is due, if one is scheduled.
    pub fn auto_advance_at(&self) -> Option<Instant> {
        self.auto_advance_at
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn status(&self) -> SlideStatus {
        SlideStatus {
            current: self.current + 1,
            total: self.total,
            auto_playing: self.auto_advance_at.is_some(),
            transitioning: self.is_transitioning(),
        }
    }

    /// Earliest pending deadline; call [`Carousel::poll`] once it passes.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.settle_at, self.auto_advance_at) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Switches to slide `index`.
    pub fn go_to(&mut self, index: usize, now: Instant) -> Navigation {
        if index == self.current {
            return Navigation::Rejected(Rejection::SameSlide);
        }
        if self.is_transitioning() {
            return Navigation::Rejected(Rejection::Transitioning);
        }
        if index >= self.total {
            return Navigation::Rejected(Rejection::OutOfRange {
                index,
                total: self.total,
            });
        }

        self.settle_at = Some(now + self.config.transition_duration);
        self.stop_auto_advance();

        let from = self.current;
        self.surface.set_active(from, false);
        self.current = index;
        self.surface.set_active(index, true);

        debug!("Switched to slide {}", index + 1);
        Navigation::Started { from, to: index }
    }

    /// Switches to the following slide, wrapping to the first.
    pub fn next(&mut self, now: Instant) -> Navigation {
        self.go_to((self.current + 1) % self.total, now)
    }

    /// Switches to the preceding slide, wrapping to the last.
    pub fn previous(&mut self, now: Instant) -> Navigation {
        self.go_to((self.current + self.total - 1) % self.total, now)
    }

    /// Runs every deadline that has passed by `now`, in order.
    ///
    /// Settling releases the lock and re-arms auto-advance from the settle
    /// time. A due auto-advance moves to the next slide; when that is
    /// rejected (a single-slide deck) the timer simply repeats. Returns the
    /// transitions started by auto-advance.
    pub fn poll(&mut self, now: Instant) -> Vec<Navigation> {
        let mut started = Vec::new();

        while let Some(deadline) = self.next_deadline() {
            if deadline > now {
                break;
            }

            if self.settle_at == Some(deadline) {
                self.settle_at = None;
                self.start_auto_advance(deadline);
                continue;
            }

            self.auto_advance_at = None;
            let navigation = self.next(deadline);
            if navigation.is_started() {
                started.push(navigation);
            } else {
                self.start_auto_advance(deadline);
            }
        }

        started
    }

    /// Feeds one input event, returning the navigation it caused, if any.
    pub fn handle(&mut self, event: CarouselEvent, now: Instant) -> Option<Navigation> {
        match event {
            CarouselEvent::IndicatorSelected(index) => Some(self.go_to(index, now)),
            CarouselEvent::Key(Key::ArrowLeft) => Some(self.previous(now)),
            CarouselEvent::Key(Key::ArrowRight) => Some(self.next(now)),
            CarouselEvent::Key(Key::Other) => None,
            CarouselEvent::TouchStart { x, y } => {
                self.swipe.begin(x, y);
                None
            }
            CarouselEvent::TouchEnd { x, y } => self.touch_end(x, y, now),
            CarouselEvent::PointerEntered => {
                self.pointer_entered();
                None
            }
            CarouselEvent::PointerLeft => {
                self.pointer_left(now);
                None
            }
            CarouselEvent::VisibilityChanged { hidden } => {
                self.visibility_changed(hidden, now);
                None
            }
            CarouselEvent::Pause => {
                self.pause();
                None
            }
            CarouselEvent::Resume => {
                self.resume(now);
                None
            }
        }
    }

    /// Completes a touch and navigates when it was a swipe.
    pub fn touch_end(&mut self, x: f64, y: f64, now: Instant) -> Option<Navigation> {
        match self.swipe.end(x, y, self.config.swipe_threshold)? {
            SwipeDirection::Right => Some(self.previous(now)),
            SwipeDirection::Left => Some(self.next(now)),
        }
    }

    pub fn pointer_entered(&mut self) {
        self.hovered = true;
        self.stop_auto_advance();
    }

    pub fn pointer_left(&mut self, now: Instant) {
        self.hovered = false;
        self.start_auto_advance(now);
    }

    pub fn visibility_changed(&mut self, hidden: bool, now: Instant) {
        self.hidden = hidden;
        if hidden {
            self.stop_auto_advance();
        } else {
            self.start_auto_advance(now);
        }
    }

    /// Stops auto-advance until [`Carousel::resume`].
    pub fn pause(&mut self) {
        self.paused = true;
        self.stop_auto_advance();
    }

    /// Lifts an explicit pause; auto-advance restarts from `now` unless
    /// hover or visibility still hold it.
    pub fn resume(&mut self, now: Instant) {
        self.paused = false;
        self.start_auto_advance(now);
    }

    fn is_held(&self) -> bool {
        self.hovered || self.hidden || self.paused
    }

    fn start_auto_advance(&mut self, from: Instant) {
        if self.is_held() || self.is_transitioning() {
            return;
        }
        self.auto_advance_at = Some(from + self.config.auto_advance_interval);
        debug!("Auto-advance started");
    }

    fn stop_auto_advance(&mut self) {
        if self.auto_advance_at.take().is_some() {
            debug!("Auto-advance stopped");
        }
    }
}
