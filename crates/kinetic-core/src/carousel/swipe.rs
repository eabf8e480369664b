//! Horizontal swipe recognition.

/// Direction of a recognised swipe, named after the finger's travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved left: show the next slide
    Left,
    /// Finger moved right: show the previous slide
    Right,
}

/// Classifies a touch displacement.
///
/// A swipe needs more horizontal than vertical travel and more horizontal
/// travel than `threshold`.
pub fn classify(delta_x: f64, delta_y: f64, threshold: f64) -> Option<SwipeDirection> {
    if delta_x.abs() > delta_y.abs() && delta_x.abs() > threshold {
        if delta_x > 0.0 {
            Some(SwipeDirection::Right)
        } else {
            Some(SwipeDirection::Left)
        }
    } else {
        None
    }
}

/// Tracks one touch sequence from start to end.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start: Option<(f64, f64)>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records where the touch began, replacing any unfinished touch.
    pub fn begin(&mut self, x: f64, y: f64) {
        self.start = Some((x, y));
    }

    /// Finishes the touch at `(x, y)`.
    ///
    /// An end without a matching start is ignored.
    pub fn end(&mut self, x: f64, y: f64, threshold: f64) -> Option<SwipeDirection> {
        let (start_x, start_y) = self.start.take()?;
        classify(x - start_x, y - start_y, threshold)
    }
}
