//! Runs a carousel against tokio timers.
//!
//! The driver is the carousel's only suspension point: it waits for either
//! the next input event or the next deadline, whichever comes first.

use std::time::Instant;

use log::debug;
use tokio::{sync::mpsc, time};

use super::{Carousel, CarouselEvent, SlideSurface};

/// Current time on tokio's clock, as a std instant.
///
/// Use this rather than `Instant::now()` when building a carousel that a
/// driver will run, so that a paused test clock stays consistent.
pub fn now() -> Instant {
    time::Instant::now().into_std()
}

/// Drives `carousel` until the event channel closes, then hands it back.
pub async fn run<S: SlideSurface>(
    mut carousel: Carousel<S>,
    mut events: mpsc::Receiver<CarouselEvent>,
) -> Carousel<S> {
    loop {
        let deadline = carousel.next_deadline();

        tokio::select! {
            event = events.recv() => match event {
                Some(event) => {
                    if let Some(navigation) = carousel.handle(event, now()) {
                        debug!("{event:?} -> {navigation:?}");
                    }
                }
                None => break,
            },
            () = sleep_until(deadline) => {
                carousel.poll(now());
            }
        }
    }

    debug!("Carousel driver stopped at {}", carousel.status());
    carousel
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => time::sleep_until(time::Instant::from_std(deadline)).await,
        None => std::future::pending().await,
    }
}
