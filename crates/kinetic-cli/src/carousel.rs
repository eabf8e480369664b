//! Terminal front end for the hero carousel.
//!
//! Commands arrive one per line on stdin and become carousel events; the
//! deck prints every slide change.

use std::time::Duration;

use anyhow::{Context, Result};
use kinetic_core::carousel::{driver, Carousel, CarouselConfig, CarouselEvent, Key, SlideSurface};
use log::{debug, info, warn};
use tokio::{
    io::{self, AsyncBufReadExt, BufReader},
    signal,
    sync::mpsc,
    time,
};

use crate::{cli::CarouselArgs, renderer::TerminalRenderer};

/// Slide deck that reports activations on the terminal.
pub struct TerminalDeck {
    active: Vec<bool>,
    renderer: TerminalRenderer,
}

impl TerminalDeck {
    pub fn new(slides: usize, renderer: TerminalRenderer) -> Self {
        Self {
            active: vec![false; slides],
            renderer,
        }
    }
}

impl SlideSurface for TerminalDeck {
    fn slide_count(&self) -> usize {
        self.active.len()
    }

    fn set_active(&mut self, index: usize, active: bool) {
        self.active[index] = active;
        if active {
            self.renderer.render_line(&format!(
                "**▶ Slide {}/{}**",
                index + 1,
                self.active.len()
            ));
        }
    }
}

/// A parsed stdin line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Events(&'static [CarouselEvent]),
    Select(usize),
    Swipe { dx: f64, dy: f64 },
    Quit,
}

impl Command {
    fn into_events(self) -> Vec<CarouselEvent> {
        match self {
            Command::Events(events) => events.to_vec(),
            Command::Select(index) => vec![CarouselEvent::IndicatorSelected(index)],
            Command::Swipe { dx, dy } => vec![
                CarouselEvent::TouchStart { x: 0.0, y: 0.0 },
                CarouselEvent::TouchEnd { x: dx, y: dy },
            ],
            Command::Quit => Vec::new(),
        }
    }
}

/// Parses one line of input; slide numbers are 1-based.
pub fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let command = match words.next()? {
        "next" | "n" => Command::Events(&[CarouselEvent::Key(Key::ArrowRight)]),
        "prev" | "p" => Command::Events(&[CarouselEvent::Key(Key::ArrowLeft)]),
        "pause" => Command::Events(&[CarouselEvent::Pause]),
        "resume" => Command::Events(&[CarouselEvent::Resume]),
        "hover" => Command::Events(&[CarouselEvent::PointerEntered]),
        "leave" => Command::Events(&[CarouselEvent::PointerLeft]),
        "hide" => Command::Events(&[CarouselEvent::VisibilityChanged { hidden: true }]),
        "show" => Command::Events(&[CarouselEvent::VisibilityChanged { hidden: false }]),
        "swipe" => {
            let dx = words.next()?.parse().ok()?;
            let dy = match words.next() {
                Some(word) => word.parse().ok()?,
                None => 0.0,
            };
            Command::Swipe { dx, dy }
        }
        "quit" | "q" | "exit" => Command::Quit,
        word => {
            let number: usize = word.parse().ok()?;
            Command::Select(number.checked_sub(1)?)
        }
    };

    if words.next().is_some() {
        return None;
    }
    Some(command)
}

/// Runs the carousel until `quit`, stdin EOF, Ctrl-C or the run time ends.
pub async fn run(args: &CarouselArgs, renderer: TerminalRenderer) -> Result<()> {
    let config = CarouselConfig::from(args);
    let carousel = Carousel::new(TerminalDeck::new(args.slides, renderer), config, driver::now())
        .context("Failed to start carousel")?;

    let (tx, rx) = mpsc::channel(16);
    let driver = tokio::spawn(driver::run(carousel, rx));

    let deadline = args.run_for_ms.map(|ms| time::Instant::now() + Duration::from_millis(ms));
    let mut lines = BufReader::new(io::stdin()).lines();
    let mut stdin_open = true;

    info!("Carousel running; commands: next, prev, <n>, pause, resume, swipe <dx> <dy>, quit");

    loop {
        tokio::select! {
            line = lines.next_line(), if stdin_open => {
                match line.context("Failed to read stdin")? {
                    Some(line) if line.trim().is_empty() => {}
                    Some(line) => match parse_command(&line) {
                        Some(Command::Quit) => break,
                        Some(command) => {
                            for event in command.into_events() {
                                if tx.send(event).await.is_err() {
                                    warn!("Carousel driver stopped early");
                                    break;
                                }
                            }
                        }
                        None => eprintln!("Unknown command: {}", line.trim()),
                    },
                    None => {
                        debug!("stdin closed");
                        stdin_open = false;
                        if deadline.is_none() {
                            break;
                        }
                    }
                }
            }
            () = sleep_until(deadline) => break,
            result = signal::ctrl_c() => {
                result.context("Failed to listen for Ctrl-C")?;
                break;
            }
        }
    }

    drop(tx);
    let carousel = driver.await.context("Carousel driver failed")?;
    println!("Stopped at {}", carousel.status());
    Ok(())
}

async fn sleep_until(deadline: Option<time::Instant>) {
    match deadline {
        Some(deadline) => time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_navigation() {
        assert_eq!(
            parse_command("next"),
            Some(Command::Events(&[CarouselEvent::Key(Key::ArrowRight)]))
        );
        assert_eq!(parse_command(" 2 "), Some(Command::Select(1)));
        assert_eq!(parse_command("0"), None);
        assert_eq!(parse_command("quit"), Some(Command::Quit));
        assert_eq!(parse_command("next please"), None);
        assert_eq!(parse_command("dance"), None);
    }

    #[test]
    fn test_parse_swipe() {
        assert_eq!(
            parse_command("swipe -60 10"),
            Some(Command::Swipe { dx: -60.0, dy: 10.0 })
        );
        assert_eq!(
            parse_command("swipe 80"),
            Some(Command::Swipe { dx: 80.0, dy: 0.0 })
        );
        assert_eq!(parse_command("swipe left"), None);

        let events = parse_command("swipe -60 10").unwrap().into_events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1], CarouselEvent::TouchEnd { x: -60.0, y: 10.0 });
    }
}
