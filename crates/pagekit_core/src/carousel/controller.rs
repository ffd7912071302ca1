//! Carousel navigation and autoplay state machine.
//!
//! # Responsibility
//! - Own the current slide index over a fixed `SlideSet`.
//! - Own the single autoplay timer and its reset/pause rules.
//!
//! # Invariants
//! - `current` is always in `0..slides.len()`; navigation wraps both ways.
//! - A timer is live only while autoplay is enabled.
//! - `pause` cancels the live timer; any later reset or `resume` starts a
//!   fresh one if autoplay is still enabled.
//! - At most one timer is live; starting always cancels the previous one.
//! - Ticks from any timer other than the live one never move the index.

use crate::carousel::scheduler::{Scheduler, TimerId};
use crate::config::CarouselConfig;
use crate::messages::carousel_status;
use crate::model::slide::{Slide, SlideSet};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

pub type CarouselResult<T> = Result<T, CarouselError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselError {
    IndexOutOfRange { index: usize, len: usize },
}

impl Display for CarouselError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "slide index {index} out of range for {len} slides")
            }
        }
    }
}

impl Error for CarouselError {}

/// Navigation keys the carousel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
}

impl NavKey {
    /// Maps a DOM `KeyboardEvent.key` value; other keys are not navigation.
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            _ => None,
        }
    }
}

/// Presentation and timer events routed into the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    PrevClicked,
    NextClicked,
    DotClicked(usize),
    KeyPressed(NavKey),
    PointerEnter,
    PointerLeave,
    AutoplayToggled(bool),
    Tick(TimerId),
}

/// Circular slide controller with cancellable autoplay.
pub struct CarouselController<S: Scheduler> {
    slides: SlideSet,
    scheduler: S,
    interval: Duration,
    current: usize,
    autoplay: bool,
    paused: bool,
    timer: Option<TimerId>,
}

impl<S: Scheduler> CarouselController<S> {
    /// Creates a controller on the first slide.
    ///
    /// Starts the autoplay timer right away when `config.autoplay` is set.
    pub fn new(slides: SlideSet, scheduler: S, config: CarouselConfig) -> Self {
        let mut controller = Self {
            slides,
            scheduler,
            interval: config.interval(),
            current: 0,
            autoplay: false,
            paused: false,
            timer: None,
        };
        if config.autoplay {
            controller.set_autoplay(true);
        }
        controller
    }

    /// Applies one presentation or timer event.
    ///
    /// Only `DotClicked` can fail, when the index is outside the slide set.
    pub fn handle(&mut self, event: CarouselEvent) -> CarouselResult<()> {
        match event {
            CarouselEvent::PrevClicked | CarouselEvent::KeyPressed(NavKey::ArrowLeft) => {
                self.prev()
            }
            CarouselEvent::NextClicked | CarouselEvent::KeyPressed(NavKey::ArrowRight) => {
                self.next()
            }
            CarouselEvent::DotClicked(index) => return self.go_to(index),
            CarouselEvent::PointerEnter => self.pause(),
            CarouselEvent::PointerLeave => self.resume(),
            CarouselEvent::AutoplayToggled(enabled) => self.set_autoplay(enabled),
            CarouselEvent::Tick(timer) => {
                self.on_tick(timer);
            }
        }
        Ok(())
    }

    /// Jumps to `index` and restarts the autoplay countdown.
    pub fn go_to(&mut self, index: usize) -> CarouselResult<()> {
        let len = self.slides.len();
        if index >= len {
            return Err(CarouselError::IndexOutOfRange { index, len });
        }
        self.current = index;
        self.reset_timer();
        Ok(())
    }

    /// Advances one slide, wrapping from the last to the first.
    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.slides.len();
        self.reset_timer();
    }

    /// Steps back one slide, wrapping from the first to the last.
    pub fn prev(&mut self) {
        let len = self.slides.len();
        self.current = (self.current + len - 1) % len;
        self.reset_timer();
    }

    /// Turns autoplay on or off.
    ///
    /// Enabling replaces any live timer, so repeated calls keep exactly one.
    pub fn set_autoplay(&mut self, enabled: bool) {
        self.autoplay = enabled;
        self.reset_timer();
        info!("event=carousel_autoplay module=carousel status=ok enabled={enabled}");
    }

    /// Suspends the timer while the pointer is over the slides.
    ///
    /// Leaves the autoplay setting untouched.
    pub fn pause(&mut self) {
        self.paused = true;
        self.stop_timer();
    }

    /// Ends a pause; restarts the timer only if autoplay is still enabled.
    pub fn resume(&mut self) {
        self.paused = false;
        if self.autoplay {
            self.start_timer();
        }
    }

    /// Handles a timer tick; returns whether the slide advanced.
    pub fn on_tick(&mut self, timer: TimerId) -> bool {
        if self.timer != Some(timer) {
            debug!(
                "event=carousel_tick module=carousel status=ignored timer_id={}",
                timer.as_u64()
            );
            return false;
        }
        self.next();
        true
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_slide(&self) -> &Slide {
        // `current` is kept in range by every transition.
        &self.slides.as_slice()[self.current]
    }

    pub fn slides(&self) -> &SlideSet {
        &self.slides
    }

    /// Number of slides; always at least one.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn is_autoplay_enabled(&self) -> bool {
        self.autoplay
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Live timer handle, if any.
    pub fn active_timer(&self) -> Option<TimerId> {
        self.timer
    }

    /// One-based position and total, for "2 / 4" style progress text.
    pub fn progress(&self) -> (usize, usize) {
        (self.current + 1, self.slides.len())
    }

    /// Localized status line shown under the carousel.
    pub fn status_line(&self) -> String {
        let (position, total) = self.progress();
        carousel_status(self.autoplay, position, total)
    }

    fn reset_timer(&mut self) {
        self.stop_timer();
        if self.autoplay {
            self.start_timer();
        }
    }

    fn start_timer(&mut self) {
        self.stop_timer();
        let timer = self.scheduler.start_repeating(self.interval);
        self.timer = Some(timer);
        debug!(
            "event=carousel_timer module=carousel status=started timer_id={} interval_ms={}",
            timer.as_u64(),
            self.interval.as_millis()
        );
    }

    fn stop_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            self.scheduler.cancel(timer);
            debug!(
                "event=carousel_timer module=carousel status=cancelled timer_id={}",
                timer.as_u64()
            );
        }
    }
}

impl<S: Scheduler> Drop for CarouselController<S> {
    fn drop(&mut self) {
        self.stop_timer();
    }
}
