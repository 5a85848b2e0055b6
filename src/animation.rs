//! Animation steps
//!
//! Every pending step of an animation is a value stored in the timer queue.
//! When its timer expires the strip applies the step and, if the animation
//! goes on, schedules the next one.

use embassy_time::Duration;

use crate::color::Rgb;

/// Period of the failure flash
pub const FAILURE_FLASH_PERIOD: Duration = Duration::from_millis(500);

/// Period of the success sweep
pub const SUCCESS_SWEEP_PERIOD: Duration = Duration::from_millis(150);

/// Outcome of toggling a lamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    TurnedOn,
    TurnedOff,
}

impl Toggle {
    pub const fn is_on(self) -> bool {
        matches!(self, Self::TurnedOn)
    }
}

/// Optional parameters of a blink request
///
/// Omitted values fall back to the strip config.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlinkOptions {
    pub color: Option<Rgb>,
    /// Number of on-phases, zero only turns the lamp off
    pub count: Option<u16>,
    pub period: Option<Duration>,
}

impl BlinkOptions {
    #[must_use]
    pub const fn with_color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub const fn with_count(mut self, count: u16) -> Self {
        self.count = Some(count);
        self
    }

    #[must_use]
    pub const fn with_period(mut self, period: Duration) -> Self {
        self.period = Some(period);
        self
    }
}

/// State of a running blink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkSequence {
    pub index: usize,
    pub color: Rgb,
    /// On-phases still to show
    pub remaining: u16,
    pub period: Duration,
}

impl BlinkSequence {
    /// Account for a toggle of the lamp
    ///
    /// Only the off to on transition consumes a blink.
    pub fn record(&mut self, toggle: Toggle) {
        if toggle.is_on() {
            self.remaining = self.remaining.saturating_sub(1);
        }
    }

    pub const fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

/// A scheduled animation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    /// Toggle the blinking lamp again
    Blink(BlinkSequence),
    /// Final step of a blink, the lamp ends dark
    ForceOff { index: usize },
    /// Failure indicator, `lit` is the phase to show
    FailureFlash { lit: bool },
    /// Success indicator lighting lamp `index`
    SuccessSweep { index: usize },
    /// Success indicator went past the last lamp
    SuccessFinish,
}
