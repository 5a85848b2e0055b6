//! Boot status indicators
//!
//! - Failure: the whole strip flashes red until something else takes over.
//! - Success: a green chaser runs once along the strip, then it goes dark.

use embassy_time::Instant;

use crate::OutputDriver;
use crate::animation::{Animation, FAILURE_FLASH_PERIOD, SUCCESS_SWEEP_PERIOD};
use crate::color::{GREEN, OFF, RED};
use crate::config::BoxLayout;
use crate::strip::LightStrip;

impl<D, L, const MAX_LIGHTS: usize, const EVENTS: usize> LightStrip<'_, D, L, MAX_LIGHTS, EVENTS>
where
    D: OutputDriver,
    L: BoxLayout,
{
    /// Flash the strip to indicate a failed system start
    ///
    /// Runs until `clear`, `blink` or another indicator cancels it.
    pub fn indicate_failure(&mut self, now: Instant) {
        self.clear_timers();
        self.failure_flash(true, now);
    }

    /// Run a chaser to indicate a successful system start
    pub fn indicate_success(&mut self, now: Instant) {
        self.clear_timers();
        self.success_sweep(0, now);
    }

    pub(crate) fn failure_flash(&mut self, lit: bool, at: Instant) {
        self.fill(if lit { RED } else { OFF });
        self.schedule(at, FAILURE_FLASH_PERIOD, Animation::FailureFlash { lit: !lit });
    }

    pub(crate) fn success_sweep(&mut self, index: usize, at: Instant) {
        if index >= self.light_count() {
            self.schedule(at, SUCCESS_SWEEP_PERIOD, Animation::SuccessFinish);
            return;
        }

        let buffer = self.buffer_mut();
        if let Some(previous) = index.checked_sub(1) {
            let _ = buffer.set(previous, OFF);
        }
        let _ = buffer.set(index, GREEN);
        self.render();

        self.schedule(
            at,
            SUCCESS_SWEEP_PERIOD,
            Animation::SuccessSweep { index: index + 1 },
        );
    }

    pub(crate) fn success_finish(&mut self) {
        self.fill(OFF);
    }
}
