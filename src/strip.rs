use embassy_time::{Duration, Instant, Timer};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::animation::{Animation, BlinkOptions, BlinkSequence, Toggle};
use crate::buffer::ColorBuffer;
use crate::color::{OFF, Rgb, SELECTION, WHITE};
use crate::config::{BoxLayout, StripConfig};
use crate::error::LightError;
use crate::event::{SelectionEvent, SelectionSubscriber};
use crate::timer::TimerQueue;

/// Number of timers that can be pending at once
///
/// Every animation cancels the previous one before scheduling, so a single
/// slot is in use most of the time.
pub const TIMER_CAPACITY: usize = 8;

/// How often `run` checks for selection events while no timer is pending
pub const SELECTION_POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Light strip - owns the lamp colors and drives the animations
///
/// `MAX_LIGHTS` is the buffer capacity, `EVENTS` the selection queue size.
pub struct LightStrip<'a, D, L, const MAX_LIGHTS: usize, const EVENTS: usize>
where
    D: OutputDriver,
    L: BoxLayout,
{
    // External dependencies and configuration
    driver: D,
    layout: L,
    selections: SelectionSubscriber<'a, EVENTS>,
    config: StripConfig,

    // Internal state
    buffer: ColorBuffer<MAX_LIGHTS>,
    brightness: u8,
    timers: TimerQueue<Animation, TIMER_CAPACITY>,
}

impl<'a, D, L, const MAX_LIGHTS: usize, const EVENTS: usize> LightStrip<'a, D, L, MAX_LIGHTS, EVENTS>
where
    D: OutputDriver,
    L: BoxLayout,
{
    /// Create a new light strip
    ///
    /// Initializes the driver, applies the default brightness and renders a
    /// dark strip.
    pub fn new(
        mut driver: D,
        config: StripConfig,
        layout: L,
        selections: SelectionSubscriber<'a, EVENTS>,
    ) -> Result<Self, LightError> {
        if config.default_brightness > config.max_brightness {
            return Err(LightError::InvalidBrightness {
                brightness: config.default_brightness,
                max: config.max_brightness,
            });
        }
        let buffer = ColorBuffer::new(config.light_count)?;

        driver.init(config.light_count);
        driver.set_brightness(config.default_brightness);

        let mut strip = Self {
            driver,
            layout,
            selections,
            brightness: config.default_brightness,
            config,
            buffer,
            timers: TimerQueue::new(),
        };
        strip.clear();
        Ok(strip)
    }

    /// Cancel all animations and turn every lamp off
    pub fn clear(&mut self) {
        self.clear_timers();
        self.fill(OFF);
    }

    /// Cancel every pending animation step
    ///
    /// The lamps keep the colors of the last applied step.
    pub fn clear_timers(&mut self) {
        self.timers.cancel_all();
    }

    /// Set the global brightness
    ///
    /// The driver applies it on the next render.
    pub fn set_brightness(&mut self, brightness: u8) -> Result<(), LightError> {
        if brightness > self.config.max_brightness {
            return Err(LightError::InvalidBrightness {
                brightness,
                max: self.config.max_brightness,
            });
        }
        self.brightness = brightness;
        self.driver.set_brightness(brightness);
        Ok(())
    }

    /// Switch on a lamp
    ///
    /// With `clear_other` every other lamp and animation is cleared first.
    pub fn light_on(&mut self, index: usize, color: Rgb, clear_other: bool) -> Result<(), LightError> {
        self.buffer.check_index(index)?;
        if clear_other {
            self.clear();
        }
        self.buffer.set(index, color)?;
        self.render();
        Ok(())
    }

    /// Switch off a lamp
    ///
    /// With `clear_other` every other lamp and animation is cleared first.
    pub fn light_off(&mut self, index: usize, clear_other: bool) -> Result<(), LightError> {
        self.light_on(index, OFF, clear_other)
    }

    /// Toggle a lamp, clearing the rest of the strip
    ///
    /// A dark lamp is lit with `color`, or the selection color if none is given.
    pub fn toggle_light(&mut self, index: usize, color: Option<Rgb>) -> Result<Toggle, LightError> {
        if self.buffer.is_lit(index)? {
            self.light_off(index, true)?;
            Ok(Toggle::TurnedOff)
        } else {
            self.light_on(index, color.unwrap_or(SELECTION), true)?;
            Ok(Toggle::TurnedOn)
        }
    }

    /// Start blinking a lamp
    ///
    /// Preempts every running animation on the strip, including other
    /// blinks. The lamp is always dark once the sequence completes.
    pub fn blink(&mut self, index: usize, options: &BlinkOptions, now: Instant) -> Result<(), LightError> {
        self.buffer.check_index(index)?;
        self.clear_timers();

        let sequence = BlinkSequence {
            index,
            color: options.color.unwrap_or(self.config.selection_color),
            remaining: options.count.unwrap_or(self.config.blink.count),
            period: options.period.unwrap_or(self.config.blink.period),
        };
        #[cfg(feature = "esp32-log")]
        println!("[LightStrip.blink] {:?}", sequence);

        if sequence.is_exhausted() {
            self.schedule(now, sequence.period, Animation::ForceOff { index });
        } else {
            self.blink_step(sequence, now);
        }
        Ok(())
    }

    /// Light every lamp white, keeping running animations
    pub fn full(&mut self) {
        self.fill(WHITE);
    }

    /// Process pending selections and due animation steps
    ///
    /// Steps are replayed at their own deadlines, so a late tick produces
    /// the same frames as a punctual one.
    pub fn tick(&mut self, now: Instant) {
        self.process_selections(now);

        while let Some(expired) = self.timers.pop_expired(now) {
            self.apply(expired.payload, expired.deadline);
        }
    }

    /// Drive the strip forever using the embassy time driver
    pub async fn run(&mut self) {
        loop {
            let now = Instant::now();
            self.tick(now);

            let poll = now + SELECTION_POLL_INTERVAL;
            let wake = self.next_deadline().map_or(poll, |deadline| deadline.min(poll));
            Timer::at(wake).await;
        }
    }

    pub fn light_count(&self) -> usize {
        self.buffer.len()
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn max_brightness(&self) -> u8 {
        self.config.max_brightness
    }

    pub fn config(&self) -> &StripConfig {
        &self.config
    }

    /// Current colors of all lamps
    pub fn colors(&self) -> &[Rgb] {
        self.buffer.as_slice()
    }

    pub fn color(&self, index: usize) -> Result<Rgb, LightError> {
        self.buffer.get(index)
    }

    pub fn is_lit(&self, index: usize) -> Result<bool, LightError> {
        self.buffer.is_lit(index)
    }

    /// Number of animation steps waiting for their timer
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Deadline of the next animation step
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Set every lamp to `color` and render
    pub(crate) fn fill(&mut self, color: Rgb) {
        self.buffer.fill(color);
        self.render();
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut ColorBuffer<MAX_LIGHTS> {
        &mut self.buffer
    }

    /// Schedule an animation step `delay` after `at`
    pub(crate) fn schedule(&mut self, at: Instant, delay: Duration, step: Animation) {
        if let Err(_step) = self.timers.schedule(at, delay, step) {
            #[cfg(feature = "esp32-log")]
            println!("[LightStrip.schedule] timer queue full, dropping {:?}", _step);
        }
    }

    /// Push the buffer to the driver
    pub(crate) fn render(&mut self) {
        #[cfg(feature = "esp32-log")]
        println!("[LightStrip.render] {:?}", self.buffer.as_slice());
        self.driver.write(self.buffer.as_slice());
    }

    /// Drain the selection queue (non-blocking)
    fn process_selections(&mut self, now: Instant) {
        while let Some(event) = self.selections.try_next() {
            self.handle_selection(event, now);
        }
    }

    /// Blink every lamp of the selected box
    ///
    /// Each blink preempts the previous one, only the last lamp keeps
    /// blinking.
    fn handle_selection(&mut self, event: SelectionEvent, now: Instant) {
        #[cfg(feature = "esp32-log")]
        println!("[LightStrip.handle_selection] got pick box pick {:?}", event.id);

        let Some(count) = self.layout.box_lights(event.id).map(<[usize]>::len) else {
            return;
        };
        let options = BlinkOptions {
            color: self.layout.box_color(event.id),
            ..BlinkOptions::default()
        };

        // Lamps are looked up one at a time, `blink` needs `&mut self`
        for position in 0..count {
            let Some(lamp) = self
                .layout
                .box_lights(event.id)
                .and_then(|lights| lights.get(position).copied())
            else {
                break;
            };
            if let Err(_error) = self.blink(lamp, &options, now) {
                #[cfg(feature = "esp32-log")]
                println!("[LightStrip.handle_selection] skipping lamp: {}", _error);
            }
        }
    }

    /// Apply an expired animation step
    fn apply(&mut self, step: Animation, at: Instant) {
        match step {
            Animation::Blink(sequence) => self.blink_step(sequence, at),
            Animation::ForceOff { index } => {
                if let Err(_error) = self.light_off(index, true) {
                    #[cfg(feature = "esp32-log")]
                    println!("[LightStrip.apply] dropping force off: {}", _error);
                }
            }
            Animation::FailureFlash { lit } => self.failure_flash(lit, at),
            Animation::SuccessSweep { index } => self.success_sweep(index, at),
            Animation::SuccessFinish => self.success_finish(),
        }
    }

    /// Toggle the blinking lamp and schedule what comes next
    fn blink_step(&mut self, mut sequence: BlinkSequence, at: Instant) {
        let Ok(toggle) = self.toggle_light(sequence.index, Some(sequence.color)) else {
            return;
        };
        sequence.record(toggle);

        let next = if sequence.is_exhausted() {
            Animation::ForceOff {
                index: sequence.index,
            }
        } else {
            Animation::Blink(sequence)
        };
        self.schedule(at, sequence.period, next);
    }
}
