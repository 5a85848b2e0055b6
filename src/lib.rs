#![no_std]

pub mod animation;
pub mod buffer;
pub mod color;
pub mod config;
pub mod error;
pub mod event;
pub mod indicator;
pub mod output;
pub mod strip;
pub mod timer;

pub use animation::{BlinkOptions, Toggle};
pub use config::{BlinkConfig, BoxEntry, BoxId, BoxLayout, NoBoxes, StaticBoxLayout, StripConfig};
pub use error::LightError;
pub use event::{SelectionChannel, SelectionPublisher, SelectionSubscriber};
pub use output::SmartLedsOutput;
pub use strip::LightStrip;
pub use timer::{TimerHandle, TimerQueue};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The light strip is generic over this trait.
pub trait OutputDriver {
    /// Prepare the hardware for a strip of `light_count` lamps
    fn init(&mut self, _light_count: usize) {}

    /// Set the global brightness used for the next frames
    fn set_brightness(&mut self, brightness: u8);

    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
