//! Output adapter for `smart-leds` drivers
//!
//! Any `SmartLedsWrite` implementation (WS2812 over RMT, SPI, ...) can back
//! the light strip. The global brightness is applied while streaming the
//! frame, the buffer itself always holds unscaled colors.

use smart_leds::{SmartLedsWrite, brightness};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::color::Rgb;

/// Adapter from [`SmartLedsWrite`] to [`OutputDriver`]
pub struct SmartLedsOutput<W> {
    writer: W,
    brightness: u8,
}

impl<W> SmartLedsOutput<W> {
    /// Create a new adapter at full brightness
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            brightness: u8::MAX,
        }
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsOutput<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
{
    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    fn write(&mut self, colors: &[Rgb]) {
        let frame = brightness(colors.iter().copied(), self.brightness);
        if self.writer.write(frame).is_err() {
            #[cfg(feature = "esp32-log")]
            println!("[SmartLedsOutput.write] failed to write frame");
        }
    }
}
