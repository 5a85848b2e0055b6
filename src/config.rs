//! Strip configuration
//!
//! Values are provided by the application, usually as `const` items.
//! Nothing here is loaded at runtime.

use embassy_time::Duration;

use crate::color::{Rgb, SELECTION};

/// Identifier of a pick box carried by selection events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoxId(pub u16);

/// Defaults for blink requests that omit parameters
#[derive(Debug, Clone, Copy)]
pub struct BlinkConfig {
    /// Number of on-phases per blink
    pub count: u16,
    /// Time between two toggles
    pub period: Duration,
}

/// Configuration for the light strip
#[derive(Debug, Clone)]
pub struct StripConfig {
    /// Number of lamps on the strip
    pub light_count: usize,
    /// Brightness applied on startup
    pub default_brightness: u8,
    /// Upper bound accepted by `set_brightness`
    pub max_brightness: u8,
    /// Defaults for blinks started without explicit parameters
    pub blink: BlinkConfig,
    /// Color used when a blink request has none
    pub selection_color: Rgb,
}

impl StripConfig {
    pub const DEFAULT: Self = Self {
        light_count: 30,
        default_brightness: 100,
        max_brightness: 255,
        blink: BlinkConfig {
            count: 10,
            period: Duration::from_millis(300),
        },
        selection_color: SELECTION,
    };

    /// Same configuration for a strip of `light_count` lamps
    #[must_use]
    pub const fn with_light_count(mut self, light_count: usize) -> Self {
        self.light_count = light_count;
        self
    }
}

impl Default for StripConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Lookup of the lamps and color assigned to a pick box
pub trait BoxLayout {
    /// Lamp indices of the box, `None` for unknown boxes
    fn box_lights(&self, id: BoxId) -> Option<&[usize]>;

    /// Color of the box, `None` to use the strip default
    fn box_color(&self, id: BoxId) -> Option<Rgb>;
}

/// One row of a [`StaticBoxLayout`]
#[derive(Debug, Clone, Copy)]
pub struct BoxEntry<'a> {
    pub id: BoxId,
    pub lights: &'a [usize],
    pub color: Option<Rgb>,
}

/// Box layout backed by a slice, suitable for `static` tables
#[derive(Debug, Clone, Copy)]
pub struct StaticBoxLayout<'a> {
    entries: &'a [BoxEntry<'a>],
}

impl<'a> StaticBoxLayout<'a> {
    pub const fn new(entries: &'a [BoxEntry<'a>]) -> Self {
        Self { entries }
    }

    fn find(&self, id: BoxId) -> Option<&BoxEntry<'a>> {
        self.entries.iter().find(|entry| entry.id == id)
    }
}

impl BoxLayout for StaticBoxLayout<'_> {
    fn box_lights(&self, id: BoxId) -> Option<&[usize]> {
        self.find(id).map(|entry| entry.lights)
    }

    fn box_color(&self, id: BoxId) -> Option<Rgb> {
        self.find(id).and_then(|entry| entry.color)
    }
}

/// Layout without any boxes, every selection is ignored
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBoxes;

impl BoxLayout for NoBoxes {
    fn box_lights(&self, _id: BoxId) -> Option<&[usize]> {
        None
    }

    fn box_color(&self, _id: BoxId) -> Option<Rgb> {
        None
    }
}
