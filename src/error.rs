use core::fmt;

/// Errors reported by the light strip operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightError {
    /// Lamp index is outside of `0..light_count`
    InvalidIndex { index: usize, light_count: usize },
    /// Brightness is above the configured maximum
    InvalidBrightness { brightness: u8, max: u8 },
    /// Strip is longer than the buffer capacity
    TooManyLights { requested: usize, capacity: usize },
}

impl fmt::Display for LightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIndex { index, light_count } => {
                write!(f, "invalid index {index}, strip has {light_count} lights")
            }
            Self::InvalidBrightness { brightness, max } => {
                write!(f, "invalid brightness {brightness}, expected 0..={max}")
            }
            Self::TooManyLights {
                requested,
                capacity,
            } => write!(f, "{requested} lights requested, capacity is {capacity}"),
        }
    }
}

impl core::error::Error for LightError {}
