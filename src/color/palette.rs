//! Fixed status palette

use super::{Rgb, rgb_from_u32};

/// Lamp is dark
pub const OFF: Rgb = rgb_from_u32(0x00_00_00);
/// System failure
pub const RED: Rgb = rgb_from_u32(0xFF_00_00);
/// System ready
pub const GREEN: Rgb = rgb_from_u32(0x00_FF_00);
/// Full strip
pub const WHITE: Rgb = rgb_from_u32(0xFF_FF_FF);
/// Fallback color for toggled and selected lamps
pub const SELECTION: Rgb = rgb_from_u32(0xFF_66_00);
