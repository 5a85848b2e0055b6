//! Per-lamp color buffer
//!
//! Mirrors what the strip should show. The length is fixed when the buffer
//! is created; every access is bounds checked and reported as
//! [`LightError::InvalidIndex`].

use heapless::Vec;

use crate::color::{OFF, Rgb, is_lit};
use crate::error::LightError;

/// Fixed-length color buffer backed by a `heapless::Vec`
///
/// `MAX` is the capacity, the actual length comes from the strip config.
#[derive(Debug, Clone)]
pub struct ColorBuffer<const MAX: usize> {
    colors: Vec<Rgb, MAX>,
}

impl<const MAX: usize> ColorBuffer<MAX> {
    /// Create a buffer of `len` dark lamps
    pub fn new(len: usize) -> Result<Self, LightError> {
        let mut colors = Vec::new();
        colors
            .resize(len, OFF)
            .map_err(|()| LightError::TooManyLights {
                requested: len,
                capacity: MAX,
            })?;
        Ok(Self { colors })
    }

    /// Get the number of lamps
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Validate a lamp index
    pub fn check_index(&self, index: usize) -> Result<(), LightError> {
        if index < self.colors.len() {
            Ok(())
        } else {
            Err(LightError::InvalidIndex {
                index,
                light_count: self.colors.len(),
            })
        }
    }

    /// Get the color of a lamp
    pub fn get(&self, index: usize) -> Result<Rgb, LightError> {
        self.check_index(index)?;
        Ok(self.colors[index])
    }

    /// Set the color of a lamp
    pub fn set(&mut self, index: usize, color: Rgb) -> Result<(), LightError> {
        self.check_index(index)?;
        self.colors[index] = color;
        Ok(())
    }

    /// Check if the lamp is showing any color
    pub fn is_lit(&self, index: usize) -> Result<bool, LightError> {
        self.get(index).map(is_lit)
    }

    /// Set every lamp to the same color
    pub fn fill(&mut self, color: Rgb) {
        for lamp in &mut self.colors {
            *lamp = color;
        }
    }

    pub fn as_slice(&self) -> &[Rgb] {
        &self.colors
    }
}
