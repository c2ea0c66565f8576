//! Player configuration.
//!
//! The defaults describe the reference encoding: a 40x45 grid, muscle
//! samples scaled to degrees by 180 and root translation scaled by 2.

use motion_types::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, MotionError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Encoding parameters for a [`MotionPlayer`](crate::MotionPlayer).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerConfig {
    /// Grid width in samples.
    pub grid_width: usize,
    /// Grid height in samples.
    pub grid_height: usize,
    /// Degrees per unit of a muscle sample.
    pub rotation_scale: f32,
    /// Encoding units per unit of a root translation sample.
    pub translation_scale: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            rotation_scale: 180.0,
            translation_scale: 2.0,
        }
    }
}

impl PlayerConfig {
    /// Create a config for a grid of the given size with default scales.
    #[must_use]
    pub fn with_grid(grid_width: usize, grid_height: usize) -> Self {
        Self {
            grid_width,
            grid_height,
            ..Default::default()
        }
    }

    /// Set the muscle sample scale.
    #[must_use]
    pub fn rotation_scale(mut self, rotation_scale: f32) -> Self {
        self.rotation_scale = rotation_scale;
        self
    }

    /// Set the root translation sample scale.
    #[must_use]
    pub fn translation_scale(mut self, translation_scale: f32) -> Self {
        self.translation_scale = translation_scale;
        self
    }

    /// Number of slots in the configured grid.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.grid_width * self.grid_height
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MotionError::InvalidConfig`] for an empty grid or a
    /// zero or non-finite scale.
    pub fn validate(&self) -> Result<()> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(MotionError::invalid_config(format!(
                "grid must be non-empty, got {}x{}",
                self.grid_width, self.grid_height
            )));
        }

        for (name, scale) in [
            ("rotation_scale", self.rotation_scale),
            ("translation_scale", self.translation_scale),
        ] {
            if !scale.is_finite() || scale == 0.0 {
                return Err(MotionError::invalid_config(format!(
                    "{name} must be finite and non-zero, got {scale}"
                )));
            }
        }

        Ok(())
    }
}
