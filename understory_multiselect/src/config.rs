// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine tunables.

use core::time::Duration;

use thiserror::Error;

/// Default time a press must be held before it becomes a selection gesture.
pub const DEFAULT_LONG_PRESS_DELAY: Duration = Duration::from_millis(250);

/// Default Manhattan distance (logical pixels) a press may travel before it
/// counts as a drag.
pub const DEFAULT_MOVE_THRESHOLD: f64 = 6.0;

/// Per-grid configuration for [`SelectionEngine`](crate::engine::SelectionEngine).
///
/// ```
/// use core::time::Duration;
/// use understory_multiselect::config::SelectionConfig;
///
/// let config = SelectionConfig::default()
///     .with_long_press_delay(Duration::from_millis(400))
///     .with_drag_to_select(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SelectionConfig {
    /// How long a press must be held, without moving past the threshold,
    /// before it starts a selection gesture.
    pub long_press_delay: Duration,
    /// Manhattan distance from the press origin beyond which the press counts as a drag.
    pub move_threshold: f64,
    /// When `true`, a drag past the threshold starts a range gesture
    /// immediately. When `false`, it cancels the press so the host can treat it
    /// as an item drag.
    pub drag_to_select: bool,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            long_press_delay: DEFAULT_LONG_PRESS_DELAY,
            move_threshold: DEFAULT_MOVE_THRESHOLD,
            drag_to_select: false,
        }
    }
}

impl SelectionConfig {
    /// Set the long-press delay.
    pub fn with_long_press_delay(mut self, delay: Duration) -> Self {
        self.long_press_delay = delay;
        self
    }

    /// Set the movement threshold in logical pixels.
    pub fn with_move_threshold(mut self, threshold: f64) -> Self {
        self.move_threshold = threshold;
        self
    }

    /// Enable or disable drag-to-select.
    pub fn with_drag_to_select(mut self, enabled: bool) -> Self {
        self.drag_to_select = enabled;
        self
    }

    /// Check that the values can drive a press tracker.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.long_press_delay.is_zero() {
            return Err(ConfigError::ZeroLongPressDelay);
        }
        if !self.move_threshold.is_finite() || self.move_threshold < 0.0 {
            return Err(ConfigError::InvalidMoveThreshold(self.move_threshold));
        }
        Ok(())
    }
}

/// Rejected [`SelectionConfig`] values.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// A zero delay would turn every plain press into a selection gesture.
    #[error("long-press delay must be greater than zero")]
    ZeroLongPressDelay,
    /// The movement threshold is negative, infinite, or NaN.
    #[error("movement threshold must be finite and non-negative, got {0}")]
    InvalidMoveThreshold(f64),
}
