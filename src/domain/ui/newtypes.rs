// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for player values,
//! ensuring they are always within valid ranges.

use crate::config::defaults::{
    DEFAULT_ANIMATION_DURATION_MS, DEFAULT_MINIMUM_TRANSITION_RATIO, MAX_ANIMATION_DURATION_MS,
    MAX_TRANSITION_RATIO, MIN_TRANSITION_RATIO,
};
use std::time::Duration;

// =============================================================================
// Progress
// =============================================================================

/// Interpolation position between the maximized (0.0) and minimized (1.0)
/// layouts, guaranteed to be within `[0, 1]`.
///
/// Out-of-range input is clamped rather than rejected, and `NaN` collapses to
/// the maximized end so a bad gesture sample can never poison the state.
///
/// # Example
///
/// ```
/// use draggable_player::domain::ui::Progress;
///
/// assert_eq!(Progress::new(1.5).value(), 1.0);
/// assert_eq!(Progress::new(-0.2).value(), 0.0);
/// assert_eq!(Progress::new(0.25).value(), 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Progress(f32);

impl Progress {
    /// Fully maximized layout.
    pub const MAXIMIZED: Self = Self(0.0);

    /// Fully minimized layout.
    pub const MINIMIZED: Self = Self(1.0);

    /// Creates a new progress value, clamping to `[0, 1]`.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::MAXIMIZED;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Returns the raw ratio.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true at the maximized bound.
    #[must_use]
    pub fn is_maximized(self) -> bool {
        self.0 <= 0.0
    }

    /// Returns true at the minimized bound.
    #[must_use]
    pub fn is_minimized(self) -> bool {
        self.0 >= 1.0
    }

    /// Linearly blends `from` toward `to` by this progress.
    #[must_use]
    pub fn lerp(self, from: f32, to: f32) -> f32 {
        from + (to - from) * self.0
    }
}

// =============================================================================
// SnapThreshold
// =============================================================================

/// Progress threshold deciding whether a released drag minimizes or cancels.
///
/// Kept strictly inside `(0, 1)` so both outcomes remain reachable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapThreshold(f32);

impl SnapThreshold {
    /// Creates a new threshold, clamping to the supported range.
    #[must_use]
    pub fn new(ratio: f32) -> Self {
        if ratio.is_nan() {
            return Self::default();
        }
        Self(ratio.clamp(MIN_TRANSITION_RATIO, MAX_TRANSITION_RATIO))
    }

    /// Returns the raw ratio.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true if a release at `progress` should commit to minimized.
    ///
    /// Strictly greater: a release exactly on the threshold cancels.
    #[must_use]
    pub fn commits_to_minimized(self, progress: Progress) -> bool {
        progress.value() > self.0
    }
}

impl Default for SnapThreshold {
    fn default() -> Self {
        Self(DEFAULT_MINIMUM_TRANSITION_RATIO)
    }
}

// =============================================================================
// AnimationDuration
// =============================================================================

/// Duration of programmatic transitions, capped at
/// [`MAX_ANIMATION_DURATION_MS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationDuration(u64);

impl AnimationDuration {
    /// Creates a new duration in milliseconds, clamping to the valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.min(MAX_ANIMATION_DURATION_MS))
    }

    /// Returns the duration in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the value as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Returns true when animations complete instantly.
    #[must_use]
    pub fn is_instant(self) -> bool {
        self.0 == 0
    }
}

impl Default for AnimationDuration {
    fn default() -> Self {
        Self(DEFAULT_ANIMATION_DURATION_MS)
    }
}

// =============================================================================
// Tests
// =============================================================================
