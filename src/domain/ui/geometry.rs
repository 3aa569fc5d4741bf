// SPDX-License-Identifier: MPL-2.0
//! Player frame geometry.
//!
//! Every frame is recomputed from a [`PlayerState`] and the current screen
//! bounds; nothing here keeps history. That lets the host re-derive the frame
//! after a rotation or resize without replaying the gesture that got it there.

use super::newtypes::Progress;
use super::state::{Orientation, PlayerState};
use crate::config::defaults::{
    DEFAULT_BOTTOM_PADDING, DEFAULT_MINIMIZED_TRAILING_PADDING, DEFAULT_MINIMIZED_WIDTH,
    DEFAULT_TOP_PADDING, DEFAULT_WIDTH_HEIGHT_RATIO, MAX_PADDING, MAX_WIDTH_HEIGHT_RATIO,
    MIN_MINIMIZED_WIDTH, MIN_TRANSITION_DISTANCE, MIN_WIDTH_HEIGHT_RATIO,
};

// =============================================================================
// PlayerFrame
// =============================================================================

/// Rectangle occupied by the player, in host coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlayerFrame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PlayerFrame {
    #[must_use]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Component-wise linear blend from `self` to `target`.
    ///
    /// The bounds return the endpoint frames exactly.
    #[must_use]
    pub fn lerp(self, target: Self, progress: Progress) -> Self {
        if progress.is_maximized() {
            return self;
        }
        if progress.is_minimized() {
            return target;
        }
        Self {
            x: progress.lerp(self.x, target.x),
            y: progress.lerp(self.y, target.y),
            width: progress.lerp(self.width, target.width),
            height: progress.lerp(self.height, target.height),
        }
    }

    /// Bottom edge.
    #[must_use]
    pub fn max_y(self) -> f32 {
        self.y + self.height
    }
}

// =============================================================================
// ScreenBounds
// =============================================================================

/// Size of the host surface the player is laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenBounds {
    pub width: f32,
    pub height: f32,
}

impl ScreenBounds {
    /// Creates new bounds; negative or `NaN` sizes collapse to zero.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    /// Returns true when the surface is taller than it is wide.
    #[must_use]
    pub fn is_portrait(self) -> bool {
        self.height > self.width
    }

    /// Same bounds with width and height exchanged.
    #[must_use]
    pub fn swapped(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

fn sanitize(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.max(0.0)
    }
}

// =============================================================================
// LayoutMetrics
// =============================================================================

/// Tunables for the maximized and minimized layouts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    width_height_ratio: f32,
    top_padding: f32,
    bottom_padding: f32,
    minimized_width: f32,
    minimized_trailing_padding: f32,
}

impl LayoutMetrics {
    /// Creates layout metrics, clamping each value into its supported range.
    #[must_use]
    pub fn new(
        width_height_ratio: f32,
        top_padding: f32,
        bottom_padding: f32,
        minimized_width: f32,
        minimized_trailing_padding: f32,
    ) -> Self {
        let ratio = if width_height_ratio.is_nan() {
            DEFAULT_WIDTH_HEIGHT_RATIO
        } else {
            width_height_ratio.clamp(MIN_WIDTH_HEIGHT_RATIO, MAX_WIDTH_HEIGHT_RATIO)
        };
        Self {
            width_height_ratio: ratio,
            top_padding: sanitize(top_padding).min(MAX_PADDING),
            bottom_padding: sanitize(bottom_padding).min(MAX_PADDING),
            minimized_width: sanitize(minimized_width).max(MIN_MINIMIZED_WIDTH),
            minimized_trailing_padding: sanitize(minimized_trailing_padding).min(MAX_PADDING),
        }
    }

    #[must_use]
    pub fn width_height_ratio(&self) -> f32 {
        self.width_height_ratio
    }

    #[must_use]
    pub fn top_padding(&self) -> f32 {
        self.top_padding
    }

    #[must_use]
    pub fn bottom_padding(&self) -> f32 {
        self.bottom_padding
    }

    #[must_use]
    pub fn minimized_width(&self) -> f32 {
        self.minimized_width
    }

    /// Full width, fixed ratio, below the top chrome.
    #[must_use]
    pub fn maximized_frame(&self, bounds: ScreenBounds) -> PlayerFrame {
        let width = bounds.width;
        PlayerFrame::new(
            0.0,
            self.top_padding,
            width,
            width / self.width_height_ratio,
        )
    }

    /// Small fixed-ratio frame docked to the bottom trailing corner.
    #[must_use]
    pub fn minimized_frame(&self, bounds: ScreenBounds) -> PlayerFrame {
        let width = self.minimized_width.min(bounds.width);
        let height = width / self.width_height_ratio;
        let x = (bounds.width - width - self.minimized_trailing_padding).max(0.0);
        let y = bounds.height - self.bottom_padding - height;
        PlayerFrame::new(x, y, width, height)
    }

    /// Scroll distance that carries the player through a whole transition.
    ///
    /// Equal to the height lost between the two layouts, floored so that a
    /// degenerate screen never maps a drag onto an infinite ratio.
    #[must_use]
    pub fn transition_distance(&self, bounds: ScreenBounds) -> f32 {
        let delta = self.maximized_frame(bounds).height - self.minimized_frame(bounds).height;
        delta.max(MIN_TRANSITION_DISTANCE)
    }
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            width_height_ratio: DEFAULT_WIDTH_HEIGHT_RATIO,
            top_padding: DEFAULT_TOP_PADDING,
            bottom_padding: DEFAULT_BOTTOM_PADDING,
            minimized_width: DEFAULT_MINIMIZED_WIDTH,
            minimized_trailing_padding: DEFAULT_MINIMIZED_TRAILING_PADDING,
        }
    }
}

// =============================================================================
// Frame computation
// =============================================================================

/// Whole-screen frame, rotated to match `orientation`.
#[must_use]
pub fn fullscreen_frame(bounds: ScreenBounds, orientation: Orientation) -> PlayerFrame {
    let bounds = if orientation.is_landscape() && bounds.is_portrait() {
        bounds.swapped()
    } else {
        bounds
    };
    PlayerFrame::new(0.0, 0.0, bounds.width, bounds.height)
}

/// Computes the player frame for `state`.
///
/// Pure: identical inputs always give identical output.
#[must_use]
pub fn frame_for(
    state: PlayerState,
    bounds: ScreenBounds,
    orientation: Orientation,
    layout: &LayoutMetrics,
) -> PlayerFrame {
    match state {
        PlayerState::Maximized => layout.maximized_frame(bounds),
        PlayerState::Minimized => layout.minimized_frame(bounds),
        PlayerState::Transitioning { progress, .. } => layout
            .maximized_frame(bounds)
            .lerp(layout.minimized_frame(bounds), progress),
        PlayerState::FullScreen { .. } => fullscreen_frame(bounds, orientation),
    }
}

// =============================================================================
// Tests
// =============================================================================
