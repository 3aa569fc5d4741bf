// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the player. Constants are organized by category.
//!
//! # Categories
//!
//! - **Layout**: Frame ratio and paddings for the maximized/minimized layouts
//! - **Transition**: Snap threshold, dismiss distance, fling velocity
//! - **Animation**: Duration of programmatic minimize/maximize animations

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Width to height ratio of the player frame outside fullscreen (16:10).
pub const DEFAULT_WIDTH_HEIGHT_RATIO: f32 = 16.0 / 10.0;

/// Smallest accepted width to height ratio.
pub const MIN_WIDTH_HEIGHT_RATIO: f32 = 0.5;

/// Largest accepted width to height ratio.
pub const MAX_WIDTH_HEIGHT_RATIO: f32 = 4.0;

/// Distance from the top of the parent to the maximized frame.
/// Status bar (45) plus navigation bar (64).
pub const DEFAULT_TOP_PADDING: f32 = 45.0 + 64.0;

/// Distance from the bottom of the screen to the minimized frame.
pub const DEFAULT_BOTTOM_PADDING: f32 = 60.0;

/// Width of the docked (minimized) player.
pub const DEFAULT_MINIMIZED_WIDTH: f32 = 160.0;

/// Smallest accepted minimized width.
pub const MIN_MINIMIZED_WIDTH: f32 = 32.0;

/// Gap between the minimized frame and the trailing screen edge.
pub const DEFAULT_MINIMIZED_TRAILING_PADDING: f32 = 10.0;

/// Upper bound for any padding value read from configuration.
pub const MAX_PADDING: f32 = 1000.0;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Progress above which a released drag commits to the minimized layout.
pub const DEFAULT_MINIMUM_TRANSITION_RATIO: f32 = 1.0 / 3.0;

/// Smallest accepted snap threshold.
pub const MIN_TRANSITION_RATIO: f32 = 0.05;

/// Largest accepted snap threshold.
pub const MAX_TRANSITION_RATIO: f32 = 0.95;

/// Extra scroll distance past the docked position that dismisses the player.
pub const DEFAULT_DISMISS_DISTANCE: f32 = 80.0;

/// Release velocity (units per second) above which direction wins over position.
pub const DEFAULT_FLING_VELOCITY: f32 = 1000.0;

/// Floor for the scroll distance mapped onto a full transition.
pub const MIN_TRANSITION_DISTANCE: f32 = 1.0;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Duration of programmatic minimize/maximize animations (milliseconds).
pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 300;

/// Longest accepted animation duration (milliseconds).
pub const MAX_ANIMATION_DURATION_MS: u64 = 2000;

// ==========================================================================
// Playback Defaults
// ==========================================================================

/// Whether content starts playing as soon as the player is shown.
pub const DEFAULT_AUTOPLAY: bool = true;
