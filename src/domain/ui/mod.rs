// SPDX-License-Identifier: MPL-2.0
//! Player layout domain types.
//!
//! This module contains the layout state, geometry and value objects that
//! are independent of any presentation framework.

pub mod geometry;
pub mod newtypes;
pub mod state;

// Re-export commonly used types
pub use geometry::{frame_for, fullscreen_frame, LayoutMetrics, PlayerFrame, ScreenBounds};
pub use newtypes::{AnimationDuration, Progress, SnapThreshold};
pub use state::{Direction, Orientation, PlayerState, RestingState};
