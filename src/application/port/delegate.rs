// SPDX-License-Identifier: MPL-2.0
//! Host delegate port definition.
//!
//! The host screen implements [`PlayerDelegate`] to hear about user-visible
//! changes. Every method has a no-op default, so a host only overrides the
//! notifications it cares about; an empty `impl PlayerDelegate for X {}` is a
//! valid delegate that observes nothing.
//!
//! The player holds the delegate weakly (see
//! [`Notifier`](crate::player::notifier::Notifier)); methods take `&self`, so
//! hosts that need to mutate use interior mutability.

use crate::domain::ui::Orientation;
use crate::error::PlaybackError;

/// Notifications from the player to its host screen.
pub trait PlayerDelegate {
    /// The player returned to its maximized layout; the host should scroll
    /// its background content to the top so both stay aligned.
    fn scroll_parent_background_to_top(&self) {}

    /// The user dismissed the docked player; the host should remove it.
    fn remove_draggable_video_player(&self) {}

    /// Fullscreen was entered or left and the orientation flipped.
    fn video_player_did_rotate_to_orientation(&self, _orientation: Orientation) {}

    /// The playback engine reported a failure.
    fn video_player_did_fail(&self, _error: &PlaybackError) {}
}
