// SPDX-License-Identifier: MPL-2.0
//! Playback state as last commanded by the player.
//!
//! This tracks what the player asked the engine to do, not what the engine
//! reports; buffering and decoding progress stay on the engine side.

/// Represents the last playback command accepted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Nothing playing (never started, stopped, or released).
    #[default]
    Stopped,
    /// Content is currently playing.
    Playing,
    /// Content is paused at its current position.
    Paused,
}

impl PlaybackState {
    /// Returns true if content is currently playing.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Returns true if content is paused.
    #[must_use]
    pub fn is_paused(self) -> bool {
        matches!(self, Self::Paused)
    }

    /// Returns true if nothing is playing.
    #[must_use]
    pub fn is_stopped(self) -> bool {
        matches!(self, Self::Stopped)
    }
}
