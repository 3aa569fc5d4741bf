// SPDX-License-Identifier: MPL-2.0
//! Playback engine port definition.
//!
//! This module defines the [`PlaybackEngine`] trait the player commands.
//! Decoding, buffering, audio sessions and rendering all live behind it;
//! the player only positions the surface and sends discrete commands.
//!
//! # Design Notes
//!
//! - Methods are not `async` - a networked engine queues work internally and
//!   reports late failures through
//!   [`DraggableVideoPlayer::report_playback_failure`](crate::player::DraggableVideoPlayer::report_playback_failure)
//! - No `Send` bound: the player lives on the UI thread
//! - Uses domain types only (`Url`, `PlaybackError`)

use crate::error::PlaybackError;
use url::Url;

// =============================================================================
// PlaybackEngine Trait
// =============================================================================

/// Port for the external media playback engine.
///
/// # Lifecycle
///
/// 1. `load()` content
/// 2. `play()` / `pause()` / `stop()` as the user interacts
/// 3. `enter_fullscreen()` / `exit_fullscreen()` follow the layout state
/// 4. `release()` once, when the player is cleaned up
///
/// # Example
///
/// ```ignore
/// use draggable_player::application::port::PlaybackEngine;
///
/// fn restart(engine: &mut impl PlaybackEngine, url: &url::Url) {
///     if engine.stop().and_then(|()| engine.load(url)).is_ok() {
///         let _ = engine.play();
///     }
/// }
/// ```
pub trait PlaybackEngine {
    /// Replaces the current content with the media at `url`.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::LoadFailed`] if the content cannot be opened.
    fn load(&mut self, url: &Url) -> Result<(), PlaybackError>;

    /// Starts or resumes playback.
    fn play(&mut self) -> Result<(), PlaybackError>;

    /// Pauses at the current position.
    fn pause(&mut self) -> Result<(), PlaybackError>;

    /// Stops playback and rewinds.
    fn stop(&mut self) -> Result<(), PlaybackError>;

    /// Switches the engine's presentation to fullscreen.
    fn enter_fullscreen(&mut self) -> Result<(), PlaybackError>;

    /// Leaves fullscreen presentation.
    fn exit_fullscreen(&mut self) -> Result<(), PlaybackError>;

    /// Frees all playback resources. Called at most once by the player.
    fn release(&mut self) -> Result<(), PlaybackError>;
}
