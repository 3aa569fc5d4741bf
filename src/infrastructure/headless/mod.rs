// SPDX-License-Identifier: MPL-2.0
//! Headless adapter implementing the [`PlaybackEngine`] port trait.
//!
//! This module provides [`HeadlessEngine`], an engine that renders nothing.
//! It logs and records every command it receives, which makes it the engine
//! behind the demo host and the player's tests.
//!
//! # Design Notes
//!
//! - Commands are recorded in order, including ones that failed
//! - A failure can be scripted for the next occurrence of a command
//! - After `release()` every command fails with [`PlaybackError::Released`]
//!
//! [`PlaybackEngine`]: crate::application::port::PlaybackEngine

use crate::application::port::PlaybackEngine;
use crate::error::{PlaybackCommand, PlaybackError};
use url::Url;

/// Engine that records commands instead of playing media.
///
/// # Example
///
/// ```
/// use draggable_player::application::port::PlaybackEngine;
/// use draggable_player::error::PlaybackCommand;
/// use draggable_player::infrastructure::headless::HeadlessEngine;
///
/// let mut engine = HeadlessEngine::new();
/// let url = url::Url::parse("https://example.com/clip.mp4").unwrap();
/// engine.load(&url).unwrap();
/// engine.play().unwrap();
///
/// assert!(engine.is_playing());
/// assert_eq!(engine.commands(), &[PlaybackCommand::Load, PlaybackCommand::Play]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct HeadlessEngine {
    loaded_url: Option<Url>,
    playing: bool,
    fullscreen: bool,
    released: bool,
    commands: Vec<PlaybackCommand>,
    scripted_failure: Option<(PlaybackCommand, String)>,
}

impl HeadlessEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next `command` fail with `reason`.
    pub fn fail_next(&mut self, command: PlaybackCommand, reason: impl Into<String>) {
        self.scripted_failure = Some((command, reason.into()));
    }

    /// Every command received so far, in order.
    #[must_use]
    pub fn commands(&self) -> &[PlaybackCommand] {
        &self.commands
    }

    #[must_use]
    pub fn loaded_url(&self) -> Option<&Url> {
        self.loaded_url.as_ref()
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    #[must_use]
    pub fn is_released(&self) -> bool {
        self.released
    }

    fn accept(&mut self, command: PlaybackCommand) -> Result<(), PlaybackError> {
        self.commands.push(command);
        log::debug!("headless engine: {command}");

        if self.released {
            return Err(PlaybackError::Released);
        }
        match self.scripted_failure.take() {
            Some((failing, reason)) if failing == command => {
                log::warn!("headless engine: scripted failure for {command}: {reason}");
                Err(match command {
                    PlaybackCommand::Load => PlaybackError::LoadFailed {
                        url: self
                            .loaded_url
                            .as_ref()
                            .map(Url::to_string)
                            .unwrap_or_default(),
                        reason,
                    },
                    _ => PlaybackError::command(command, reason),
                })
            }
            other => {
                self.scripted_failure = other;
                Ok(())
            }
        }
    }
}

impl PlaybackEngine for HeadlessEngine {
    fn load(&mut self, url: &Url) -> Result<(), PlaybackError> {
        self.loaded_url = Some(url.clone());
        self.accept(PlaybackCommand::Load)?;
        self.playing = false;
        Ok(())
    }

    fn play(&mut self) -> Result<(), PlaybackError> {
        self.accept(PlaybackCommand::Play)?;
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) -> Result<(), PlaybackError> {
        self.accept(PlaybackCommand::Pause)?;
        self.playing = false;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), PlaybackError> {
        self.accept(PlaybackCommand::Stop)?;
        self.playing = false;
        Ok(())
    }

    fn enter_fullscreen(&mut self) -> Result<(), PlaybackError> {
        self.accept(PlaybackCommand::EnterFullscreen)?;
        self.fullscreen = true;
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> Result<(), PlaybackError> {
        self.accept(PlaybackCommand::ExitFullscreen)?;
        self.fullscreen = false;
        Ok(())
    }

    fn release(&mut self) -> Result<(), PlaybackError> {
        self.accept(PlaybackCommand::Release)?;
        self.released = true;
        self.playing = false;
        self.fullscreen = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clip() -> Url {
        Url::parse("https://example.com/clip.mp4").unwrap()
    }

    #[test]
    fn records_commands_in_order() {
        let mut engine = HeadlessEngine::new();
        engine.load(&clip()).unwrap();
        engine.play().unwrap();
        engine.enter_fullscreen().unwrap();
        engine.pause().unwrap();
        assert_eq!(
            engine.commands(),
            &[
                PlaybackCommand::Load,
                PlaybackCommand::Play,
                PlaybackCommand::EnterFullscreen,
                PlaybackCommand::Pause,
            ]
        );
        assert!(engine.is_fullscreen());
        assert!(!engine.is_playing());
    }

    #[test]
    fn scripted_failure_hits_only_matching_command() {
        let mut engine = HeadlessEngine::new();
        engine.fail_next(PlaybackCommand::Play, "decoder busy");
        engine.load(&clip()).unwrap();

        let err = engine.play().unwrap_err();
        assert_eq!(
            err,
            PlaybackError::command(PlaybackCommand::Play, "decoder busy")
        );
        assert!(!engine.is_playing());

        // Failure is consumed
        engine.play().unwrap();
        assert!(engine.is_playing());
    }

    #[test]
    fn scripted_load_failure_names_url() {
        let mut engine = HeadlessEngine::new();
        engine.fail_next(PlaybackCommand::Load, "not found");
        let err = engine.load(&clip()).unwrap_err();
        assert_eq!(
            err,
            PlaybackError::LoadFailed {
                url: clip().to_string(),
                reason: "not found".to_string(),
            }
        );
    }

    #[test]
    fn released_engine_rejects_commands() {
        let mut engine = HeadlessEngine::new();
        engine.release().unwrap();
        assert!(engine.is_released());
        assert_eq!(engine.play(), Err(PlaybackError::Released));
        assert_eq!(engine.release(), Err(PlaybackError::Released));
    }
}
