// SPDX-License-Identifier: MPL-2.0
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Playback Error: {0}")]
    Playback(#[from] PlaybackError),
}

/// Commands the player sends to the playback engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaybackCommand {
    Load,
    Play,
    Pause,
    Stop,
    EnterFullscreen,
    ExitFullscreen,
    Release,
}

impl fmt::Display for PlaybackCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlaybackCommand::Load => "load",
            PlaybackCommand::Play => "play",
            PlaybackCommand::Pause => "pause",
            PlaybackCommand::Stop => "stop",
            PlaybackCommand::EnterFullscreen => "enter fullscreen",
            PlaybackCommand::ExitFullscreen => "exit fullscreen",
            PlaybackCommand::Release => "release",
        };
        f.write_str(name)
    }
}

/// Failures reported by the external playback engine.
///
/// These never change the layout state; the player forwards them to its
/// delegate as a distinct "playback failed" notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// The content at `url` could not be opened.
    #[error("Failed to load {url}: {reason}")]
    LoadFailed { url: String, reason: String },

    /// The engine rejected a transport or presentation command.
    #[error("Playback command '{command}' failed: {reason}")]
    CommandFailed {
        command: PlaybackCommand,
        reason: String,
    },

    /// The engine was already released.
    #[error("Playback engine has been released")]
    Released,
}

impl PlaybackError {
    /// Shorthand for [`PlaybackError::CommandFailed`].
    pub fn command(command: PlaybackCommand, reason: impl Into<String>) -> Self {
        PlaybackError::CommandFailed {
            command,
            reason: reason.into(),
        }
    }

    /// The command that failed, if the failure is tied to one.
    #[must_use]
    pub fn failed_command(&self) -> Option<PlaybackCommand> {
        match self {
            PlaybackError::LoadFailed { .. } => Some(PlaybackCommand::Load),
            PlaybackError::CommandFailed { command, .. } => Some(*command),
            PlaybackError::Released => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
