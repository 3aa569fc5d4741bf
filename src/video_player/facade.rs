// SPDX-License-Identifier: MPL-2.0
//! Playback facade over an external engine.
//!
//! The facade owns the engine by composition and exposes only the commands
//! the overlay needs. It tracks the content URL and the last accepted
//! transport command; it knows nothing about layout.

use crate::application::port::PlaybackEngine;
use crate::domain::video::PlaybackState;
use crate::error::PlaybackError;
use url::Url;

type CommandResult = Result<(), PlaybackError>;

/// Thin command wrapper around a [`PlaybackEngine`].
#[derive(Debug)]
pub struct PlaybackFacade<E: PlaybackEngine> {
    engine: E,
    content_url: Url,
    state: PlaybackState,
    autoplay: bool,
    fullscreen: bool,
    cleaned: bool,
}

impl<E: PlaybackEngine> PlaybackFacade<E> {
    /// Wraps `engine`; nothing is sent to it until [`Self::load`].
    pub fn new(engine: E, content_url: Url, autoplay: bool) -> Self {
        Self {
            engine,
            content_url,
            state: PlaybackState::Stopped,
            autoplay,
            fullscreen: false,
            cleaned: false,
        }
    }

    /// Loads the current content URL into the engine.
    pub fn load(&mut self) -> CommandResult {
        if self.cleaned {
            return Ok(());
        }
        log::info!("loading {}", self.content_url);
        self.engine.load(&self.content_url)?;
        self.state = PlaybackState::Stopped;
        Ok(())
    }

    /// Swaps the content, resuming playback if it was playing.
    ///
    /// The URL is replaced even if the engine fails to load it, so a retry
    /// targets the new content.
    pub fn change_content_url(&mut self, url: Url) -> CommandResult {
        if self.cleaned {
            return Ok(());
        }
        let was_playing = self.state.is_playing();
        if !self.state.is_stopped() {
            self.engine.stop()?;
            self.state = PlaybackState::Stopped;
        }
        self.content_url = url;
        self.load()?;
        if was_playing {
            self.play()?;
        }
        Ok(())
    }

    /// Starts playback if autoplay is on and nothing is playing yet.
    pub fn autoplay(&mut self) -> CommandResult {
        if self.autoplay && !self.state.is_playing() {
            return self.play();
        }
        Ok(())
    }

    pub fn play(&mut self) -> CommandResult {
        if self.cleaned {
            return Ok(());
        }
        self.engine.play()?;
        self.state = PlaybackState::Playing;
        Ok(())
    }

    pub fn pause(&mut self) -> CommandResult {
        if self.cleaned || !self.state.is_playing() {
            return Ok(());
        }
        self.engine.pause()?;
        self.state = PlaybackState::Paused;
        Ok(())
    }

    pub fn stop(&mut self) -> CommandResult {
        if self.cleaned || self.state.is_stopped() {
            return Ok(());
        }
        self.engine.stop()?;
        self.state = PlaybackState::Stopped;
        Ok(())
    }

    pub fn enter_fullscreen(&mut self) -> CommandResult {
        if self.cleaned || self.fullscreen {
            return Ok(());
        }
        self.engine.enter_fullscreen()?;
        self.fullscreen = true;
        Ok(())
    }

    pub fn exit_fullscreen(&mut self) -> CommandResult {
        if self.cleaned || !self.fullscreen {
            return Ok(());
        }
        self.engine.exit_fullscreen()?;
        self.fullscreen = false;
        Ok(())
    }

    /// Stops and releases the engine. Safe to call repeatedly; only the
    /// first call reaches the engine.
    pub fn clean(&mut self) -> CommandResult {
        if self.cleaned {
            return Ok(());
        }
        self.cleaned = true;
        let stopped = if self.state.is_stopped() {
            Ok(())
        } else {
            self.engine.stop()
        };
        self.state = PlaybackState::Stopped;
        self.fullscreen = false;
        let released = self.engine.release();
        stopped.and(released)
    }

    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    #[must_use]
    pub fn content_url(&self) -> &Url {
        &self.content_url
    }

    #[must_use]
    pub fn is_cleaned(&self) -> bool {
        self.cleaned
    }

    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlaybackCommand;
    use crate::infrastructure::headless::HeadlessEngine;

    fn url(path: &str) -> Url {
        Url::parse(&format!("https://media.example.com/{path}")).unwrap()
    }

    fn loaded(autoplay: bool) -> PlaybackFacade<HeadlessEngine> {
        let mut facade = PlaybackFacade::new(HeadlessEngine::new(), url("a.mp4"), autoplay);
        facade.load().unwrap();
        facade
    }

    #[test]
    fn load_sends_current_url() {
        let facade = loaded(false);
        assert_eq!(facade.engine().loaded_url(), Some(&url("a.mp4")));
        assert!(facade.state().is_stopped());
    }

    #[test]
    fn transport_commands_track_state() {
        let mut facade = loaded(false);
        facade.play().unwrap();
        assert!(facade.state().is_playing());
        facade.pause().unwrap();
        assert!(facade.state().is_paused());
        facade.stop().unwrap();
        assert!(facade.state().is_stopped());
    }

    #[test]
    fn pause_and_stop_skip_redundant_commands() {
        let mut facade = loaded(false);
        facade.pause().unwrap();
        facade.stop().unwrap();
        assert_eq!(facade.engine().commands(), &[PlaybackCommand::Load]);
    }

    #[test]
    fn autoplay_only_when_enabled() {
        let mut off = loaded(false);
        off.autoplay().unwrap();
        assert!(off.state().is_stopped());

        let mut on = loaded(true);
        on.autoplay().unwrap();
        assert!(on.state().is_playing());
    }

    #[test]
    fn change_content_url_resumes_playback() {
        let mut facade = loaded(false);
        facade.play().unwrap();
        facade.change_content_url(url("b.mp4")).unwrap();

        assert_eq!(facade.content_url(), &url("b.mp4"));
        assert_eq!(facade.engine().loaded_url(), Some(&url("b.mp4")));
        assert!(facade.state().is_playing());
        assert_eq!(
            facade.engine().commands(),
            &[
                PlaybackCommand::Load,
                PlaybackCommand::Play,
                PlaybackCommand::Stop,
                PlaybackCommand::Load,
                PlaybackCommand::Play,
            ]
        );
    }

    #[test]
    fn change_content_url_keeps_paused_content_stopped() {
        let mut facade = loaded(false);
        facade.play().unwrap();
        facade.pause().unwrap();
        facade.change_content_url(url("b.mp4")).unwrap();
        assert!(facade.state().is_stopped());
    }

    #[test]
    fn failed_load_still_records_new_url() {
        let mut facade = loaded(false);
        facade.engine_mut().fail_next(PlaybackCommand::Load, "404");
        let result = facade.change_content_url(url("missing.mp4"));
        assert!(matches!(result, Err(PlaybackError::LoadFailed { .. })));
        assert_eq!(facade.content_url(), &url("missing.mp4"));
    }

    #[test]
    fn fullscreen_commands_are_edge_triggered() {
        let mut facade = loaded(false);
        facade.enter_fullscreen().unwrap();
        facade.enter_fullscreen().unwrap();
        facade.exit_fullscreen().unwrap();
        facade.exit_fullscreen().unwrap();
        assert_eq!(
            facade.engine().commands(),
            &[
                PlaybackCommand::Load,
                PlaybackCommand::EnterFullscreen,
                PlaybackCommand::ExitFullscreen,
            ]
        );
    }

    #[test]
    fn clean_is_idempotent() {
        let mut facade = loaded(false);
        facade.play().unwrap();
        facade.clean().unwrap();
        facade.clean().unwrap();

        assert!(facade.is_cleaned());
        assert!(facade.engine().is_released());
        assert_eq!(
            facade
                .engine()
                .commands()
                .iter()
                .filter(|c| **c == PlaybackCommand::Release)
                .count(),
            1
        );
    }

    #[test]
    fn commands_after_clean_are_no_ops() {
        let mut facade = loaded(false);
        facade.clean().unwrap();
        let before = facade.engine().commands().len();
        facade.play().unwrap();
        facade.change_content_url(url("b.mp4")).unwrap();
        facade.enter_fullscreen().unwrap();
        assert_eq!(facade.engine().commands().len(), before);
        assert!(facade.state().is_stopped());
    }
}
