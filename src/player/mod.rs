// SPDX-License-Identifier: MPL-2.0
//! The draggable video player component.
//!
//! [`DraggableVideoPlayer`] composes the pieces of this module:
//!
//! - [`transition::TransitionMachine`] owns the layout state
//! - [`gesture::ScrollBridge`] turns parent scroll samples into transitions
//! - [`animation::Animation`] drives the presented frame after a commit
//! - [`notifier::Notifier`] forwards user-visible changes to the host
//! - [`PlaybackFacade`] commands the external engine
//!
//! The frame is never stored: [`DraggableVideoPlayer::frame`] derives it from
//! the current state and screen bounds on every call.
//!
//! # Example
//!
//! ```
//! use draggable_player::config::PlayerSettings;
//! use draggable_player::domain::ui::ScreenBounds;
//! use draggable_player::infrastructure::HeadlessEngine;
//! use draggable_player::player::DraggableVideoPlayer;
//!
//! let url = url::Url::parse("https://example.com/clip.mp4").unwrap();
//! let mut player = DraggableVideoPlayer::new(url, HeadlessEngine::new(), &PlayerSettings::default());
//! player.show(ScreenBounds::new(375.0, 667.0));
//!
//! player.parent_scroll_view_did_scroll(500.0);
//! assert!(player.is_minimized());
//! ```

pub mod animation;
pub mod gesture;
pub mod notifier;
pub mod transition;

pub use gesture::GestureEvent;

use crate::application::port::{PlaybackEngine, PlayerDelegate};
use crate::config::PlayerSettings;
use crate::domain::ui::{
    frame_for, AnimationDuration, LayoutMetrics, Orientation, PlayerFrame, PlayerState, Progress,
    RestingState, ScreenBounds,
};
use crate::domain::video::PlaybackState;
use crate::error::PlaybackError;
use crate::video_player::PlaybackFacade;
use animation::Animation;
use gesture::ScrollBridge;
use notifier::Notifier;
use std::rc::Rc;
use std::time::Instant;
use transition::{Outcome, TransitionMachine};
use url::Url;

/// Where the player is in its life, independent of its layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    /// Created but not yet attached to a host surface.
    #[default]
    Hidden,
    /// Attached and reacting to input.
    Shown,
    /// Dismissed by the user; `show` brings it back maximized.
    Removed,
    /// Torn down; every operation is a no-op.
    Cleaned,
}

/// A video overlay that can be dragged between a maximized and a docked
/// minimized layout, and taken fullscreen.
#[derive(Debug)]
pub struct DraggableVideoPlayer<E: PlaybackEngine> {
    machine: TransitionMachine,
    bridge: ScrollBridge,
    facade: PlaybackFacade<E>,
    notifier: Notifier,
    layout: LayoutMetrics,
    bounds: ScreenBounds,
    animation: Option<Animation>,
    animation_duration: AnimationDuration,
    dismiss_distance: f32,
    lifecycle: Lifecycle,
    /// Last layout the player rested in outside fullscreen.
    resting: RestingState,
    last_error: Option<PlaybackError>,
}

impl<E: PlaybackEngine> DraggableVideoPlayer<E> {
    /// Creates a hidden, maximized player and loads `url` into `engine`.
    ///
    /// A load failure does not prevent creation; it is logged and kept
    /// available through [`Self::last_playback_error`].
    pub fn new(url: Url, engine: E, settings: &PlayerSettings) -> Self {
        let mut player = Self {
            machine: TransitionMachine::new(settings.snap_threshold, settings.fling_velocity),
            bridge: ScrollBridge::default(),
            facade: PlaybackFacade::new(engine, url, settings.autoplay),
            notifier: Notifier::default(),
            layout: settings.layout,
            bounds: ScreenBounds::default(),
            animation: None,
            animation_duration: settings.animation_duration,
            dismiss_distance: settings.dismiss_distance,
            lifecycle: Lifecycle::Hidden,
            resting: RestingState::Maximized,
            last_error: None,
        };
        let loaded = player.facade.load();
        player.route(loaded);
        player
    }

    /// Attaches the host delegate. Only a weak reference is kept.
    pub fn set_delegate<D: PlayerDelegate + 'static>(&mut self, delegate: &Rc<D>) {
        if self.is_cleaned() {
            return;
        }
        self.notifier.attach(delegate);
    }

    /// Detaches the host delegate; later notifications are dropped.
    pub fn clear_delegate(&mut self) {
        self.notifier.detach();
    }

    /// Attaches the player to a host surface of size `bounds`.
    ///
    /// Showing after a dismissal starts over maximized and asks the host to
    /// scroll its background back to the top.
    pub fn show(&mut self, bounds: ScreenBounds) {
        match self.lifecycle {
            Lifecycle::Cleaned => return,
            Lifecycle::Shown => {
                self.bounds = bounds;
                return;
            }
            Lifecycle::Removed => {
                self.machine.reset();
                self.bridge.reset();
                self.animation = None;
                self.resting = RestingState::Maximized;
                self.notifier.scroll_parent_background_to_top();
            }
            Lifecycle::Hidden => {}
        }
        log::info!("showing player for {}", self.facade.content_url());
        self.bounds = bounds;
        self.lifecycle = Lifecycle::Shown;
        let started = self.facade.autoplay();
        self.route(started);
    }

    /// Updates the host surface size, for example after a rotation.
    pub fn set_screen_bounds(&mut self, bounds: ScreenBounds) {
        if self.is_cleaned() {
            return;
        }
        self.bounds = bounds;
    }

    /// Replaces the content without touching the layout.
    pub fn change_content_url(&mut self, url: Url) {
        if self.is_cleaned() {
            return;
        }
        let changed = self.facade.change_content_url(url);
        let failed = changed.is_err();
        self.route(changed);
        if !failed && self.is_shown() {
            let started = self.facade.autoplay();
            self.route(started);
        }
    }

    // =========================================================================
    // Gestures
    // =========================================================================

    /// Feeds one absolute offset of the parent scroll surface.
    ///
    /// Dragging the docked player far enough past its resting offset
    /// dismisses it: playback stops and the host is asked to remove it.
    pub fn parent_scroll_view_did_scroll(&mut self, offset: f32) -> GestureEvent {
        if !self.is_shown() {
            return GestureEvent::Ignored;
        }
        let distance = self.layout.transition_distance(self.bounds);
        let event = self
            .bridge
            .on_scroll(offset, &mut self.machine, distance, self.dismiss_distance);

        match event {
            GestureEvent::Moved(_) => self.animation = None,
            GestureEvent::Settled { to, .. } => {
                self.animation = None;
                self.after_settle(to);
            }
            GestureEvent::Dismiss => self.remove(),
            GestureEvent::Ignored => {}
        }
        event
    }

    /// Ends the current drag with the given release velocity.
    ///
    /// Positive velocity points toward the minimized layout. The layout
    /// commits immediately; the presented frame animates to it from `now`.
    pub fn parent_scroll_view_did_end_dragging(&mut self, velocity: f32, now: Instant) -> GestureEvent {
        if !self.is_shown() {
            return GestureEvent::Ignored;
        }
        let event = self.bridge.on_release(velocity, &mut self.machine);
        if let GestureEvent::Settled { from, to } = event {
            self.start_animation(from, to, now);
            self.after_settle(to);
        }
        event
    }

    /// Animates to the docked layout. Returns false if nothing changed.
    pub fn trigger_minimize_animation(&mut self, now: Instant) -> bool {
        self.animate_to(RestingState::Minimized, now)
    }

    /// Animates to the full-width layout. Returns false if nothing changed.
    pub fn trigger_maximize_animation(&mut self, now: Instant) -> bool {
        self.animate_to(RestingState::Maximized, now)
    }

    fn animate_to(&mut self, target: RestingState, now: Instant) -> bool {
        if !self.is_shown() {
            return false;
        }
        let Outcome::Settled { from, to } = self.machine.snap_to(target) else {
            return false;
        };
        // Continue from what is on screen if an animation is still running
        let from = self.animation.map_or(from, |a| a.progress_at(now));
        self.bridge.rebase(to);
        self.start_animation(from, to, now);
        self.after_settle(to);
        true
    }

    fn start_animation(&mut self, from: Progress, to: RestingState, now: Instant) {
        let target = to.progress();
        self.animation = if self.animation_duration.is_instant() || from == target {
            None
        } else {
            Some(Animation::new(from, target, now, self.animation_duration))
        };
    }

    fn after_settle(&mut self, to: RestingState) {
        let previous = std::mem::replace(&mut self.resting, to);
        if previous == RestingState::Minimized && to == RestingState::Maximized {
            // The host scrolls back to the top, so offsets restart from zero
            self.bridge.reset();
            self.notifier.scroll_parent_background_to_top();
        }
    }

    fn remove(&mut self) {
        log::info!("player dismissed by gesture");
        self.animation = None;
        let stopped = self.facade.stop();
        self.route(stopped);
        self.lifecycle = Lifecycle::Removed;
        self.notifier.remove_draggable_video_player();
    }

    // =========================================================================
    // Fullscreen
    // =========================================================================

    /// Enters fullscreen from a resting layout. Returns false if nothing
    /// changed (already fullscreen, mid-drag, or not shown).
    pub fn enter_full_screen(&mut self) -> bool {
        if !self.is_shown() {
            return false;
        }
        let Some(orientation) = self.machine.enter_fullscreen() else {
            return false;
        };
        self.animation = None;
        let entered = self.facade.enter_fullscreen();
        self.route(entered);
        self.notifier
            .video_player_did_rotate_to_orientation(orientation);
        true
    }

    /// Leaves fullscreen, restoring the previous layout. Returns false if
    /// the player was not fullscreen.
    pub fn exit_full_screen(&mut self) -> bool {
        if !self.is_shown() {
            return false;
        }
        let Some(orientation) = self.machine.exit_fullscreen() else {
            return false;
        };
        let exited = self.facade.exit_fullscreen();
        self.route(exited);
        self.notifier
            .video_player_did_rotate_to_orientation(orientation);
        true
    }

    /// Switches fullscreen on or off.
    pub fn toggle_full_screen(&mut self) -> bool {
        if self.is_full_screen() {
            self.exit_full_screen()
        } else {
            self.enter_full_screen()
        }
    }

    // =========================================================================
    // Playback
    // =========================================================================

    pub fn play(&mut self) {
        if self.is_cleaned() {
            return;
        }
        let result = self.facade.play();
        self.route(result);
    }

    pub fn pause(&mut self) {
        if self.is_cleaned() {
            return;
        }
        let result = self.facade.pause();
        self.route(result);
    }

    pub fn stop(&mut self) {
        if self.is_cleaned() {
            return;
        }
        let result = self.facade.stop();
        self.route(result);
    }

    /// Reports a failure the engine detected on its own, outside a command.
    pub fn report_playback_failure(&mut self, error: PlaybackError) {
        if self.is_cleaned() {
            return;
        }
        self.route(Err(error));
    }

    /// Stops playback, releases the engine and detaches the delegate.
    ///
    /// Idempotent: only the first call has any effect.
    pub fn clean_player(&mut self) {
        if self.is_cleaned() {
            return;
        }
        log::info!("cleaning player");
        let cleaned = self.facade.clean();
        self.route(cleaned);
        self.notifier.detach();
        self.animation = None;
        self.bridge.reset();
        self.lifecycle = Lifecycle::Cleaned;
    }

    fn route(&mut self, result: Result<(), PlaybackError>) {
        if let Err(error) = result {
            log::warn!("playback failure: {error}");
            self.notifier.video_player_did_fail(&error);
            self.last_error = Some(error);
        }
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Frame of the current layout state.
    #[must_use]
    pub fn frame(&self) -> PlayerFrame {
        frame_for(
            self.machine.state(),
            self.bounds,
            self.machine.orientation(),
            &self.layout,
        )
    }

    /// Frame to draw at `now`, following any running animation.
    #[must_use]
    pub fn presented_frame(&self, now: Instant) -> PlayerFrame {
        match self.animation {
            Some(animation) if !self.is_full_screen() => self
                .layout
                .maximized_frame(self.bounds)
                .lerp(self.layout.minimized_frame(self.bounds), animation.progress_at(now)),
            _ => self.frame(),
        }
    }

    /// Drops a finished animation. Returns true while one is still running.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.animation.is_some_and(|a| a.is_finished(now)) {
            self.animation = None;
        }
        self.animation.is_some()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn state(&self) -> PlayerState {
        self.machine.state()
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.machine.orientation()
    }

    #[must_use]
    pub fn is_minimized(&self) -> bool {
        self.machine.state().is_minimized()
    }

    #[must_use]
    pub fn is_maximized(&self) -> bool {
        self.machine.state().is_maximized()
    }

    #[must_use]
    pub fn is_full_screen(&self) -> bool {
        self.machine.state().is_full_screen()
    }

    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.lifecycle == Lifecycle::Shown
    }

    #[must_use]
    pub fn is_cleaned(&self) -> bool {
        self.lifecycle == Lifecycle::Cleaned
    }

    #[must_use]
    pub fn screen_bounds(&self) -> ScreenBounds {
        self.bounds
    }

    #[must_use]
    pub fn layout(&self) -> &LayoutMetrics {
        &self.layout
    }

    #[must_use]
    pub fn content_url(&self) -> &Url {
        self.facade.content_url()
    }

    #[must_use]
    pub fn playback_state(&self) -> PlaybackState {
        self.facade.state()
    }

    /// Most recent engine failure, if any.
    #[must_use]
    pub fn last_playback_error(&self) -> Option<&PlaybackError> {
        self.last_error.as_ref()
    }

    #[must_use]
    pub fn engine(&self) -> &E {
        self.facade.engine()
    }

    pub fn engine_mut(&mut self) -> &mut E {
        self.facade.engine_mut()
    }
}
