// SPDX-License-Identifier: MPL-2.0
//! Demo host application.
//!
//! The `App` struct plays the role of the host screen: a scrolling list of
//! related content with the draggable player drawn above it. Scrolling the
//! list drives the player, buttons trigger the programmatic transitions, and
//! player notifications show up in a status line.

mod inbox;
mod message;
mod subscription;
mod view;

pub use inbox::{HostEvent, Inbox};
pub use message::{Flags, Message};

use crate::config;
use crate::domain::ui::ScreenBounds;
use crate::infrastructure::HeadlessEngine;
use crate::player::DraggableVideoPlayer;
use crate::ui::design_tokens::sizing;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::rc::Rc;
use std::time::{Duration, Instant};
use url::Url;

pub const WINDOW_DEFAULT_WIDTH: u32 = 420;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 820;
pub const MIN_WINDOW_WIDTH: u32 = 240;
pub const MIN_WINDOW_HEIGHT: u32 = 400;

/// Scrollable id of the host list.
const HOST_SCROLL_ID: &str = "host-list";

/// A drag with no new sample for this long counts as released.
const RELEASE_IDLE: Duration = Duration::from_millis(120);

/// Content cycled through by the "next clip" button.
pub const DEMO_CLIPS: [&str; 3] = [
    "https://media.example.com/clips/harbour.mp4",
    "https://media.example.com/clips/forest.mp4",
    "https://media.example.com/clips/city.mp4",
];

type DemoPlayer = DraggableVideoPlayer<HeadlessEngine>;

/// Root state of the demo host.
pub struct App {
    player: DemoPlayer,
    inbox: Rc<Inbox>,
    window_size: Size,
    now: Instant,
    drag: DragTracker,
    clip_index: usize,
    status: String,
}

/// Estimates release velocity from the last two scroll samples.
#[derive(Debug, Default)]
struct DragTracker {
    last: Option<(f32, Instant)>,
    velocity: f32,
}

impl DragTracker {
    fn sample(&mut self, offset: f32, at: Instant) {
        if let Some((previous, previous_at)) = self.last {
            let dt = at.saturating_duration_since(previous_at).as_secs_f32();
            if dt > 0.0 {
                self.velocity = (offset - previous) / dt;
            }
        }
        self.last = Some((offset, at));
    }

    fn idle_for(&self, now: Instant) -> Option<Duration> {
        self.last.map(|(_, at)| now.saturating_duration_since(at))
    }

    /// Ends the drag, returning its release velocity.
    ///
    /// A finger that rested before lifting releases with no velocity.
    fn finish(&mut self, now: Instant) -> f32 {
        let rested = self.idle_for(now).is_some_and(|idle| idle >= RELEASE_IDLE);
        self.last = None;
        let velocity = std::mem::take(&mut self.velocity);
        if rested {
            0.0
        } else {
            velocity
        }
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires Fn for boot, so each call gets its own copy
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration, creates the player and shows it.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load_with_override(flags.config_dir.clone());
        let settings = config.player_settings();

        let inbox = Rc::new(Inbox::default());
        let mut player = DraggableVideoPlayer::new(flags.content_url, HeadlessEngine::new(), &settings);
        player.set_delegate(&inbox);

        let window_size = Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32);
        player.show(surface_bounds(window_size));

        let status = config_warning.unwrap_or_else(|| "Scroll the list to drag the player".to_string());
        let mut app = Self {
            player,
            inbox,
            window_size,
            now: Instant::now(),
            drag: DragTracker::default(),
            clip_index: 0,
            status,
        };
        let task = app.drain_inbox();
        (app, task)
    }

    fn title(&self) -> String {
        format!(
            "Draggable Player - {}",
            crate::ui::overlay::state_label(self.player.state())
        )
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.player.is_animating() || self.player.state().is_transitioning(),
        );
        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::HostScrolled(offset) => {
                self.now = Instant::now();
                self.drag.sample(offset, self.now);
                self.player.parent_scroll_view_did_scroll(offset);
            }
            Message::PointerReleased => {
                self.now = Instant::now();
                self.release_drag();
            }
            Message::WindowResized(size) => {
                self.window_size = size;
                self.player.set_screen_bounds(surface_bounds(size));
            }
            Message::Tick(now) => {
                self.now = now;
                let idle = self.drag.idle_for(now).is_some_and(|idle| idle >= RELEASE_IDLE);
                if idle && self.player.state().is_transitioning() {
                    self.release_drag();
                }
                self.player.tick(now);
            }
            Message::Minimize => {
                self.now = Instant::now();
                self.player.trigger_minimize_animation(self.now);
            }
            Message::Maximize => {
                self.now = Instant::now();
                self.player.trigger_maximize_animation(self.now);
            }
            Message::ToggleFullScreen => {
                self.player.toggle_full_screen();
            }
            Message::TogglePlayback => {
                if self.player.playback_state().is_playing() {
                    self.player.pause();
                } else {
                    self.player.play();
                }
            }
            Message::NextClip => self.next_clip(),
            Message::ShowPlayer => {
                self.player.show(surface_bounds(self.window_size));
                self.status = "Player restored".to_string();
            }
            Message::Clean => {
                self.player.clean_player();
                self.status = "Player cleaned up".to_string();
            }
        }
        self.drain_inbox()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn release_drag(&mut self) {
        let velocity = self.drag.finish(self.now);
        if self.player.state().is_transitioning() {
            self.player
                .parent_scroll_view_did_end_dragging(velocity, self.now);
        }
    }

    fn next_clip(&mut self) {
        self.clip_index = (self.clip_index + 1) % DEMO_CLIPS.len();
        match Url::parse(DEMO_CLIPS[self.clip_index]) {
            Ok(url) => {
                self.status = format!("Now showing {url}");
                self.player.change_content_url(url);
            }
            Err(err) => log::warn!("invalid demo clip url: {err}"),
        }
    }

    /// Reacts to queued player notifications.
    fn drain_inbox(&mut self) -> Task<Message> {
        let mut tasks = Vec::new();
        for event in self.inbox.drain() {
            log::debug!("host event: {event:?}");
            match event {
                HostEvent::ScrollToTop => {
                    tasks.push(operation::snap_to(
                        Id::new(HOST_SCROLL_ID),
                        RelativeOffset { x: 0.0, y: 0.0 },
                    ));
                }
                HostEvent::RemovePlayer => {
                    self.drag.finish(self.now);
                    self.status = "Player dismissed".to_string();
                }
                HostEvent::Rotated(orientation) => {
                    self.status = format!("Rotated to {orientation:?}");
                }
                HostEvent::PlaybackFailed(reason) => {
                    self.status = format!("Playback failed: {reason}");
                }
            }
        }
        Task::batch(tasks)
    }
}

/// Area the player lives in: the window minus the control strip.
fn surface_bounds(window: Size) -> ScreenBounds {
    ScreenBounds::new(window.width, window.height - sizing::CONTROLS_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ui::RestingState;
    use crate::player::Lifecycle;
    use tempfile::tempdir;

    fn app() -> App {
        let dir = tempdir().expect("failed to create temp dir");
        let flags = Flags {
            config_dir: Some(dir.path().to_path_buf()),
            content_url: Url::parse(DEMO_CLIPS[0]).expect("valid url"),
        };
        let (app, _task) = App::new(flags);
        app
    }

    fn minimized_app() -> App {
        let mut app = app();
        let _ = app.update(Message::HostScrolled(2_000.0));
        assert!(app.player.is_minimized());
        app
    }

    #[test]
    fn new_shows_player_maximized() {
        let app = app();
        assert!(app.player.is_shown());
        assert!(app.player.is_maximized());
        assert_eq!(
            app.player.screen_bounds(),
            ScreenBounds::new(
                WINDOW_DEFAULT_WIDTH as f32,
                WINDOW_DEFAULT_HEIGHT as f32 - sizing::CONTROLS_HEIGHT
            )
        );
    }

    #[test]
    fn host_scroll_drives_player() {
        let mut app = app();
        let _ = app.update(Message::HostScrolled(40.0));
        assert!(app.player.state().is_transitioning());
    }

    #[test]
    fn idle_tick_releases_drag() {
        let mut app = app();
        let _ = app.update(Message::HostScrolled(10.0));
        let later = app.now + RELEASE_IDLE;
        let _ = app.update(Message::Tick(later));
        assert_eq!(app.player.state().resting(), Some(RestingState::Maximized));
    }

    #[test]
    fn pointer_release_commits_drag() {
        let mut app = app();
        let _ = app.update(Message::HostScrolled(10.0));
        let _ = app.update(Message::PointerReleased);
        assert!(!app.player.state().is_transitioning());
    }

    #[test]
    fn maximize_button_drains_scroll_to_top() {
        let mut app = minimized_app();
        let _ = app.update(Message::Maximize);
        assert!(app.player.is_maximized());
        assert!(app.inbox.drain().is_empty());
    }

    #[test]
    fn dismiss_updates_status() {
        let mut app = minimized_app();
        let _ = app.update(Message::HostScrolled(4_000.0));
        assert_eq!(app.player.lifecycle(), Lifecycle::Removed);
        assert_eq!(app.status, "Player dismissed");

        let _ = app.update(Message::ShowPlayer);
        assert!(app.player.is_shown());
        assert!(app.player.is_maximized());
    }

    #[test]
    fn fullscreen_toggle_reports_rotation() {
        let mut app = app();
        let _ = app.update(Message::ToggleFullScreen);
        assert!(app.player.is_full_screen());
        assert_eq!(app.status, "Rotated to Landscape");
    }

    #[test]
    fn next_clip_cycles_content() {
        let mut app = app();
        let _ = app.update(Message::NextClip);
        assert_eq!(app.player.content_url().as_str(), DEMO_CLIPS[1]);
        let _ = app.update(Message::NextClip);
        let _ = app.update(Message::NextClip);
        assert_eq!(app.player.content_url().as_str(), DEMO_CLIPS[0]);
    }

    #[test]
    fn toggle_playback_pauses_and_resumes() {
        let mut app = app();
        assert!(app.player.playback_state().is_playing());
        let _ = app.update(Message::TogglePlayback);
        assert!(app.player.playback_state().is_paused());
        let _ = app.update(Message::TogglePlayback);
        assert!(app.player.playback_state().is_playing());
    }

    #[test]
    fn resize_updates_player_bounds() {
        let mut app = app();
        let _ = app.update(Message::WindowResized(Size::new(500.0, 900.0)));
        assert_eq!(
            app.player.screen_bounds(),
            ScreenBounds::new(500.0, 900.0 - sizing::CONTROLS_HEIGHT)
        );
    }

    #[test]
    fn drag_tracker_estimates_velocity() {
        let mut tracker = DragTracker::default();
        let start = Instant::now();
        tracker.sample(0.0, start);
        tracker.sample(50.0, start + Duration::from_millis(100));
        assert!((tracker.finish(start + Duration::from_millis(100)) - 500.0).abs() < 1.0);
        assert!(tracker.idle_for(start).is_none());
    }

    #[test]
    fn drag_tracker_drops_velocity_after_rest() {
        let mut tracker = DragTracker::default();
        let start = Instant::now();
        tracker.sample(0.0, start);
        tracker.sample(50.0, start + Duration::from_millis(100));
        let lifted = start + Duration::from_millis(100) + RELEASE_IDLE;
        assert_eq!(tracker.finish(lifted), 0.0);
    }

    #[test]
    fn fast_drag_resting_before_release_uses_threshold() {
        let mut app = app();
        let _ = app.update(Message::HostScrolled(0.0));
        let _ = app.update(Message::HostScrolled(20.0));
        assert!(app.player.state().is_transitioning());

        app.now += RELEASE_IDLE;
        app.release_drag();
        assert!(app.player.is_maximized());
    }

    #[test]
    fn player_docked_near_top_returns_when_host_scrolls_to_zero() {
        let mut app = app();
        let _ = app.update(Message::HostScrolled(60.0));
        let _ = app.update(Message::PointerReleased);
        assert!(app.player.is_minimized());

        let _ = app.update(Message::HostScrolled(0.0));
        assert!(app.player.is_maximized());
    }
}
