// SPDX-License-Identifier: MPL-2.0
//! Delegate that queues player notifications for the update loop.
//!
//! The player notifies its delegate while it is being mutated, so the host
//! cannot react right away. Notifications are queued here and drained once
//! the update returns.

use crate::application::port::PlayerDelegate;
use crate::domain::ui::Orientation;
use crate::error::PlaybackError;
use std::cell::RefCell;

/// A notification received from the player.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    ScrollToTop,
    RemovePlayer,
    Rotated(Orientation),
    PlaybackFailed(String),
}

#[derive(Debug, Default)]
pub struct Inbox {
    events: RefCell<Vec<HostEvent>>,
}

impl Inbox {
    /// Takes every queued notification, oldest first.
    pub fn drain(&self) -> Vec<HostEvent> {
        self.events.borrow_mut().drain(..).collect()
    }

    fn push(&self, event: HostEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl PlayerDelegate for Inbox {
    fn scroll_parent_background_to_top(&self) {
        self.push(HostEvent::ScrollToTop);
    }

    fn remove_draggable_video_player(&self) {
        self.push(HostEvent::RemovePlayer);
    }

    fn video_player_did_rotate_to_orientation(&self, orientation: Orientation) {
        self.push(HostEvent::Rotated(orientation));
    }

    fn video_player_did_fail(&self, error: &PlaybackError) {
        self.push(HostEvent::PlaybackFailed(error.to_string()));
    }
}
