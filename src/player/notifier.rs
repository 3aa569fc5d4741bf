// SPDX-License-Identifier: MPL-2.0
//! Weak delegate holder.
//!
//! The host owns the player, so the player only keeps a [`Weak`] pointer back
//! to it. Every call upgrades first; a missing, dropped or detached delegate
//! turns the notification into a no-op.

use crate::application::port::PlayerDelegate;
use crate::domain::ui::Orientation;
use crate::error::PlaybackError;
use std::fmt;
use std::rc::{Rc, Weak};

#[derive(Default)]
pub struct Notifier {
    delegate: Option<Weak<dyn PlayerDelegate>>,
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("attached", &self.is_attached())
            .finish()
    }
}

impl Notifier {
    /// Stores a weak reference to `delegate`, replacing any previous one.
    pub fn attach<D: PlayerDelegate + 'static>(&mut self, delegate: &Rc<D>) {
        let weak: Weak<D> = Rc::downgrade(delegate);
        self.delegate = Some(weak);
    }

    /// Drops the delegate reference.
    pub fn detach(&mut self) {
        self.delegate = None;
    }

    /// Returns true while a live delegate is attached.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.upgrade().is_some()
    }

    pub fn scroll_parent_background_to_top(&self) {
        if let Some(delegate) = self.upgrade() {
            delegate.scroll_parent_background_to_top();
        }
    }

    pub fn remove_draggable_video_player(&self) {
        if let Some(delegate) = self.upgrade() {
            delegate.remove_draggable_video_player();
        }
    }

    pub fn video_player_did_rotate_to_orientation(&self, orientation: Orientation) {
        if let Some(delegate) = self.upgrade() {
            delegate.video_player_did_rotate_to_orientation(orientation);
        }
    }

    pub fn video_player_did_fail(&self, error: &PlaybackError) {
        if let Some(delegate) = self.upgrade() {
            delegate.video_player_did_fail(error);
        }
    }

    fn upgrade(&self) -> Option<Rc<dyn PlayerDelegate>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }
}
