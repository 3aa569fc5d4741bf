// SPDX-License-Identifier: MPL-2.0
//! Video playback for the draggable player.
//!
//! Decoding and presentation happen in an external engine behind the
//! [`PlaybackEngine`](crate::application::port::PlaybackEngine) port; this
//! module only wraps it in the command facade the overlay drives.

mod facade;

pub use facade::PlaybackFacade;
