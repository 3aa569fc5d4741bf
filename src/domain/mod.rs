// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core player logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and layout rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity. Range limits and defaults come from
//! the constants in [`crate::config::defaults`].
//!
//! # Modules
//!
//! - [`ui`]: Layout types ([`PlayerState`](ui::PlayerState),
//!   [`Progress`](ui::Progress), [`PlayerFrame`](ui::PlayerFrame)) and the
//!   pure geometry engine ([`frame_for`](ui::frame_for))
//! - [`video`]: Playback types ([`PlaybackState`](video::PlaybackState))

pub mod ui;
pub mod video;
