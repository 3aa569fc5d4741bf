// SPDX-License-Identifier: MPL-2.0
//! `draggable_player` is a video overlay that can be dragged between a
//! full-width maximized layout and a small docked minimized layout, and taken
//! fullscreen.
//!
//! The core is a headless state machine: scroll offsets from the host go in,
//! a frame for the player and notifications for the host come out. Decoding
//! and presentation are left to an external engine behind the
//! [`PlaybackEngine`](application::port::PlaybackEngine) port. A small iced
//! host in [`app`] shows the player over a scrolling list.

#![doc(html_root_url = "https://docs.rs/draggable_player/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod player;
pub mod ui;
pub mod video_player;
