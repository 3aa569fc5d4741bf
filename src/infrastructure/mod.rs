// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`headless`]: Command-recording engine (implements [`PlaybackEngine`])
//!
//! # Design Notes
//!
//! - Adapters implement traits from `application::port`
//! - Real media engines live outside this crate and plug in the same way
//!
//! [`PlaybackEngine`]: crate::application::port::PlaybackEngine

pub mod headless;

// Re-export main types for convenience
pub use headless::HeadlessEngine;
