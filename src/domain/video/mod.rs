// SPDX-License-Identifier: MPL-2.0
//! Video playback domain types.
//!
//! This module contains playback value objects that are independent of the
//! engine actually decoding the content.

pub mod playback;

// Re-export commonly used types
pub use playback::PlaybackState;
