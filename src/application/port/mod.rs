// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that collaborators of the player
//! implement. These traits use only domain types, ensuring the player core
//! remains independent of concrete engines and host screens.
//!
//! # Available Ports
//!
//! - [`delegate`]: Notifications to the host screen
//! - [`playback`]: Commands to the external playback engine
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no engine types)
//! - Methods return `Result` with domain error types where the engine can fail
//! - No `async fn` - the player is driven synchronously by UI events

pub mod delegate;
pub mod playback;

// Re-export main types for convenience
pub use delegate::PlayerDelegate;
pub use playback::PlaybackEngine;
