// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports the player core depends on.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer implements the delegate port and drives the player

pub mod port;
