// SPDX-License-Identifier: MPL-2.0
//! User interface pieces of the demo host.
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`overlay`] - Canvas program drawing the player at its presented frame

pub mod design_tokens;
pub mod overlay;
