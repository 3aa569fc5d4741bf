// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo host.

use iced::Size;
use std::path::PathBuf;
use std::time::Instant;
use url::Url;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The host list scrolled to this vertical offset.
    HostScrolled(f32),
    /// The pointer was released, ending any drag in progress.
    PointerReleased,
    WindowResized(Size),
    Tick(Instant), // Animation frames and drag-end detection
    Minimize,
    Maximize,
    ToggleFullScreen,
    TogglePlayback,
    NextClip,
    /// Bring the player back after it was dismissed.
    ShowPlayer,
    /// Tear the player down for good.
    Clean,
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone)]
pub struct Flags {
    /// Optional directory overriding where `settings.toml` is read from.
    pub config_dir: Option<PathBuf>,
    /// Content shown first.
    pub content_url: Url,
}
