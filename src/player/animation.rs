// SPDX-License-Identifier: MPL-2.0
//! Fixed-duration tween used for programmatic transitions and release snaps.
//!
//! The layout state commits immediately; the animation only drives the
//! *presented* frame from where the player was to where it now rests.
//! Time is passed in so that animations are reproducible in tests.

use crate::domain::ui::{AnimationDuration, Progress};
use std::time::{Duration, Instant};

/// A tween between two progress values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    from: Progress,
    to: Progress,
    started_at: Instant,
    duration: Duration,
}

impl Animation {
    #[must_use]
    pub fn new(from: Progress, to: Progress, started_at: Instant, duration: AnimationDuration) -> Self {
        Self {
            from,
            to,
            started_at,
            duration: duration.as_duration(),
        }
    }

    #[must_use]
    pub fn target(&self) -> Progress {
        self.to
    }

    /// Fraction of the duration elapsed at `now`, in `[0, 1]`.
    #[must_use]
    pub fn elapsed_fraction(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Presented progress at `now`, eased out so the motion settles softly.
    #[must_use]
    pub fn progress_at(&self, now: Instant) -> Progress {
        let t = self.elapsed_fraction(now);
        if t >= 1.0 {
            return self.to;
        }
        let eased = 1.0 - (1.0 - t) * (1.0 - t);
        Progress::new(self.from.value() + (self.to.value() - self.from.value()) * eased)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.elapsed_fraction(now) >= 1.0
    }
}
