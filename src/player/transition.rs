// SPDX-License-Identifier: MPL-2.0
//! Transition state machine.
//!
//! Owns the [`PlayerState`] and the [`Orientation`] and is the only place
//! either changes. Every operation accepts any input: out-of-range progress is
//! clamped and transitions that make no sense from the current state are
//! reported as [`Outcome::Ignored`] instead of failing.

use crate::config::defaults::DEFAULT_FLING_VELOCITY;
use crate::domain::ui::{Direction, Orientation, PlayerState, Progress, RestingState, SnapThreshold};

/// Result of feeding an input to the machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// Input was not valid for the current state; nothing changed.
    Ignored,
    /// Still between layouts at the given progress.
    Moved(Progress),
    /// Committed to a resting layout, starting from `from`.
    Settled { from: Progress, to: RestingState },
}

impl Outcome {
    /// The resting layout committed to, if any.
    #[must_use]
    pub fn settled(self) -> Option<RestingState> {
        match self {
            Outcome::Settled { to, .. } => Some(to),
            _ => None,
        }
    }
}

/// Discrete layout states plus the triggers moving between them.
#[derive(Debug, Clone)]
pub struct TransitionMachine {
    state: PlayerState,
    orientation: Orientation,
    threshold: SnapThreshold,
    fling_velocity: f32,
}

impl Default for TransitionMachine {
    fn default() -> Self {
        Self::new(SnapThreshold::default(), DEFAULT_FLING_VELOCITY)
    }
}

impl TransitionMachine {
    /// Creates a machine resting maximized in portrait.
    ///
    /// A non-positive or `NaN` `fling_velocity` disables fling detection so
    /// release decisions rely on the threshold alone.
    #[must_use]
    pub fn new(threshold: SnapThreshold, fling_velocity: f32) -> Self {
        let fling_velocity = if fling_velocity.is_nan() || fling_velocity <= 0.0 {
            f32::INFINITY
        } else {
            fling_velocity
        };
        Self {
            state: PlayerState::Maximized,
            orientation: Orientation::Portrait,
            threshold,
            fling_velocity,
        }
    }

    #[must_use]
    pub fn state(&self) -> PlayerState {
        self.state
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn threshold(&self) -> SnapThreshold {
        self.threshold
    }

    /// Starts a drag from a resting layout.
    ///
    /// Maximized begins heading toward minimized at progress 0; minimized
    /// begins heading back at progress 1.
    pub fn begin_drag(&mut self) -> Outcome {
        let (progress, direction) = match self.state {
            PlayerState::Maximized => (Progress::MAXIMIZED, Direction::TowardMinimized),
            PlayerState::Minimized => (Progress::MINIMIZED, Direction::TowardMaximized),
            _ => return Outcome::Ignored,
        };
        log::debug!("drag began at {:?} heading {:?}", self.state, direction);
        self.state = PlayerState::Transitioning {
            progress,
            direction,
        };
        Outcome::Moved(progress)
    }

    /// Moves an in-flight drag; reaching either bound settles there.
    pub fn update_progress(&mut self, progress: Progress) -> Outcome {
        let PlayerState::Transitioning {
            progress: current,
            direction,
        } = self.state
        else {
            return Outcome::Ignored;
        };

        if progress.is_minimized() {
            return self.settle(progress, RestingState::Minimized);
        }
        if progress.is_maximized() {
            return self.settle(progress, RestingState::Maximized);
        }

        let direction = if progress > current {
            Direction::TowardMinimized
        } else if progress < current {
            Direction::TowardMaximized
        } else {
            direction
        };
        self.state = PlayerState::Transitioning {
            progress,
            direction,
        };
        Outcome::Moved(progress)
    }

    /// Commits a released drag.
    ///
    /// A fast enough release follows its velocity (positive heads toward
    /// minimized). Otherwise the drag minimizes only if its progress is
    /// strictly past the snap threshold.
    pub fn release(&mut self, velocity: f32) -> Outcome {
        let PlayerState::Transitioning { progress, .. } = self.state else {
            return Outcome::Ignored;
        };

        let velocity = if velocity.is_nan() { 0.0 } else { velocity };
        let target = if velocity.abs() >= self.fling_velocity {
            if velocity > 0.0 {
                RestingState::Minimized
            } else {
                RestingState::Maximized
            }
        } else if self.threshold.commits_to_minimized(progress) {
            RestingState::Minimized
        } else {
            RestingState::Maximized
        };
        self.settle(progress, target)
    }

    /// Commits directly to `target`, bypassing gesture input.
    pub fn snap_to(&mut self, target: RestingState) -> Outcome {
        let from = match self.state {
            PlayerState::FullScreen { .. } => return Outcome::Ignored,
            state if state.resting() == Some(target) => return Outcome::Ignored,
            state => state.progress().unwrap_or_default(),
        };
        self.settle(from, target)
    }

    /// Enters fullscreen from a resting layout.
    ///
    /// Returns the new orientation only when the state actually changed.
    pub fn enter_fullscreen(&mut self) -> Option<Orientation> {
        let restore = self.state.resting()?;
        self.state = PlayerState::FullScreen { restore };
        self.orientation = Orientation::Landscape;
        log::debug!("entered fullscreen, will restore {:?}", restore);
        Some(self.orientation)
    }

    /// Leaves fullscreen, returning to the layout active before it.
    ///
    /// Returns the new orientation only when the state actually changed.
    pub fn exit_fullscreen(&mut self) -> Option<Orientation> {
        let PlayerState::FullScreen { restore } = self.state else {
            return None;
        };
        self.state = restore.into_state();
        self.orientation = Orientation::Portrait;
        log::debug!("left fullscreen to {:?}", restore);
        Some(self.orientation)
    }

    /// Returns true if the player may be swiped away from its current state.
    #[must_use]
    pub fn can_dismiss(&self) -> bool {
        self.state.is_minimized()
    }

    /// Puts the machine back to maximized in portrait.
    pub fn reset(&mut self) {
        self.state = PlayerState::Maximized;
        self.orientation = Orientation::Portrait;
    }

    fn settle(&mut self, from: Progress, to: RestingState) -> Outcome {
        log::debug!("settled to {:?} from progress {:.3}", to, from.value());
        self.state = to.into_state();
        Outcome::Settled { from, to }
    }
}
