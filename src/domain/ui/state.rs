// SPDX-License-Identifier: MPL-2.0
//! Player layout state machine values.
//!
//! [`PlayerState`] is the single source of truth for where the player sits.
//! The boolean views (`is_minimized`, `is_maximized`, `is_full_screen`) are
//! projections of it and can never disagree with each other.

use super::newtypes::Progress;

/// Device orientation reported to the host.
///
/// Only changes as a side effect of entering or leaving fullscreen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Returns true for [`Orientation::Landscape`].
    #[must_use]
    pub fn is_landscape(self) -> bool {
        matches!(self, Self::Landscape)
    }
}

/// Which way an in-flight drag is heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    TowardMinimized,
    TowardMaximized,
}

/// The two layouts a drag or a fullscreen session can settle into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RestingState {
    #[default]
    Maximized,
    Minimized,
}

impl RestingState {
    /// Progress value matching this layout.
    #[must_use]
    pub fn progress(self) -> Progress {
        match self {
            Self::Maximized => Progress::MAXIMIZED,
            Self::Minimized => Progress::MINIMIZED,
        }
    }

    /// Returns the equivalent [`PlayerState`].
    #[must_use]
    pub fn into_state(self) -> PlayerState {
        match self {
            Self::Maximized => PlayerState::Maximized,
            Self::Minimized => PlayerState::Minimized,
        }
    }
}

/// Current layout of the player.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PlayerState {
    /// Default large, top-anchored layout.
    #[default]
    Maximized,
    /// Small layout docked at the bottom of the screen.
    Minimized,
    /// Mid-drag between the two layouts.
    Transitioning {
        progress: Progress,
        direction: Direction,
    },
    /// Covers the whole screen; `restore` is where exiting returns to.
    FullScreen { restore: RestingState },
}

impl PlayerState {
    #[must_use]
    pub fn is_maximized(self) -> bool {
        matches!(self, Self::Maximized)
    }

    #[must_use]
    pub fn is_minimized(self) -> bool {
        matches!(self, Self::Minimized)
    }

    #[must_use]
    pub fn is_full_screen(self) -> bool {
        matches!(self, Self::FullScreen { .. })
    }

    #[must_use]
    pub fn is_transitioning(self) -> bool {
        matches!(self, Self::Transitioning { .. })
    }

    /// Interpolation position of the state, or `None` in fullscreen.
    #[must_use]
    pub fn progress(self) -> Option<Progress> {
        match self {
            Self::Maximized => Some(Progress::MAXIMIZED),
            Self::Minimized => Some(Progress::MINIMIZED),
            Self::Transitioning { progress, .. } => Some(progress),
            Self::FullScreen { .. } => None,
        }
    }

    /// The resting layout this state is in, if it is one.
    #[must_use]
    pub fn resting(self) -> Option<RestingState> {
        match self {
            Self::Maximized => Some(RestingState::Maximized),
            Self::Minimized => Some(RestingState::Minimized),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_states() -> Vec<PlayerState> {
        vec![
            PlayerState::Maximized,
            PlayerState::Minimized,
            PlayerState::Transitioning {
                progress: Progress::new(0.3),
                direction: Direction::TowardMinimized,
            },
            PlayerState::FullScreen {
                restore: RestingState::Minimized,
            },
        ]
    }

    #[test]
    fn default_is_maximized() {
        assert_eq!(PlayerState::default(), PlayerState::Maximized);
        assert_eq!(Orientation::default(), Orientation::Portrait);
    }

    #[test]
    fn at_most_one_flag_is_set() {
        for state in all_states() {
            let flags = [
                state.is_maximized(),
                state.is_minimized(),
                state.is_full_screen(),
            ];
            assert!(flags.iter().filter(|set| **set).count() <= 1, "{state:?}");
        }
    }

    #[test]
    fn transitioning_sets_no_flag() {
        let state = PlayerState::Transitioning {
            progress: Progress::new(0.5),
            direction: Direction::TowardMaximized,
        };
        assert!(!state.is_maximized());
        assert!(!state.is_minimized());
        assert!(!state.is_full_screen());
        assert!(state.is_transitioning());
    }

    #[test]
    fn progress_projection() {
        assert_eq!(PlayerState::Maximized.progress(), Some(Progress::MAXIMIZED));
        assert_eq!(PlayerState::Minimized.progress(), Some(Progress::MINIMIZED));
        assert_eq!(
            PlayerState::FullScreen {
                restore: RestingState::Maximized
            }
            .progress(),
            None
        );
    }

    #[test]
    fn resting_round_trip() {
        assert_eq!(
            RestingState::Minimized.into_state().resting(),
            Some(RestingState::Minimized)
        );
        assert_eq!(RestingState::Maximized.progress(), Progress::MAXIMIZED);
        assert!(all_states()[2].resting().is_none());
    }
}
