// SPDX-License-Identifier: MPL-2.0
//! Scroll-to-transition bridge.
//!
//! Converts absolute offsets from the parent scroll surface into commands for
//! the [`TransitionMachine`]. The bridge only remembers where the current drag
//! is anchored; everything durable lives in the machine, so a new gesture can
//! start at any time without replaying the previous one.

use super::transition::{Outcome, TransitionMachine};
use crate::domain::ui::{PlayerState, Progress, RestingState};

/// What a scroll or release sample did to the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// The sample had no effect.
    Ignored,
    /// The player is between layouts at this progress.
    Moved(Progress),
    /// The player committed to a resting layout.
    Settled { from: Progress, to: RestingState },
    /// The docked player was dragged far enough to be dismissed.
    Dismiss,
}

impl From<Outcome> for GestureEvent {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Ignored => GestureEvent::Ignored,
            Outcome::Moved(progress) => GestureEvent::Moved(progress),
            Outcome::Settled { from, to } => GestureEvent::Settled { from, to },
        }
    }
}

/// Scroll offset paired with the progress it corresponds to.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Anchor {
    offset: f32,
    progress: Progress,
    /// Scroll span mapped onto a full transition when it differs from the
    /// layout distance.
    reach: Option<f32>,
}

impl Anchor {
    fn new(offset: f32, progress: Progress) -> Self {
        Self {
            offset,
            progress,
            reach: None,
        }
    }
}

/// Feeds parent scroll samples into a [`TransitionMachine`].
#[derive(Debug, Clone, Default)]
pub struct ScrollBridge {
    /// Offset the current drag (or resting layout) is measured from.
    anchor: Option<Anchor>,
    last_offset: Option<f32>,
}

impl ScrollBridge {
    /// Handles one absolute scroll offset sample.
    ///
    /// `distance` is the scroll distance mapped onto a full transition and
    /// `dismiss_distance` how far past its docking offset a minimized player
    /// must be dragged to be dismissed.
    pub fn on_scroll(
        &mut self,
        offset: f32,
        machine: &mut TransitionMachine,
        distance: f32,
        dismiss_distance: f32,
    ) -> GestureEvent {
        if !offset.is_finite() || !(distance > 0.0) {
            return GestureEvent::Ignored;
        }
        let previous = self.last_offset.replace(offset);

        match machine.state() {
            PlayerState::Maximized => {
                let origin = self.anchor.map_or(0.0, |a| a.offset).max(0.0);
                if offset <= origin {
                    // The host scrolled back up: the next drag starts from here
                    self.anchor = Some(Anchor::new(offset.max(0.0), Progress::MAXIMIZED));
                    return GestureEvent::Ignored;
                }
                machine.begin_drag();
                self.anchor = Some(Anchor::new(origin, Progress::MAXIMIZED));
                self.track(offset, machine, distance)
            }
            PlayerState::Minimized => {
                let origin = self.anchor.map_or(0.0, |a| a.offset);
                if offset - origin >= dismiss_distance && machine.can_dismiss() {
                    log::debug!("dismiss drag at offset {offset:.1} (docked at {origin:.1})");
                    self.reset();
                    return GestureEvent::Dismiss;
                }
                if offset >= origin {
                    return GestureEvent::Ignored;
                }
                machine.begin_drag();
                // The host cannot scroll above zero, so a player docked closer
                // to the top than `distance` reaches maximized at offset zero
                let reach = if origin > 0.0 {
                    origin.min(distance)
                } else {
                    distance
                };
                self.anchor = Some(Anchor {
                    offset: origin,
                    progress: Progress::MINIMIZED,
                    reach: Some(reach),
                });
                self.track(offset, machine, distance)
            }
            PlayerState::Transitioning { progress, .. } => {
                if self.anchor.is_none() {
                    // Drag adopted mid-flight: measure from the previous sample
                    self.anchor = Some(Anchor::new(previous.unwrap_or(offset), progress));
                }
                self.track(offset, machine, distance)
            }
            PlayerState::FullScreen { .. } => GestureEvent::Ignored,
        }
    }

    /// Handles the end of a drag, committing it with the snap rule.
    pub fn on_release(&mut self, velocity: f32, machine: &mut TransitionMachine) -> GestureEvent {
        let event = GestureEvent::from(machine.release(velocity));
        if let GestureEvent::Settled { to, .. } = event {
            // Measure the next gesture from where this one let go
            self.rebase(to);
        }
        event
    }

    /// Anchors the resting layout `state` at the last seen offset.
    ///
    /// Used after commits that did not come from reaching a bound.
    pub fn rebase(&mut self, state: RestingState) {
        self.anchor = Some(Anchor::new(
            self.last_offset.unwrap_or(0.0),
            state.progress(),
        ));
    }

    /// Forgets the current anchor and offset history.
    pub fn reset(&mut self) {
        self.anchor = None;
        self.last_offset = None;
    }

    /// Offset the current drag or resting layout is measured from.
    #[must_use]
    pub fn anchor_offset(&self) -> Option<f32> {
        self.anchor.map(|a| a.offset)
    }

    fn track(
        &mut self,
        offset: f32,
        machine: &mut TransitionMachine,
        distance: f32,
    ) -> GestureEvent {
        let Some(anchor) = self.anchor else {
            return GestureEvent::Ignored;
        };
        let span = anchor.reach.unwrap_or(distance);
        let raw = anchor.progress.value() + (offset - anchor.offset) / span;
        let event = GestureEvent::from(machine.update_progress(Progress::new(raw)));

        if let GestureEvent::Settled { to, .. } = event {
            // Re-anchor at the exact offset of the bound that was reached
            let bound = to.progress();
            self.anchor = Some(Anchor {
                offset: anchor.offset + (bound.value() - anchor.progress.value()) * span,
                progress: bound,
                reach: anchor.reach,
            });
        }
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ui::Direction;

    const DISTANCE: f32 = 100.0;
    const DISMISS: f32 = 80.0;
    const EPSILON: f32 = 1e-4;

    fn scroll(bridge: &mut ScrollBridge, machine: &mut TransitionMachine, offset: f32) -> GestureEvent {
        bridge.on_scroll(offset, machine, DISTANCE, DISMISS)
    }

    fn settled_to(event: GestureEvent) -> Option<RestingState> {
        match event {
            GestureEvent::Settled { to, .. } => Some(to),
            _ => None,
        }
    }

    fn progress_of(machine: &TransitionMachine) -> f32 {
        machine.state().progress().map(Progress::value).unwrap_or(f32::NAN)
    }

    #[test]
    fn upward_scroll_while_maximized_is_ignored() {
        let mut bridge = ScrollBridge::default();
        let mut machine = TransitionMachine::default();
        assert_eq!(scroll(&mut bridge, &mut machine, -20.0), GestureEvent::Ignored);
        assert_eq!(scroll(&mut bridge, &mut machine, 0.0), GestureEvent::Ignored);
        assert!(machine.state().is_maximized());
    }

    #[test]
    fn scrolling_past_zero_begins_transition() {
        let mut bridge = ScrollBridge::default();
        let mut machine = TransitionMachine::default();

        let event = scroll(&mut bridge, &mut machine, 25.0);
        assert_eq!(event, GestureEvent::Moved(Progress::new(0.25)));
        assert_eq!(
            machine.state(),
            PlayerState::Transitioning {
                progress: Progress::new(0.25),
                direction: Direction::TowardMinimized,
            }
        );
    }

    #[test]
    fn successive_samples_update_progress() {
        let mut bridge = ScrollBridge::default();
        let mut machine = TransitionMachine::default();
        scroll(&mut bridge, &mut machine, 10.0);
        scroll(&mut bridge, &mut machine, 40.0);
        assert!((progress_of(&machine) - 0.4).abs() < EPSILON);
        scroll(&mut bridge, &mut machine, 30.0);
        assert!((progress_of(&machine) - 0.3).abs() < EPSILON);
    }

    #[test]
    fn overshoot_clamps_and_minimizes() {
        let mut bridge = ScrollBridge::default();
        let mut machine = TransitionMachine::default();
        let event = scroll(&mut bridge, &mut machine, 150.0);
        assert_eq!(settled_to(event), Some(RestingState::Minimized));
        assert!(machine.state().is_minimized());
        assert_eq!(bridge.anchor_offset(), Some(DISTANCE));
    }

    #[test]
    fn release_uses_snap_rule() {
        let mut bridge = ScrollBridge::default();
        let mut machine = TransitionMachine::default();
        scroll(&mut bridge, &mut machine, 50.0);
        let event = bridge.on_release(0.0, &mut machine);
        assert_eq!(settled_to(event), Some(RestingState::Minimized));
        assert_eq!(bridge.anchor_offset(), Some(50.0));
    }

    #[test]
    fn release_below_threshold_returns_to_maximized() {
        let mut bridge = ScrollBridge::default();
        let mut machine = TransitionMachine::default();
        scroll(&mut bridge, &mut machine, 20.0);
        let event = bridge.on_release(0.0, &mut machine);
        assert_eq!(settled_to(event), Some(RestingState::Maximized));
        assert!(machine.state().is_maximized());
    }

    #[test]
    fn dragging_up_from_minimized_heads_back() {
        let mut bridge = ScrollBridge::default();
        let mut machine = TransitionMachine::default();
        scroll(&mut bridge, &mut machine, 120.0); // docks at 100
        assert!(machine.state().is_minimized());

        let event = scroll(&mut bridge, &mut machine, 70.0);
        assert!(matches!(event, GestureEvent::Moved(_)));
        assert!((progress_of(&machine) - 0.7).abs() < EPSILON);
        assert!(matches!(
            machine.state(),
            PlayerState::Transitioning {
                direction: Direction::TowardMaximized,
                ..
            }
        ));

        let event = scroll(&mut bridge, &mut machine, -10.0);
        assert_eq!(settled_to(event), Some(RestingState::Maximized));
    }

    #[test]
    fn dragging_docked_player_far_enough_dismisses() {
        let mut bridge = ScrollBridge::default();
        let mut machine = TransitionMachine::default();
        scroll(&mut bridge, &mut machine, 100.0);
        assert!(machine.state().is_minimized());

        assert_eq!(scroll(&mut bridge, &mut machine, 150.0), GestureEvent::Ignored);
        assert_eq!(scroll(&mut bridge, &mut machine, 180.0), GestureEvent::Dismiss);
        assert_eq!(bridge.anchor_offset(), None);
    }

    #[test]
    fn fullscreen_ignores_scroll() {
        let mut bridge = ScrollBridge::default();
        let mut machine = TransitionMachine::default();
        machine.enter_fullscreen();
        assert_eq!(scroll(&mut bridge, &mut machine, 40.0), GestureEvent::Ignored);
        assert_eq!(bridge.on_release(0.0, &mut machine), GestureEvent::Ignored);
    }

    #[test]
    fn non_finite_samples_are_ignored() {
        let mut bridge = ScrollBridge::default();
        let mut machine = TransitionMachine::default();
        assert_eq!(scroll(&mut bridge, &mut machine, f32::NAN), GestureEvent::Ignored);
        assert_eq!(
            bridge.on_scroll(10.0, &mut machine, 0.0, DISMISS),
            GestureEvent::Ignored
        );
        assert!(machine.state().is_maximized());
    }

    #[test]
    fn rebase_anchors_at_last_offset() {
        let mut bridge = ScrollBridge::default();
        let mut machine = TransitionMachine::default();
        scroll(&mut bridge, &mut machine, -5.0);
        machine.snap_to(RestingState::Minimized);
        bridge.rebase(RestingState::Minimized);
        assert_eq!(bridge.anchor_offset(), Some(-5.0));
        // 80 past the docking offset dismisses
        assert_eq!(scroll(&mut bridge, &mut machine, 75.0), GestureEvent::Dismiss);
    }

    #[test]
    fn scrolling_back_up_lowers_maximized_anchor() {
        let mut bridge = ScrollBridge::default();
        let mut machine = TransitionMachine::default();
        scroll(&mut bridge, &mut machine, 20.0);
        let event = bridge.on_release(0.0, &mut machine);
        assert_eq!(settled_to(event), Some(RestingState::Maximized));
        assert_eq!(bridge.anchor_offset(), Some(20.0));

        assert_eq!(scroll(&mut bridge, &mut machine, 5.0), GestureEvent::Ignored);
        assert_eq!(bridge.anchor_offset(), Some(5.0));

        let event = scroll(&mut bridge, &mut machine, 15.0);
        assert!(matches!(event, GestureEvent::Moved(_)));
        assert!((progress_of(&machine) - 0.1).abs() < EPSILON);
    }

    #[test]
    fn scrolling_above_zero_keeps_anchor_at_zero() {
        let mut bridge = ScrollBridge::default();
        let mut machine = TransitionMachine::default();
        scroll(&mut bridge, &mut machine, -30.0);
        assert_eq!(bridge.anchor_offset(), Some(0.0));
        scroll(&mut bridge, &mut machine, 10.0);
        assert!((progress_of(&machine) - 0.1).abs() < EPSILON);
    }

    #[test]
    fn player_docked_near_top_can_be_dragged_back() {
        let mut bridge = ScrollBridge::default();
        let mut machine = TransitionMachine::default();
        scroll(&mut bridge, &mut machine, 60.0);
        let event = bridge.on_release(0.0, &mut machine);
        assert_eq!(settled_to(event), Some(RestingState::Minimized));
        assert_eq!(bridge.anchor_offset(), Some(60.0));

        scroll(&mut bridge, &mut machine, 30.0);
        assert!((progress_of(&machine) - 0.5).abs() < EPSILON);

        let event = scroll(&mut bridge, &mut machine, 0.0);
        assert_eq!(settled_to(event), Some(RestingState::Maximized));
        assert!(machine.state().is_maximized());
        assert_eq!(bridge.anchor_offset(), Some(0.0));
    }

    #[test]
    fn drag_adopted_mid_flight_measures_from_previous_sample() {
        let mut bridge = ScrollBridge::default();
        let mut machine = TransitionMachine::default();
        machine.begin_drag();
        machine.update_progress(Progress::new(0.5));

        scroll(&mut bridge, &mut machine, 30.0);
        assert!((progress_of(&machine) - 0.5).abs() < EPSILON);
        scroll(&mut bridge, &mut machine, 40.0);
        assert!((progress_of(&machine) - 0.6).abs() < EPSILON);
    }
}
