// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo host.
//!
//! Native pointer and window events are turned into player input, and a
//! frame tick runs only while something on screen is moving.

use super::Message;
use iced::{event, mouse, time, window, Subscription};
use std::time::Duration;

/// Interval between animation frames.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Routes pointer releases and window resizes.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::PointerReleased)
        }
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}

/// Creates a frame tick while the player animates or a drag is in flight.
pub fn create_tick_subscription(active: bool) -> Subscription<Message> {
    if active {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
