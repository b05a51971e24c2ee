// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.
//!
//! Mouse input is routed to the indicator as a drag; window resizes trigger a
//! relayout.

use super::Message;
use iced::{event, mouse, time, window, Subscription};
use std::time::Duration;

/// Interval between animation ticks while an indicator is on screen.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Routes native mouse and window events.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::PointerMoved(position))
        }
        event::Event::Mouse(mouse::Event::CursorLeft) => Some(Message::PointerLeft),
        event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::PointerReleased)
        }
        // Presses on the buttons must not start a drag.
        event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => match status {
            event::Status::Ignored => Some(Message::PointerPressed),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Creates the animation tick subscription while an indicator is active.
pub fn create_tick_subscription(has_indicator: bool) -> Subscription<Message> {
    if has_indicator {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
