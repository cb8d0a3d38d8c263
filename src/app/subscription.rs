// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::config::ANIMATION_TICK_MS;
use crate::ui::swipe_list;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Forwards window resizes so rows can re-bound their travel.
///
/// Pointer input is not routed here: each row's swipeable widget keeps
/// tracking its own press until release, inside or outside the window.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => {
            Some(Message::List(swipe_list::Message::Resized(size)))
        }
        _ => None,
    })
}

/// Drives release animations while any row is springing back or flying off.
pub fn create_tick_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        time::every(Duration::from_millis(ANIMATION_TICK_MS))
            .map(|at| Message::List(swipe_list::Message::Tick(at)))
    } else {
        Subscription::none()
    }
}
