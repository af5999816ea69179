// SPDX-License-Identifier: MPL-2.0
//! Subscriptions driving the manager.

use crate::config::TICK_INTERVAL_MS;
use crate::manager::{Manager, Message};
use iced::{event, time, window, Event, Subscription};
use std::time::Duration;

/// Forwards window resizes so snacks can be re-measured, and ticks at frame
/// rate while the manager has animations or deadlines pending.
pub fn subscription(manager: &Manager) -> Subscription<Message> {
    let resizes = event::listen_with(|event, _status, _window| {
        if let Event::Window(window::Event::Resized(size)) = event {
            return Some(Message::SurfaceResized { width: size.width });
        }
        None
    });

    if manager.has_activity() {
        Subscription::batch([
            resizes,
            time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(|_| Message::Tick),
        ])
    } else {
        resizes
    }
}
