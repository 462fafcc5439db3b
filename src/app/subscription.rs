// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Toast expiry runs on tasks. The subscriptions here route the keyboard
//! presses that close demo overlays and drive the loading spinner.

use super::Message;
use crate::ui::catalog;
use crate::ui::components::spinner;
use iced::{event, keyboard, time, Subscription};

/// Listens for Escape while a modal, drawer or popover is open.
pub fn create_event_subscription(overlay_open: bool) -> Subscription<Message> {
    if !overlay_open {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window_id| match (&event, status) {
        (
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }),
            event::Status::Ignored,
        ) => Some(Message::EscapePressed),
        _ => None,
    })
}

/// Animates the loading spinner while the loading demo is running.
pub fn create_spinner_subscription(is_loading: bool) -> Subscription<Message> {
    if is_loading {
        time::every(spinner::FRAME_INTERVAL).map(|_| Message::Catalog(catalog::Message::SpinnerTick))
    } else {
        Subscription::none()
    }
}
