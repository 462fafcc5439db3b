// SPDX-License-Identifier: MPL-2.0
//! Toast notification queue.
//!
//! Notifications are short-lived status messages. Anything in the catalog can
//! ask for one by returning an event to the application root, which owns the
//! single [`Manager`]. Each toast disappears after the configured lifetime or
//! when its close button is pressed, whichever comes first.
//!
//! # Components
//!
//! - [`notification`] - `Notification` record, identity and `Category`
//! - [`store`] - ordered active set with cancellable expiry handles
//! - [`manager`] - iced-facing publisher owning the store and timers
//! - [`toast`] - widgets rendering the active set
//!
//! # Usage
//!
//! ```ignore
//! let mut manager = Manager::new();
//! let (id, expiry) = manager.publish("Quest Updated", "You completed the tutorial.", "success");
//! // Return `expiry.map(Message::Notification)` from `update`.
//! ```

pub mod manager;
pub mod notification;
pub mod store;
mod toast;

pub use manager::{expire_after, Manager, Message as NotificationMessage};
pub use notification::{Category, Notification, NotificationId};
pub use store::{ExpiryHandle, Store};
pub use toast::Toast;
