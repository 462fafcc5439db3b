// SPDX-License-Identifier: MPL-2.0
//! Ordered store of active notifications.
//!
//! The store is runtime-agnostic: it never spawns timers itself. Whoever
//! pushes a notification supplies a scheduling closure that starts the expiry
//! timer and hands back an [`ExpiryHandle`] able to cancel it. The handle is
//! kept next to the entry so that dismissal can stop the pending timer.

use super::notification::{Notification, NotificationId};
use std::fmt;

/// Cancels a pending expiry timer.
///
/// Calling [`cancel`](Self::cancel) consumes the handle, so a timer is
/// cancelled at most once.
pub struct ExpiryHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl ExpiryHandle {
    /// Wraps a cancellation callback.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A handle with nothing to cancel, for entries without a timer.
    #[must_use]
    pub fn detached() -> Self {
        Self { cancel: None }
    }

    /// Cancels the timer this handle refers to.
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for ExpiryHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpiryHandle")
            .field("armed", &self.cancel.is_some())
            .finish()
    }
}

#[derive(Debug)]
struct Entry {
    notification: Notification,
    expiry: ExpiryHandle,
}

/// The active set, in insertion order.
#[derive(Debug, Default)]
pub struct Store {
    entries: Vec<Entry>,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a notification and arms its expiry.
    ///
    /// `schedule` receives the notification's identity and returns the handle
    /// used to cancel the timer if the notification is dismissed early.
    pub fn push(
        &mut self,
        notification: Notification,
        schedule: impl FnOnce(NotificationId) -> ExpiryHandle,
    ) -> NotificationId {
        let id = notification.id();
        let expiry = schedule(id);
        self.entries.push(Entry {
            notification,
            expiry,
        });
        id
    }

    /// Removes a notification and cancels its pending expiry.
    ///
    /// Returns `false` if the identity is not active. Never fails.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        match self.take(id) {
            Some(entry) => {
                entry.expiry.cancel();
                true
            }
            None => false,
        }
    }

    /// Removes a notification whose timer has fired.
    ///
    /// The timer is already done, so nothing is cancelled.
    pub fn expire(&mut self, id: NotificationId) -> bool {
        self.take(id).is_some()
    }

    /// Snapshot of the active notifications in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<Notification> {
        self.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter().map(|entry| &entry.notification)
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.iter().find(|n| n.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes everything, cancelling each pending expiry.
    pub fn clear(&mut self) {
        for entry in self.entries.drain(..) {
            entry.expiry.cancel();
        }
    }

    fn take(&mut self, id: NotificationId) -> Option<Entry> {
        let pos = self
            .entries
            .iter()
            .position(|entry| entry.notification.id() == id)?;
        Some(self.entries.remove(pos))
    }
}
