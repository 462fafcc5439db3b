// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` is the publishing handle owned by the application root. It
//! inserts notifications into the [`Store`] and returns the iced `Task` that
//! fires the expiry message once the toast lifetime has elapsed. Expiry tasks
//! are abortable, and dismissal aborts them.

use super::notification::{Category, Notification, NotificationId};
use super::store::{ExpiryHandle, Store};
use crate::app::config::DEFAULT_TOAST_LIFETIME_MS;
use iced::Task;
use std::time::Duration;

/// Messages for notification state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Dismiss a specific notification by ID (close button).
    Dismiss(NotificationId),
    /// The lifetime of a notification has elapsed.
    Expired(NotificationId),
}

/// Owns the active notifications and their expiry timers.
#[derive(Debug)]
pub struct Manager {
    store: Store,
    lifetime: Duration,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}

impl Manager {
    /// Creates an empty manager with the default toast lifetime.
    #[must_use]
    pub fn new() -> Self {
        Self::with_lifetime(Duration::from_millis(DEFAULT_TOAST_LIFETIME_MS))
    }

    #[must_use]
    pub fn with_lifetime(lifetime: Duration) -> Self {
        Self {
            store: Store::new(),
            lifetime,
        }
    }

    /// Publishes a new notification.
    ///
    /// Returns its identity and the task that expires it. The task must be
    /// handed back to the iced runtime for the toast to disappear on its own.
    pub fn publish(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<Category>,
    ) -> (NotificationId, Task<Message>) {
        let notification = Notification::new(title, description, category);
        let id = notification.id();
        (id, self.push(notification))
    }

    /// Publishes a prebuilt notification.
    pub fn push(&mut self, notification: Notification) -> Task<Message> {
        let lifetime = self.lifetime;
        let mut expiry = Task::none();

        let id = self.store.push(notification, |id| {
            let (task, handle) = Task::perform(expire_after(id, lifetime), |message| message)
                .abortable();
            expiry = task;
            ExpiryHandle::new(move || handle.abort())
        });

        if let Some(notification) = self.store.get(id) {
            tracing::debug!(
                %id,
                category = %notification.category(),
                title = notification.title(),
                "toast published"
            );
        }
        expiry
    }

    /// Dismisses a notification by its ID, aborting its expiry task.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let removed = self.store.dismiss(id);
        if removed {
            tracing::debug!(%id, "toast dismissed");
        }
        removed
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Expired(id) => {
                // A toast dismissed moments earlier is already gone.
                if self.store.expire(*id) {
                    tracing::debug!(%id, "toast expired");
                }
            }
        }
    }

    /// Snapshot of the active notifications in publish order.
    #[must_use]
    pub fn list(&self) -> Vec<Notification> {
        self.store.list()
    }

    /// Returns the active notifications in publish order.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.store.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.store.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.store.is_empty()
    }

    /// Clears all notifications and aborts their timers.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    #[must_use]
    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }
}

/// Waits for `lifetime`, then reports that `id` has expired.
pub async fn expire_after(id: NotificationId, lifetime: Duration) -> Message {
    tokio::time::sleep(lifetime).await;
    Message::Expired(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::futures::StreamExt;
    use iced_runtime::task::into_stream;
    use iced_runtime::Action;
    use tokio::time::timeout;

    /// Runs an expiry task to completion and collects the messages it emits.
    async fn drive(task: Task<Message>) -> Vec<Message> {
        let Some(stream) = into_stream(task) else {
            return Vec::new();
        };
        stream
            .filter_map(|action| async move {
                match action {
                    Action::Output(message) => Some(message),
                    _ => None,
                }
            })
            .collect()
            .await
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert!(!manager.has_notifications());
        assert_eq!(manager.lifetime(), Duration::from_millis(3000));
    }

    #[test]
    fn with_lifetime_overrides_default() {
        let manager = Manager::with_lifetime(Duration::from_millis(750));
        assert_eq!(manager.lifetime(), Duration::from_millis(750));
    }

    #[test]
    fn publish_appends_at_the_end() {
        let mut manager = Manager::new();
        let (first, _) = manager.publish("one", "first", "info");
        let (second, _) = manager.publish("two", "second", Category::Error);

        assert_ne!(first, second);
        let list = manager.list();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].id(), second);
        assert_eq!(list[1].title(), "two");
        assert_eq!(list[1].description(), "second");
        assert_eq!(list[1].category(), &Category::Error);
    }

    #[test]
    fn dismiss_removes_notification() {
        let mut manager = Manager::new();
        let (id, _) = manager.publish("t", "d", "success");

        assert!(manager.dismiss(id));
        assert_eq!(manager.visible_count(), 0);
        assert!(!manager.dismiss(id));
    }

    #[test]
    fn handle_message_dismiss_and_expired() {
        let mut manager = Manager::new();
        let (a, _) = manager.publish("a", "", "info");
        let (b, _) = manager.publish("b", "", "info");

        manager.handle_message(&Message::Dismiss(a));
        assert_eq!(manager.visible().map(Notification::id).collect::<Vec<_>>(), vec![b]);

        manager.handle_message(&Message::Expired(b));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn late_expiry_of_dismissed_toast_is_a_no_op() {
        let mut manager = Manager::new();
        let (a, _) = manager.publish("a", "", "info");
        manager.dismiss(a);
        let (b, _) = manager.publish("b", "", "info");

        manager.handle_message(&Message::Expired(a));

        assert_eq!(manager.visible_count(), 1);
        assert_eq!(manager.list()[0].id(), b);
    }

    #[test]
    fn push_accepts_prebuilt_notification() {
        let mut manager = Manager::new();
        let notification = Notification::error("Upload failed", "File too large");
        let id = notification.id();
        let _task = manager.push(notification);
        assert_eq!(manager.list()[0].id(), id);
    }

    #[test]
    fn clear_removes_all() {
        let mut manager = Manager::new();
        for i in 0..5 {
            let _ = manager.publish(format!("t{i}"), "", "info");
        }
        manager.clear();
        assert_eq!(manager.visible_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn expiry_fires_after_lifetime_not_before() {
        let lifetime = Duration::from_millis(3000);
        let id = NotificationId::next();
        let expiry = expire_after(id, lifetime);
        tokio::pin!(expiry);

        let early = timeout(Duration::from_millis(2999), &mut expiry).await;
        assert!(early.is_err(), "expiry fired before the lifetime elapsed");

        let message = timeout(Duration::from_millis(2), &mut expiry)
            .await
            .expect("expiry should fire once the lifetime elapsed");
        assert_eq!(message, Message::Expired(id));
    }

    #[tokio::test(start_paused = true)]
    async fn published_toast_is_present_until_expiry() {
        let mut manager = Manager::new();
        let (id, _task) = manager.publish("Quest Updated", "You completed the tutorial.", "success");

        let expiry = expire_after(id, manager.lifetime());
        tokio::pin!(expiry);
        assert!(timeout(Duration::from_millis(2500), &mut expiry).await.is_err());
        assert_eq!(manager.visible_count(), 1);

        let message = expiry.await;
        manager.handle_message(&message);
        assert!(!manager.has_notifications());
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_aborts_the_returned_expiry_task() {
        let mut manager = Manager::with_lifetime(Duration::from_millis(1000));
        let (quest, quest_expiry) =
            manager.publish("Quest Updated", "You completed the tutorial.", "success");
        let (maintenance, maintenance_expiry) =
            manager.publish("Server Maintenance", "Down at 03:00 UTC", "info");

        manager.handle_message(&Message::Dismiss(quest));

        let start = tokio::time::Instant::now();
        assert!(drive(quest_expiry).await.is_empty());

        let emitted = drive(maintenance_expiry).await;
        assert!(start.elapsed() >= Duration::from_millis(1000));
        assert_eq!(emitted, vec![Message::Expired(maintenance)]);

        for message in &emitted {
            manager.handle_message(message);
        }
        assert!(!manager.has_notifications());
    }
}
