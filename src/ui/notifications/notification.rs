// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the immutable `Notification` record and its
//! `Category`. Categories are parsed leniently: anything that is not one of
//! the known names is kept verbatim and rendered with a neutral accent.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
///
/// Allocated from a process-wide counter, so an identity is never handed out
/// twice and a stale expiry can never match a newer notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Category determines the accent colour and glyph of a toast.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Success,
    Error,
    Info,
    /// Unrecognized category, preserved exactly as the publisher wrote it.
    Other(String),
}

impl Category {
    /// Parses a raw category name. Never fails.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "success" => Category::Success,
            "error" => Category::Error,
            "info" => Category::Info,
            other => Category::Other(other.to_string()),
        }
    }

    /// Returns the category name, verbatim for unknown categories.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Category::Success => "success",
            Category::Error => "error",
            Category::Info => "info",
            Category::Other(raw) => raw,
        }
    }

    /// Returns true for one of the three known categories.
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Other(_))
    }

    /// Returns the accent colour for this category.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Category::Success => palette::SUCCESS,
            Category::Error => palette::DANGER,
            Category::Info => palette::INFO,
            Category::Other(_) => palette::NEUTRAL,
        }
    }

    /// Returns the glyph drawn in the toast's badge.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Category::Success => "✓",
            Category::Error => "✕",
            Category::Info => "i",
            Category::Other(_) => "•",
        }
    }
}

impl FromStr for Category {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Category {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A notification to be displayed to the user. Immutable once created.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    title: String,
    description: String,
    category: Category,
    created_at: Instant,
}

impl Notification {
    /// Creates a new notification with a fresh identity.
    ///
    /// Arguments follow the same order as [`Manager::publish`].
    ///
    /// [`Manager::publish`]: super::Manager::publish
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<Category>,
    ) -> Self {
        Self {
            id: NotificationId::next(),
            title: title.into(),
            description: description.into(),
            category: category.into(),
            created_at: Instant::now(),
        }
    }

    /// Creates a success notification.
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, Category::Success)
    }

    /// Creates an info notification.
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, Category::Info)
    }

    /// Creates an error notification.
    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, Category::Error)
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn category(&self) -> &Category {
        &self.category
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the age of this notification.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("a", "b");
        let n2 = Notification::success("a", "b");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn known_categories_parse() {
        assert_eq!(Category::parse("success"), Category::Success);
        assert_eq!(Category::parse("error"), Category::Error);
        assert_eq!(Category::parse("info"), Category::Info);
    }

    #[test]
    fn unknown_category_is_preserved_verbatim() {
        let category: Category = "Warning!".parse().unwrap();
        assert_eq!(category, Category::Other("Warning!".to_string()));
        assert_eq!(category.as_str(), "Warning!");
        assert!(!category.is_known());
        assert_eq!(category.color(), palette::NEUTRAL);
    }

    #[test]
    fn category_names_are_case_sensitive() {
        assert_eq!(Category::parse("Success").as_str(), "Success");
        assert!(!Category::parse("Success").is_known());
    }

    #[test]
    fn category_colors_are_distinct() {
        let colors = [
            Category::Success.color(),
            Category::Error.color(),
            Category::Info.color(),
            Category::Other(String::new()).color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn constructors_set_fields() {
        let n = Notification::info("Server Maintenance", "Down at 03:00 UTC");
        assert_eq!(n.title(), "Server Maintenance");
        assert_eq!(n.description(), "Down at 03:00 UTC");
        assert_eq!(n.category(), &Category::Info);
        assert_eq!(Notification::error("", "").category(), &Category::Error);
    }

    #[test]
    fn new_takes_title_description_then_category() {
        let n = Notification::new("Quest Updated", "You completed the tutorial.", "success");
        assert_eq!(n.title(), "Quest Updated");
        assert_eq!(n.description(), "You completed the tutorial.");
        assert_eq!(n.category(), &Category::Success);
    }
}
