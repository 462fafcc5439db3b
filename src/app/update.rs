// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Component `update` functions mutate their own state and return an event.
//! The handlers here translate those events into tasks: toasts, clipboard
//! writes, scrolling, file dialogs and preference persistence.

use super::config::{self, Config};
use super::i18n::fluent::I18n;
use super::Message;
use crate::ui::catalog::{self, Event as CatalogEvent, Section, SCROLLABLE_ID};
use crate::ui::header::{self, Event as HeaderEvent};
use crate::ui::notifications::{Category, Manager};
use crate::ui::sidebar::{self, Event as SidebarEvent};
use crate::ui::theming::ThemeMode;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;

/// Mutable view of the `App` fields the handlers need.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub config: &'a mut Config,
    pub theme_mode: &'a mut ThemeMode,
    pub notifications: &'a mut Manager,
    pub catalog: &'a mut catalog::State,
    pub active_section: &'a mut Section,
    pub query: &'a mut String,
}

impl UpdateContext<'_> {
    /// Publishes a toast and returns its expiry task.
    fn notify(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
    ) -> Task<Message> {
        let (id, expiry) = self.notifications.publish(title, description, category);
        tracing::debug!(%id, "toast published from update");
        expiry.map(Message::Notification)
    }
}

pub fn handle_catalog_message(
    ctx: &mut UpdateContext<'_>,
    message: catalog::Message,
) -> Task<Message> {
    match ctx.catalog.update(message, ctx.i18n) {
        CatalogEvent::None => Task::none(),
        CatalogEvent::Notify {
            title,
            description,
            category,
        } => ctx.notify(title, description, category),
        CatalogEvent::CopyToClipboard {
            text,
            title,
            description,
        } => Task::batch([
            iced::clipboard::write(text),
            ctx.notify(title, description, Category::Success),
        ]),
        CatalogEvent::PickAvatar => pick_avatar(ctx.i18n.tr("forms-avatar-upload")),
        CatalogEvent::ScrollTo(section) => {
            *ctx.active_section = section;
            scroll_to(section)
        }
    }
}

pub fn handle_sidebar_message(
    ctx: &mut UpdateContext<'_>,
    message: sidebar::Message,
) -> Task<Message> {
    match sidebar::update(message, ctx.active_section) {
        SidebarEvent::ScrollTo(section) => scroll_to(section),
    }
}

pub fn handle_header_message(
    ctx: &mut UpdateContext<'_>,
    message: header::Message,
) -> Task<Message> {
    match header::update(message, ctx.query, *ctx.theme_mode) {
        HeaderEvent::None => Task::none(),
        HeaderEvent::ThemeChanged(mode) => {
            *ctx.theme_mode = mode;
            ctx.config.general.theme_mode = mode;
            tracing::info!(theme = ?mode, "theme changed");
            persist_preferences(ctx)
        }
        HeaderEvent::LanguageChanged(locale) => {
            tracing::info!(locale = %locale, "language changed");
            ctx.config.general.language = Some(locale.to_string());
            ctx.i18n.set_locale(locale);
            persist_preferences(ctx)
        }
    }
}

/// Snaps the catalog scrollable to the start of `section`.
fn scroll_to(section: Section) -> Task<Message> {
    operation::snap_to(
        Id::new(SCROLLABLE_ID),
        RelativeOffset {
            x: 0.0,
            y: section.relative_offset(),
        },
    )
}

/// Opens the native image picker; the chosen file name comes back to the
/// catalog as `AvatarPicked`.
fn pick_avatar(title: String) -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(title)
                .add_filter("image", &["png", "jpg", "jpeg", "gif", "webp"])
                .pick_file()
                .await
                .map(|handle| handle.file_name())
        },
        |file| Message::Catalog(catalog::Message::AvatarPicked(file)),
    )
}

/// Writes the current preferences to disk.
///
/// Guarded during tests to keep isolation: tests exercise persistence through
/// `config::save_to_path` instead.
fn persist_preferences(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if cfg!(test) {
        return Task::none();
    }

    match config::save(ctx.config) {
        Ok(()) => Task::none(),
        Err(error) => {
            tracing::warn!(%error, "failed to save config");
            let title = ctx.i18n.tr(error.i18n_key());
            ctx.notify(title, error.to_string(), Category::Error)
        }
    }
}
