// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the catalog, the
//! navigation chrome and the toast queue.
//!
//! The `App` struct owns localization, persisted preferences and the
//! notification manager. Components report [`Event`](crate::ui::catalog::Event)s
//! upward and this module turns them into side effects: publishing toasts,
//! writing the clipboard, opening file dialogs or saving the config.

pub mod config;
pub mod i18n;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::ui::catalog::{self, Section};
use crate::ui::notifications::{self, Category};
use crate::ui::theming::ThemeMode;
use config::Config;
use i18n::fluent::I18n;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    theme_mode: ThemeMode,
    /// Toast queue shown in the bottom-right corner.
    notifications: notifications::Manager,
    catalog: catalog::State,
    /// Section highlighted in the sidebar.
    active_section: Section,
    /// Header search text, filters the sidebar.
    query: String,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("active_section", &self.active_section)
            .field("toasts", &self.notifications.visible_count())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 900;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            config: Config::default(),
            theme_mode: ThemeMode::default(),
            notifications: notifications::Manager::new(),
            catalog: catalog::State::default(),
            active_section: Section::Intro,
            query: String::new(),
        }
    }
}

impl App {
    /// Initializes application state from persisted preferences and CLI flags.
    ///
    /// A config that failed to load is replaced by defaults and reported as
    /// an error toast.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);
        let notifications = notifications::Manager::with_lifetime(config.notifications.lifetime());

        let mut app = Self {
            i18n,
            theme_mode: config.general.theme_mode,
            notifications,
            config,
            ..Self::default()
        };

        tracing::info!(
            locale = %app.i18n.current_locale(),
            theme = ?app.theme_mode,
            lifetime_ms = app.notifications.lifetime().as_millis() as u64,
            "application started"
        );

        let task = match config_warning {
            Some(key) => {
                tracing::warn!(key = %key, "configuration could not be loaded");
                app.notify_error(&key)
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(self.catalog.has_open_overlay()),
            subscription::create_spinner_subscription(self.catalog.loading),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            config: &mut self.config,
            theme_mode: &mut self.theme_mode,
            notifications: &mut self.notifications,
            catalog: &mut self.catalog,
            active_section: &mut self.active_section,
            query: &mut self.query,
        };

        match message {
            Message::Catalog(message) => update::handle_catalog_message(&mut ctx, message),
            Message::Sidebar(message) => update::handle_sidebar_message(&mut ctx, message),
            Message::Header(message) => update::handle_header_message(&mut ctx, message),
            Message::Notification(message) => {
                ctx.notifications.handle_message(&message);
                Task::none()
            }
            Message::EscapePressed => {
                update::handle_catalog_message(&mut ctx, catalog::Message::CloseOverlays)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            theme_mode: self.theme_mode,
            notifications: &self.notifications,
            catalog: &self.catalog,
            active_section: self.active_section,
            query: &self.query,
        })
    }

    /// Publishes an error toast whose title is the translated `key`.
    fn notify_error(&mut self, key: &str) -> Task<Message> {
        let (_, expiry) =
            self.notifications
                .publish(self.i18n.tr(key), String::new(), Category::Error);
        expiry.map(Message::Notification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::header;
    use crate::ui::notifications::NotificationMessage;
    use crate::ui::sidebar;

    fn english_app() -> App {
        let config = Config::default();
        App {
            i18n: I18n::new(Some("en-US".to_string()), &config),
            config,
            ..App::default()
        }
    }

    #[test]
    fn title_is_localized() {
        let app = english_app();
        assert_eq!(app.title(), "Hakka Daikon Showcase");
    }

    #[test]
    fn quick_toast_is_published_with_expected_content() {
        let mut app = english_app();
        let _ = app.update(Message::Catalog(catalog::Message::QuickToast(
            Category::Success,
        )));

        let list = app.notifications.list();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].title(), "Quest Updated");
        assert_eq!(list[0].description(), "You completed the tutorial.");
        assert_eq!(list[0].category(), &Category::Success);
    }

    #[test]
    fn dismiss_message_removes_the_toast() {
        let mut app = english_app();
        let _ = app.update(Message::Catalog(catalog::Message::QuickToast(Category::Info)));
        let id = app.notifications.list()[0].id();

        let _ = app.update(Message::Notification(NotificationMessage::Dismiss(id)));
        assert!(!app.notifications.has_notifications());

        // A late expiry for the same toast is a no-op.
        let _ = app.update(Message::Notification(NotificationMessage::Expired(id)));
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn sidebar_selection_updates_active_section() {
        let mut app = english_app();
        let _ = app.update(Message::Sidebar(sidebar::Message::Select(Section::Navigation)));
        assert_eq!(app.active_section, Section::Navigation);
    }

    #[test]
    fn escape_closes_open_overlays() {
        let mut app = english_app();
        let _ = app.update(Message::Catalog(catalog::Message::OpenModal));
        assert!(app.catalog.has_open_overlay());

        let _ = app.update(Message::EscapePressed);
        assert!(!app.catalog.has_open_overlay());
    }

    #[test]
    fn header_search_is_stored_on_app() {
        let mut app = english_app();
        let _ = app.update(Message::Header(header::Message::SearchChanged(
            "form".into(),
        )));
        assert_eq!(app.query, "form");
    }

    #[test]
    fn notify_error_uses_translated_key_as_title() {
        let mut app = english_app();
        let _ = app.notify_error("notification-config-load-error");
        let list = app.notifications.list();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].category(), &Category::Error);
        assert_ne!(list[0].title(), "notification-config-load-error");
    }
}
