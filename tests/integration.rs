// SPDX-License-Identifier: MPL-2.0
use hakka_showcase::app::config::{self, Config, DEFAULT_TOAST_LIFETIME_MS};
use hakka_showcase::app::i18n::fluent::I18n;
use hakka_showcase::ui::notifications::{
    expire_after, Category, ExpiryHandle, Manager, Notification, NotificationMessage, Store,
};
use hakka_showcase::ui::theming::ThemeMode;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut cfg = Config::default();
    cfg.general.language = Some("en-US".to_string());
    config::save_to_path(&cfg, &path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    cfg.general.language = Some("fr".to_string());
    config::save_to_path(&cfg, &path).expect("Failed to write french config file");
    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("toast-quest-title"), "Quête mise à jour");
}

#[test]
fn test_cli_language_beats_config() {
    let mut cfg = Config::default();
    cfg.general.language = Some("fr".to_string());
    let i18n = I18n::new(Some("en-US".to_string()), &cfg);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_preferences_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut cfg = Config::default();
    cfg.general.theme_mode = ThemeMode::Dark;
    cfg.notifications.lifetime_ms = Some(5_000);
    config::save_with_override(&cfg, Some(dir.path().to_path_buf())).expect("save");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, cfg);
    assert_eq!(loaded.notifications.lifetime(), Duration::from_millis(5_000));
}

#[test]
fn test_corrupt_config_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[general\nlanguage = ").expect("write");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    assert_eq!(
        loaded.notifications.lifetime(),
        Duration::from_millis(DEFAULT_TOAST_LIFETIME_MS)
    );
}

#[test]
fn test_toast_lifetime_is_clamped() {
    let mut cfg = Config::default();
    cfg.notifications.lifetime_ms = Some(1);
    assert_eq!(cfg.notifications.lifetime(), Duration::from_millis(500));
    cfg.notifications.lifetime_ms = Some(u64::MAX);
    assert_eq!(cfg.notifications.lifetime(), Duration::from_millis(60_000));
}

#[test]
fn test_store_dismiss_cancels_only_its_own_timer() {
    let mut store = Store::new();
    let quest_cancelled = Rc::new(Cell::new(false));
    let maintenance_cancelled = Rc::new(Cell::new(false));

    let quest = {
        let flag = Rc::clone(&quest_cancelled);
        store.push(
            Notification::new("Quest Updated", "You completed the tutorial.", "success"),
            move |_| ExpiryHandle::new(move || flag.set(true)),
        )
    };
    let maintenance = {
        let flag = Rc::clone(&maintenance_cancelled);
        store.push(
            Notification::new("Server Maintenance", "Down at 03:00 UTC", "info"),
            move |_| ExpiryHandle::new(move || flag.set(true)),
        )
    };

    assert!(store.dismiss(quest));
    assert!(quest_cancelled.get());
    assert!(!maintenance_cancelled.get());

    let remaining = store.list();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id(), maintenance);
    assert_eq!(remaining[0].title(), "Server Maintenance");

    // Dismissing twice is a no-op.
    assert!(!store.dismiss(quest));
}

#[test]
fn test_manager_accepts_unknown_categories() {
    let mut manager = Manager::new();
    let (id, _expiry) = manager.publish("Guild Invite", "Join the Daikon Club?", "guild");

    let list = manager.list();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id(), id);
    assert_eq!(list[0].category(), &Category::Other("guild".to_string()));
}

#[test]
fn test_manager_keeps_insertion_order() {
    let mut manager = Manager::new();
    let titles = ["first", "second", "third"];
    for title in titles {
        let _ = manager.publish(title, "", Category::Info);
    }
    let listed: Vec<String> = manager.visible().map(|n| n.title().to_string()).collect();
    assert_eq!(listed, titles);
}

#[tokio::test(start_paused = true)]
async fn test_toast_expires_after_configured_lifetime() {
    let mut cfg = Config::default();
    cfg.notifications.lifetime_ms = Some(1_000);
    let mut manager = Manager::with_lifetime(cfg.notifications.lifetime());
    let (id, _task) = manager.publish("Quest Updated", "You completed the tutorial.", "success");

    let start = tokio::time::Instant::now();
    let message = expire_after(id, manager.lifetime()).await;
    assert!(start.elapsed() >= Duration::from_millis(1_000));
    assert_eq!(message, NotificationMessage::Expired(id));

    manager.handle_message(&message);
    assert!(!manager.has_notifications());
}

#[tokio::test(start_paused = true)]
async fn test_manual_dismiss_then_late_expiry_is_harmless() {
    let mut manager = Manager::new();
    let (quest, _) = manager.publish("Quest Updated", "You completed the tutorial.", "success");
    let (maintenance, _) = manager.publish("Server Maintenance", "Down at 03:00 UTC", "info");

    manager.handle_message(&NotificationMessage::Dismiss(quest));
    let late = expire_after(quest, manager.lifetime()).await;
    manager.handle_message(&late);

    let list = manager.list();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id(), maintenance);
}
