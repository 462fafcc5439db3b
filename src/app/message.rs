// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::catalog;
use crate::ui::header;
use crate::ui::notifications;
use crate::ui::sidebar;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Catalog(catalog::Message),
    Sidebar(sidebar::Message),
    Header(header::Message),
    Notification(notifications::NotificationMessage),
    /// Escape was pressed while an overlay was open.
    EscapePressed,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional data directory override (for log files).
    /// Takes precedence over `HAKKA_SHOWCASE_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `HAKKA_SHOWCASE_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
