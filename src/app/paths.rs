// SPDX-License-Identifier: MPL-2.0
//! Directory resolution for preferences and log files.
//!
//! Both directories resolve in the same order:
//! 1. **Explicit override** passed to a `_with_override()` function (tests)
//! 2. **CLI argument** (`--config-dir`, `--data-dir`) registered through [`init_cli_overrides`]
//! 3. **Environment variable** (`HAKKA_SHOWCASE_CONFIG_DIR`, `HAKKA_SHOWCASE_DATA_DIR`)
//! 4. **Platform default** from the `dirs` crate, with [`APP_NAME`] appended

use std::path::PathBuf;
use std::sync::OnceLock;

/// Directory name used under the platform config/data roots.
pub const APP_NAME: &str = "HakkaShowcase";

/// Environment variable overriding the data directory (logs).
pub const ENV_DATA_DIR: &str = "HAKKA_SHOWCASE_DATA_DIR";

/// Environment variable overriding the config directory (settings.toml).
pub const ENV_CONFIG_DIR: &str = "HAKKA_SHOWCASE_CONFIG_DIR";

const LOG_DIR_NAME: &str = "logs";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Registers the `--data-dir` / `--config-dir` values given on the command line.
///
/// Only the first call has any effect; later calls are ignored so that
/// tests constructing several apps in one process do not panic.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    let _ = CLI_DATA_DIR.set(data_dir.map(PathBuf::from));
    let _ = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from));
}

fn cli_data_dir() -> Option<PathBuf> {
    CLI_DATA_DIR.get().and_then(Clone::clone)
}

fn cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn env_dir(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Returns the data directory (holds the `logs/` folder).
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Returns the data directory, preferring `override_path` when given.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(cli_data_dir)
        .or_else(|| env_dir(ENV_DATA_DIR))
        .or_else(|| dirs::data_dir().map(|path| path.join(APP_NAME)))
}

/// Returns the config directory (holds `settings.toml`).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the config directory, preferring `override_path` when given.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(cli_config_dir)
        .or_else(|| env_dir(ENV_CONFIG_DIR))
        .or_else(|| dirs::config_dir().map(|path| path.join(APP_NAME)))
}

/// Returns the directory rolling log files are written to.
pub fn get_log_dir() -> Option<PathBuf> {
    get_app_data_dir().map(|path| path.join(LOG_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Env vars are process-wide; serialize the tests that touch them.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn app_config_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }
    }

    #[test]
    fn override_path_takes_precedence_for_config_dir() {
        let override_path = PathBuf::from("/custom/config/path");
        let result = get_app_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn env_var_overrides_default_data_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/test/data/dir");

        assert_eq!(get_app_data_dir(), Some(PathBuf::from("/test/data/dir")));
        assert_eq!(
            get_log_dir(),
            Some(PathBuf::from("/test/data/dir").join(LOG_DIR_NAME))
        );

        std::env::remove_var(ENV_DATA_DIR);
    }

    #[test]
    fn empty_env_var_uses_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        if let Some(path) = get_app_config_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn override_path_takes_precedence_over_env_var() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/env/path");

        let override_path = PathBuf::from("/override/path");
        let result = get_app_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));

        std::env::remove_var(ENV_CONFIG_DIR);
    }
}
