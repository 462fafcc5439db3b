// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration settings.

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default time a toast stays on screen before it expires (in milliseconds).
pub const DEFAULT_TOAST_LIFETIME_MS: u64 = 3_000;

/// Shortest accepted toast lifetime (in milliseconds).
pub const MIN_TOAST_LIFETIME_MS: u64 = 500;

/// Longest accepted toast lifetime (in milliseconds).
pub const MAX_TOAST_LIFETIME_MS: u64 = 60_000;

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale used when neither CLI, config nor OS provide a supported one.
pub const DEFAULT_LOCALE: &str = "en-US";

const _: () = {
    assert!(MIN_TOAST_LIFETIME_MS <= DEFAULT_TOAST_LIFETIME_MS);
    assert!(DEFAULT_TOAST_LIFETIME_MS <= MAX_TOAST_LIFETIME_MS);
};
