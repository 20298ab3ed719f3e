// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the adapters crate.

use pn_core::Permission;

/// Application name shown by the desktop notification server (default: `pn`).
pub fn app_name() -> String {
    std::env::var("PN_APP_NAME")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| "pn".to_string())
}

/// Permission reported by the desktop platform (default: granted).
///
/// Desktop notification servers have no consent prompt, so the state is
/// configured instead. Unparseable values fall back to `default`, which
/// blocks display until changed.
pub fn permission() -> Permission {
    match std::env::var("PN_PERMISSION") {
        Ok(value) => value.parse().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring PN_PERMISSION");
            Permission::Default
        }),
        Err(_) => Permission::Granted,
    }
}

/// Default display timeout; unset leaves it to the notification server.
pub fn timeout_ms() -> Option<u32> {
    std::env::var("PN_TIMEOUT_MS")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
}

/// Bundle identifier notifications are attributed to on macOS.
#[cfg(target_os = "macos")]
pub fn macos_bundle() -> String {
    std::env::var("PN_MACOS_BUNDLE").unwrap_or_else(|_| "com.apple.Terminal".to_string())
}
