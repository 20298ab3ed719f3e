// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

// --- Color ---

pub fn no_color() -> bool {
    std::env::var("NO_COLOR").is_ok_and(|v| v == "1")
}

pub fn force_color() -> bool {
    std::env::var("COLOR").is_ok_and(|v| v == "1")
}

// --- Platform ---

/// `PN_DISABLED=1` swaps the desktop platform for one without capabilities
pub fn disabled() -> bool {
    std::env::var("PN_DISABLED").is_ok_and(|v| v == "1")
}

// --- Logging ---

/// Log filter directive: PN_LOG > RUST_LOG
pub fn log_filter() -> Option<String> {
    std::env::var("PN_LOG")
        .ok()
        .or_else(|| std::env::var("RUST_LOG").ok())
        .filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
