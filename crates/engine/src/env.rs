// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the engine crate.

pub(crate) const DEFAULT_WORKER_LOCATOR: &str = "/push-notifications-worker";

/// Locator used when registration is requested without one.
pub fn worker_locator() -> String {
    std::env::var("PN_WORKER_LOCATOR")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_WORKER_LOCATOR.to_string())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
