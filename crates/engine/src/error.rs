// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types surfaced on notification and registration streams

use pn_adapters::PlatformError;
use thiserror::Error;

/// Errors delivered through a notification or registration stream.
///
/// Every variant is terminal for the operation that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    #[error("notifications are not available in this environment")]
    UnsupportedPlatform,
    #[error("the user hasn't granted permission to show notifications")]
    PermissionDenied,
    #[error("background worker notifications are not available in this environment")]
    WorkerUnavailable,
    #[error("error registering background worker: {0}")]
    RegistrationFailed(String),
    #[error("notification display failed: {0}")]
    Display(String),
}

impl NotificationError {
    pub(crate) fn display(err: PlatformError) -> Self {
        match err {
            PlatformError::Display(message) => NotificationError::Display(message),
            other => NotificationError::Display(other.to_string()),
        }
    }

    pub(crate) fn registration(err: PlatformError) -> Self {
        match err {
            PlatformError::Registration(message) => NotificationError::RegistrationFailed(message),
            other => NotificationError::RegistrationFailed(other.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
