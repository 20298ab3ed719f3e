// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors carrying a process exit code

use pn_engine::NotificationError;
use thiserror::Error;

/// Error that ends the process with a specific exit code.
///
/// An empty message exits without printing anything.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<NotificationError> for ExitError {
    fn from(err: NotificationError) -> Self {
        let code = match &err {
            NotificationError::UnsupportedPlatform => 2,
            NotificationError::PermissionDenied => 3,
            NotificationError::WorkerUnavailable => 4,
            NotificationError::RegistrationFailed(_) => 5,
            NotificationError::Display(_) => 6,
        };
        Self::new(code, err.to_string())
    }
}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
