// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op notification platform.

use super::{BackgroundWorker, NotificationPlatform, PlatformError};
use crate::handle::NotificationHandle;
use async_trait::async_trait;
use pn_core::{NotificationOptions, Permission};

/// Platform that reports no capabilities.
///
/// Used when notifications are disabled or the host has no notification
/// service. Permission is always denied.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpPlatform;

impl NoOpPlatform {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotificationPlatform for NoOpPlatform {
    type Worker = NoOpWorker;

    fn has_notifications(&self) -> bool {
        false
    }

    fn has_worker(&self) -> bool {
        false
    }

    fn has_worker_display(&self) -> bool {
        false
    }

    fn permission(&self) -> Permission {
        Permission::Denied
    }

    async fn request_permission(&self) -> Permission {
        Permission::Denied
    }

    async fn show(
        &self,
        _title: &str,
        _options: &NotificationOptions,
    ) -> Result<NotificationHandle, PlatformError> {
        Err(PlatformError::Unsupported)
    }

    async fn register_worker(&self, _locator: &str) -> Result<NoOpWorker, PlatformError> {
        Err(PlatformError::Unsupported)
    }
}

/// Worker type of [`NoOpPlatform`]; never handed out.
#[derive(Clone, Debug, Default)]
pub struct NoOpWorker {
    locator: String,
}

#[async_trait]
impl BackgroundWorker for NoOpWorker {
    fn locator(&self) -> &str {
        &self.locator
    }

    fn is_activated(&self) -> bool {
        false
    }

    async fn ready(&self) -> Result<(), PlatformError> {
        Err(PlatformError::Unsupported)
    }

    async fn show_notification(
        &self,
        _title: &str,
        _options: &NotificationOptions,
    ) -> Result<Option<NotificationHandle>, PlatformError> {
        Err(PlatformError::Unsupported)
    }

    async fn notifications(&self) -> Result<Vec<NotificationHandle>, PlatformError> {
        Ok(Vec::new())
    }

    async fn unregister(&self) -> Result<bool, PlatformError> {
        Ok(false)
    }
}

#[cfg(test)]
#[path = "noop_tests.rs"]
mod tests;
