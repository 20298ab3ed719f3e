// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification platform adapters

mod desktop;
mod noop;

pub use desktop::{DesktopConfig, DesktopPlatform, DesktopWorker};
pub use noop::{NoOpPlatform, NoOpWorker};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakePlatform, FakeRegistration, FakeWorker, PlatformCall};

use crate::handle::NotificationHandle;
use async_trait::async_trait;
use pn_core::{NotificationOptions, Permission};
use thiserror::Error;

/// Errors from platform operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    #[error("capability not available on this platform")]
    Unsupported,
    #[error("registration failed: {0}")]
    Registration(String),
    #[error("display failed: {0}")]
    Display(String),
    #[error("worker error: {0}")]
    Worker(String),
}

/// Host notification capability.
///
/// Covers both the direct display path and registration of the background
/// worker that can display on the application's behalf.
#[async_trait]
pub trait NotificationPlatform: Clone + Send + Sync + 'static {
    type Worker: BackgroundWorker;

    /// Direct notification display is available
    fn has_notifications(&self) -> bool;

    /// Background workers can be registered
    fn has_worker(&self) -> bool;

    /// Registered workers can display notifications
    fn has_worker_display(&self) -> bool;

    /// Ambient permission state
    fn permission(&self) -> Permission;

    /// Prompt the user for permission and return their answer
    async fn request_permission(&self) -> Permission;

    /// Display a notification directly
    async fn show(
        &self,
        title: &str,
        options: &NotificationOptions,
    ) -> Result<NotificationHandle, PlatformError>;

    /// Register a background worker at `locator`.
    ///
    /// Registering a locator that already has a live worker returns that
    /// worker.
    async fn register_worker(&self, locator: &str) -> Result<Self::Worker, PlatformError>;
}

/// A registered background worker.
#[async_trait]
pub trait BackgroundWorker: Clone + Send + Sync + 'static {
    fn locator(&self) -> &str;

    /// The worker finished installing and can display notifications
    fn is_activated(&self) -> bool;

    /// Wait until the worker is activated
    async fn ready(&self) -> Result<(), PlatformError>;

    /// Display a notification through the worker.
    ///
    /// Returns the handle when the worker can identify the notification it
    /// just displayed, `None` when callers must look it up via
    /// [`BackgroundWorker::notifications`].
    async fn show_notification(
        &self,
        title: &str,
        options: &NotificationOptions,
    ) -> Result<Option<NotificationHandle>, PlatformError>;

    /// Currently visible notifications, oldest first
    async fn notifications(&self) -> Result<Vec<NotificationHandle>, PlatformError>;

    /// Remove the registration. Returns `false` if it was already gone.
    async fn unregister(&self) -> Result<bool, PlatformError>;
}
