// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced platform wrappers for consistent observability

use crate::handle::NotificationHandle;
use crate::notify::{BackgroundWorker, NotificationPlatform, PlatformError};
use async_trait::async_trait;
use pn_core::{NotificationOptions, Permission};
use tracing::Instrument;

/// Wrapper that adds tracing to any NotificationPlatform
#[derive(Clone)]
pub struct TracedPlatform<P> {
    inner: P,
}

impl<P> TracedPlatform<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

#[async_trait]
impl<P: NotificationPlatform> NotificationPlatform for TracedPlatform<P> {
    type Worker = TracedWorker<P::Worker>;

    fn has_notifications(&self) -> bool {
        self.inner.has_notifications()
    }

    fn has_worker(&self) -> bool {
        self.inner.has_worker()
    }

    fn has_worker_display(&self) -> bool {
        self.inner.has_worker_display()
    }

    fn permission(&self) -> Permission {
        self.inner.permission()
    }

    async fn request_permission(&self) -> Permission {
        let permission = self.inner.request_permission().await;
        tracing::info_span!("platform.permission")
            .in_scope(|| tracing::info!(%permission, "answered"));
        permission
    }

    async fn show(
        &self,
        title: &str,
        options: &NotificationOptions,
    ) -> Result<NotificationHandle, PlatformError> {
        async {
            tracing::debug!(tag = ?options.tag, "displaying");
            let start = std::time::Instant::now();
            let result = self.inner.show(title, options).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(h) => tracing::info!(id = %h.id(), elapsed_ms, "notification displayed"),
                Err(e) => tracing::error!(elapsed_ms, error = %e, "display failed"),
            }
            result
        }
        .instrument(tracing::info_span!("platform.show", title))
        .await
    }

    async fn register_worker(&self, locator: &str) -> Result<Self::Worker, PlatformError> {
        async {
            tracing::info!("registering");
            let start = std::time::Instant::now();
            let result = self.inner.register_worker(locator).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(w) => {
                    tracing::info!(activated = w.is_activated(), elapsed_ms, "worker registered")
                }
                Err(e) => tracing::error!(elapsed_ms, error = %e, "registration failed"),
            }
            result.map(TracedWorker::new)
        }
        .instrument(tracing::info_span!("platform.register", locator))
        .await
    }
}

/// Wrapper that adds tracing to any BackgroundWorker
#[derive(Clone)]
pub struct TracedWorker<W> {
    inner: W,
}

impl<W> TracedWorker<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &W {
        &self.inner
    }
}

#[async_trait]
impl<W: BackgroundWorker> BackgroundWorker for TracedWorker<W> {
    fn locator(&self) -> &str {
        self.inner.locator()
    }

    fn is_activated(&self) -> bool {
        self.inner.is_activated()
    }

    async fn ready(&self) -> Result<(), PlatformError> {
        let locator = self.inner.locator();
        async {
            let start = std::time::Instant::now();
            let result = self.inner.ready().await;
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(()) => tracing::info!(elapsed_ms, "worker ready"),
                Err(e) => tracing::error!(elapsed_ms, error = %e, "worker failed to activate"),
            }
            result
        }
        .instrument(tracing::info_span!("worker.ready", locator))
        .await
    }

    async fn show_notification(
        &self,
        title: &str,
        options: &NotificationOptions,
    ) -> Result<Option<NotificationHandle>, PlatformError> {
        let locator = self.inner.locator();
        tracing::info_span!("worker.show", locator, title)
            .in_scope(|| tracing::debug!(tag = ?options.tag, "displaying"));
        let result = self.inner.show_notification(title, options).await;
        match &result {
            Ok(Some(h)) => tracing::info!(locator, id = %h.id(), "worker displayed notification"),
            Ok(None) => tracing::info!(locator, "worker displayed notification without handle"),
            Err(e) => tracing::error!(locator, error = %e, "worker display failed"),
        }
        result
    }

    async fn notifications(&self) -> Result<Vec<NotificationHandle>, PlatformError> {
        let result = self.inner.notifications().await;
        tracing::trace!(
            locator = self.inner.locator(),
            visible = ?result.as_ref().map(|v| v.len()).ok(),
            "listed"
        );
        result
    }

    async fn unregister(&self) -> Result<bool, PlatformError> {
        let result = self.inner.unregister().await;
        tracing::info_span!("worker.unregister", locator = self.inner.locator()).in_scope(
            || match &result {
                Ok(true) => tracing::info!("unregistered"),
                Ok(false) => tracing::debug!("already unregistered"),
                Err(e) => tracing::warn!(error = %e, "unregister failed"),
            },
        );
        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
