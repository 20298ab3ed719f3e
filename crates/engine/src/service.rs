// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification service: permission tracking, display and worker
//! registration over an injected [`NotificationPlatform`].
//!
//! State is limited to the permission, the registered worker and the
//! in-flight or successful registration. It can change between the moment
//! a caller reads it and the moment an asynchronous platform answer lands.
//!
//! `request_permission`, `create` (once polled), `register_service_worker`
//! and `deregister_service_worker` spawn onto the Tokio runtime and must be
//! called from within one.

use crate::env;
use crate::error::NotificationError;
use crate::registration::{Registration, RegistrationOutcome};
use crate::stream::{Driver, NotificationStream, StreamItem};
use parking_lot::Mutex;
use pn_adapters::{BackgroundWorker, NotificationHandle, NotificationPlatform, NotificationSignal};
use pn_core::{LifecycleEvent, NotificationOptions, Permission, WorkerReady};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::Instrument;

/// Service settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Locator used when registration is requested without one
    pub worker_locator: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            worker_locator: env::DEFAULT_WORKER_LOCATOR.to_string(),
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        Self {
            worker_locator: env::worker_locator(),
        }
    }
}

struct ServiceState<W> {
    permission: Permission,
    worker: Option<W>,
    registration: Option<Registration>,
}

impl<W> ServiceState<W> {
    /// `attempt` is still the memoized registration.
    fn is_current(&self, attempt: &Registration) -> bool {
        self.registration
            .as_ref()
            .is_some_and(|memo| memo.same_as(attempt))
    }
}

fn abandoned() -> NotificationError {
    NotificationError::RegistrationFailed("worker deregistered during registration".to_string())
}

struct Inner<P: NotificationPlatform> {
    platform: P,
    config: ServiceConfig,
    state: Mutex<ServiceState<P::Worker>>,
}

/// Facade over a host notification platform.
pub struct NotificationService<P: NotificationPlatform> {
    inner: Arc<Inner<P>>,
}

impl<P: NotificationPlatform> Clone for NotificationService<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P: NotificationPlatform> NotificationService<P> {
    /// Create the service, reading the ambient permission state.
    ///
    /// Unsupported platforms start out `Denied`.
    pub fn new(platform: P, config: ServiceConfig) -> Self {
        let supported = platform.has_notifications() || platform.has_worker_display();
        let permission = if supported {
            platform.permission()
        } else {
            Permission::Denied
        };
        tracing::debug!(supported, %permission, "notification service created");
        Self {
            inner: Arc::new(Inner {
                platform,
                config,
                state: Mutex::new(ServiceState {
                    permission,
                    worker: None,
                    registration: None,
                }),
            }),
        }
    }

    pub fn platform(&self) -> &P {
        &self.inner.platform
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.inner.config
    }

    /// Direct display or worker-driven display is available.
    pub fn is_supported(&self) -> bool {
        let platform = &self.inner.platform;
        platform.has_notifications() || platform.has_worker_display()
    }

    pub fn permission(&self) -> Permission {
        self.inner.state.lock().permission
    }

    /// Worker stored by the last successful registration
    pub fn worker(&self) -> Option<P::Worker> {
        self.inner.state.lock().worker.clone()
    }

    /// Prompt for permission without waiting for the answer.
    ///
    /// The answer updates [`NotificationService::permission`] whenever the
    /// platform responds. Does nothing without direct display support.
    pub fn request_permission(&self) {
        if !self.inner.platform.has_notifications() {
            tracing::debug!("permission prompt skipped, notifications not available");
            return;
        }
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            inner.request_permission().await;
        });
    }

    /// Prompt for permission and return the resulting state.
    pub async fn resolve_permission(&self) -> Permission {
        if !self.inner.platform.has_notifications() {
            return self.permission();
        }
        self.inner.request_permission().await
    }

    /// Display a notification and stream its lifecycle events.
    ///
    /// Nothing happens until the stream is first polled. Support and
    /// permission are checked at that point; a failed check ends the
    /// stream with an error and the platform is never asked to display.
    pub fn create(
        &self,
        title: impl Into<String>,
        options: Option<NotificationOptions>,
    ) -> NotificationStream {
        let inner = Arc::clone(&self.inner);
        let title = title.into();
        let options = options.unwrap_or_default();
        NotificationStream::new(move |tx| {
            let span = tracing::info_span!("notification.create", %title);
            let driver: Driver = Box::pin(inner.drive(title, options, tx).instrument(span));
            driver
        })
    }

    /// Register the background worker at `locator` (configured default when
    /// `None`).
    ///
    /// The registration starts immediately. While it is in flight or after it
    /// succeeded, further calls return the same [`Registration`] without
    /// registering again. A failed registration is not reused.
    pub fn register_service_worker(&self, locator: Option<&str>) -> Registration {
        let locator = locator
            .map(str::to_string)
            .unwrap_or_else(|| self.inner.config.worker_locator.clone());

        let (registration, resolver) = {
            let mut state = self.inner.state.lock();
            if let Some(existing) = state.registration.as_ref().filter(|r| !r.has_failed()) {
                if existing.locator() != locator {
                    tracing::warn!(
                        requested = %locator,
                        active = existing.locator(),
                        "worker registration already exists, reusing it"
                    );
                }
                return existing.clone();
            }
            let (registration, resolver) = Registration::pending(&locator);
            state.registration = Some(registration.clone());
            (registration, resolver)
        };

        let inner = Arc::clone(&self.inner);
        let span = tracing::info_span!("worker.register", %locator);
        let attempt = registration.clone();
        tokio::spawn(
            async move {
                let outcome = inner.register(&attempt).await;
                match &outcome {
                    Ok(ready) => tracing::info!(
                        already_active = ready.already_active,
                        "ready to show notifications"
                    ),
                    Err(e) => tracing::warn!(error = %e, "worker registration failed"),
                }
                resolver.resolve(outcome);
            }
            .instrument(span),
        );
        registration
    }

    /// Unregister the held worker, if any. The outcome is only logged.
    ///
    /// A registration still in flight is abandoned: it settles with
    /// `RegistrationFailed` and its worker is never held.
    pub fn deregister_service_worker(&self) {
        let worker = {
            let mut state = self.inner.state.lock();
            state.registration = None;
            state.worker.take()
        };
        let Some(worker) = worker else {
            tracing::debug!("no worker registered, nothing to deregister");
            return;
        };
        tokio::spawn(async move {
            match worker.unregister().await {
                Ok(_) => tracing::info!(locator = worker.locator(), "worker deregistered"),
                Err(e) => tracing::warn!(
                    locator = worker.locator(),
                    error = %e,
                    "worker deregistration failed"
                ),
            }
        });
    }
}

impl<P: NotificationPlatform> Inner<P> {
    async fn request_permission(&self) -> Permission {
        let permission = self.platform.request_permission().await;
        self.state.lock().permission = permission;
        tracing::info!(%permission, "permission updated");
        permission
    }

    async fn register(&self, attempt: &Registration) -> RegistrationOutcome {
        if !self.platform.has_worker() || !self.platform.has_worker_display() {
            return Err(NotificationError::WorkerUnavailable);
        }

        let worker = self
            .platform
            .register_worker(attempt.locator())
            .await
            .map_err(NotificationError::registration)?;
        {
            let mut state = self.state.lock();
            if !state.is_current(attempt) {
                return Err(abandoned());
            }
            state.worker = Some(worker.clone());
        }

        let locator = worker.locator().to_string();
        let already_active = worker.is_activated();
        if !already_active {
            if let Err(e) = worker.ready().await {
                let mut state = self.state.lock();
                if state.is_current(attempt) {
                    state.worker = None;
                }
                return Err(NotificationError::registration(e));
            }
        }

        if !self.state.lock().is_current(attempt) {
            return Err(abandoned());
        }
        Ok(WorkerReady {
            locator,
            already_active,
        })
    }

    async fn drive(
        self: Arc<Self>,
        title: String,
        options: NotificationOptions,
        tx: mpsc::UnboundedSender<StreamItem>,
    ) {
        let (worker, permission) = {
            let state = self.state.lock();
            (state.worker.clone(), state.permission)
        };

        if !self.platform.has_notifications() && worker.is_none() {
            tracing::warn!("notifications are not available");
            let _ = tx.send(Err(NotificationError::UnsupportedPlatform));
            return;
        }
        if !permission.is_granted() {
            tracing::warn!(%permission, "permission not granted");
            let _ = tx.send(Err(NotificationError::PermissionDenied));
            return;
        }

        let handle = match self.display(worker.as_ref(), &title, &options).await {
            Ok(handle) => handle,
            Err(e) => {
                let _ = tx.send(Err(e));
                return;
            }
        };
        forward(handle, tx).await;
    }

    async fn display(
        &self,
        worker: Option<&P::Worker>,
        title: &str,
        options: &NotificationOptions,
    ) -> Result<NotificationHandle, NotificationError> {
        let Some(worker) = worker else {
            return self
                .platform
                .show(title, options)
                .await
                .map_err(NotificationError::display);
        };

        let returned = worker
            .show_notification(title, options)
            .await
            .map_err(NotificationError::display)?;
        if let Some(handle) = returned {
            return Ok(handle);
        }

        // No handle from the worker: assume the newest visible notification
        // is ours. Another display landing in between makes this wrong.
        let visible = worker
            .notifications()
            .await
            .map_err(NotificationError::display)?;
        tracing::debug!(visible = visible.len(), "correlating via visible notifications");
        visible.into_iter().last().ok_or_else(|| {
            NotificationError::Display("worker reports no visible notifications".to_string())
        })
    }
}

/// Translate platform signals into lifecycle events until a terminal one.
async fn forward(handle: NotificationHandle, tx: mpsc::UnboundedSender<StreamItem>) {
    let notification = handle.id().clone();
    let mut signals = handle.subscribe();
    drop(handle);

    while let Some(signal) = signals.recv().await {
        let event = match signal {
            NotificationSignal::Show(event) => LifecycleEvent::Shown {
                notification: notification.clone(),
                event,
            },
            NotificationSignal::Click(event) => LifecycleEvent::Clicked {
                notification: notification.clone(),
                event,
            },
            NotificationSignal::Error(event) => LifecycleEvent::Errored {
                notification: notification.clone(),
                event,
            },
            NotificationSignal::Close => LifecycleEvent::Closed {
                notification: notification.clone(),
            },
        };
        let terminal = event.is_terminal();
        tracing::debug!(%notification, event = event.name(), "lifecycle event");
        if tx.send(Ok(event)).is_err() {
            tracing::debug!(%notification, "stream dropped, notification left to the platform");
            return;
        }
        if terminal {
            return;
        }
    }
    tracing::debug!(%notification, "platform released notification");
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
