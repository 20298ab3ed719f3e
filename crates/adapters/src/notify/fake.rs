// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake notification platform for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{BackgroundWorker, NotificationPlatform, PlatformError};
use crate::handle::{NotificationHandle, NotificationSignal};
use async_trait::async_trait;
use parking_lot::Mutex;
use pn_core::{IdGen, NotificationId, NotificationOptions, Permission, SequentialIdGen};
use std::sync::Arc;
use tokio::sync::watch;

/// Recorded platform call
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformCall {
    RequestPermission,
    Show {
        title: String,
        options: NotificationOptions,
    },
    RegisterWorker {
        locator: String,
    },
    WorkerReady {
        locator: String,
    },
    WorkerShow {
        locator: String,
        title: String,
        options: NotificationOptions,
    },
    WorkerNotifications {
        locator: String,
    },
    Unregister {
        locator: String,
    },
}

/// Scripted outcome of `register_worker`
#[derive(Debug, Clone, PartialEq)]
pub enum FakeRegistration {
    /// Succeed; `activated` workers are ready immediately, others wait for
    /// [`FakePlatform::activate_workers`]
    Succeed { activated: bool },
    Fail(String),
}

struct FakeState {
    notifications: bool,
    worker: bool,
    worker_display: bool,
    permission: Permission,
    prompt_answer: Permission,
    registration: FakeRegistration,
    display_error: Option<String>,
    ready_error: Option<String>,
    auto_show: bool,
    worker_returns_handle: bool,
    shown: Vec<NotificationHandle>,
    workers: Vec<FakeWorker>,
    calls: Vec<PlatformCall>,
    ids: SequentialIdGen,
}

impl FakeState {
    fn display(
        &mut self,
        title: &str,
        options: &NotificationOptions,
    ) -> Result<NotificationHandle, PlatformError> {
        if let Some(message) = &self.display_error {
            return Err(PlatformError::Display(message.clone()));
        }
        let handle = NotificationHandle::new(
            NotificationId::new(self.ids.next()),
            title,
            options.tag.clone(),
        );
        if self.auto_show {
            handle.emit(NotificationSignal::Show(serde_json::Value::Null));
        }
        self.shown.push(handle.clone());
        Ok(handle)
    }
}

/// Fake notification platform for testing
///
/// Starts fully capable with permission granted, registrations that
/// succeed with an active worker, and notifications that report `Show`
/// as soon as they are displayed.
#[derive(Clone)]
pub struct FakePlatform {
    inner: Arc<Mutex<FakeState>>,
}

impl Default for FakePlatform {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeState {
                notifications: true,
                worker: true,
                worker_display: true,
                permission: Permission::Granted,
                prompt_answer: Permission::Granted,
                registration: FakeRegistration::Succeed { activated: true },
                display_error: None,
                ready_error: None,
                auto_show: true,
                worker_returns_handle: true,
                shown: Vec::new(),
                workers: Vec::new(),
                calls: Vec::new(),
                ids: SequentialIdGen::new("n"),
            })),
        }
    }
}

impl FakePlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform without any notification capability
    pub fn unsupported() -> Self {
        let fake = Self::default();
        fake.set_capabilities(false, false, false);
        fake
    }

    pub fn set_capabilities(&self, notifications: bool, worker: bool, worker_display: bool) {
        let mut state = self.inner.lock();
        state.notifications = notifications;
        state.worker = worker;
        state.worker_display = worker_display;
    }

    /// Set the ambient permission state
    pub fn set_permission(&self, permission: Permission) {
        self.inner.lock().permission = permission;
    }

    /// Set what the user answers when prompted
    pub fn set_prompt_answer(&self, permission: Permission) {
        self.inner.lock().prompt_answer = permission;
    }

    pub fn set_registration(&self, registration: FakeRegistration) {
        self.inner.lock().registration = registration;
    }

    /// Make every display call fail with `message`
    pub fn set_display_error(&self, message: impl Into<String>) {
        self.inner.lock().display_error = Some(message.into());
    }

    /// Make every wait for worker activation fail with `message`
    pub fn set_ready_error(&self, message: impl Into<String>) {
        self.inner.lock().ready_error = Some(message.into());
    }

    /// Whether displayed notifications report `Show` immediately
    pub fn set_auto_show(&self, auto_show: bool) {
        self.inner.lock().auto_show = auto_show;
    }

    /// Whether workers return the handle from `show_notification`
    pub fn set_worker_returns_handle(&self, returns_handle: bool) {
        self.inner.lock().worker_returns_handle = returns_handle;
    }

    /// Activate every registered worker that is still installing
    pub fn activate_workers(&self) {
        for worker in self.inner.lock().workers.iter() {
            worker.activated.send_replace(true);
        }
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<PlatformCall> {
        self.inner.lock().calls.clone()
    }

    /// Number of recorded calls matching `predicate`
    pub fn count_calls(&self, predicate: impl Fn(&PlatformCall) -> bool) -> usize {
        self.inner.lock().calls.iter().filter(|c| predicate(c)).count()
    }

    /// Every notification displayed so far, directly or through a worker
    pub fn shown(&self) -> Vec<NotificationHandle> {
        self.inner.lock().shown.clone()
    }

    pub fn last_shown(&self) -> Option<NotificationHandle> {
        self.inner.lock().shown.last().cloned()
    }

    /// Workers handed out by `register_worker`
    pub fn workers(&self) -> Vec<FakeWorker> {
        self.inner.lock().workers.clone()
    }
}

#[async_trait]
impl NotificationPlatform for FakePlatform {
    type Worker = FakeWorker;

    fn has_notifications(&self) -> bool {
        self.inner.lock().notifications
    }

    fn has_worker(&self) -> bool {
        self.inner.lock().worker
    }

    fn has_worker_display(&self) -> bool {
        self.inner.lock().worker_display
    }

    fn permission(&self) -> Permission {
        self.inner.lock().permission
    }

    async fn request_permission(&self) -> Permission {
        let mut state = self.inner.lock();
        state.calls.push(PlatformCall::RequestPermission);
        state.permission = state.prompt_answer;
        state.prompt_answer
    }

    async fn show(
        &self,
        title: &str,
        options: &NotificationOptions,
    ) -> Result<NotificationHandle, PlatformError> {
        let mut state = self.inner.lock();
        state.calls.push(PlatformCall::Show {
            title: title.to_string(),
            options: options.clone(),
        });
        state.display(title, options)
    }

    async fn register_worker(&self, locator: &str) -> Result<FakeWorker, PlatformError> {
        let mut state = self.inner.lock();
        state.calls.push(PlatformCall::RegisterWorker {
            locator: locator.to_string(),
        });
        match state.registration.clone() {
            FakeRegistration::Fail(message) => Err(PlatformError::Registration(message)),
            FakeRegistration::Succeed { activated } => {
                let (tx, _) = watch::channel(activated);
                let worker = FakeWorker {
                    locator: locator.to_string(),
                    activated: Arc::new(tx),
                    visible: Arc::new(Mutex::new(Vec::new())),
                    platform: Arc::clone(&self.inner),
                };
                state.workers.push(worker.clone());
                Ok(worker)
            }
        }
    }
}

/// Worker handed out by [`FakePlatform`]
#[derive(Clone)]
pub struct FakeWorker {
    locator: String,
    activated: Arc<watch::Sender<bool>>,
    visible: Arc<Mutex<Vec<NotificationHandle>>>,
    platform: Arc<Mutex<FakeState>>,
}

impl std::fmt::Debug for FakeWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FakeWorker")
            .field("locator", &self.locator)
            .finish_non_exhaustive()
    }
}

impl FakeWorker {
    fn record(&self, call: PlatformCall) {
        self.platform.lock().calls.push(call);
    }

    /// Notifications displayed through this worker
    pub fn visible(&self) -> Vec<NotificationHandle> {
        self.visible.lock().clone()
    }
}

#[async_trait]
impl BackgroundWorker for FakeWorker {
    fn locator(&self) -> &str {
        &self.locator
    }

    fn is_activated(&self) -> bool {
        *self.activated.borrow()
    }

    async fn ready(&self) -> Result<(), PlatformError> {
        let ready_error = {
            let mut state = self.platform.lock();
            state.calls.push(PlatformCall::WorkerReady {
                locator: self.locator.clone(),
            });
            state.ready_error.clone()
        };
        if let Some(message) = ready_error {
            return Err(PlatformError::Worker(message));
        }
        let mut rx = self.activated.subscribe();
        let result = rx.wait_for(|activated| *activated).await.map(|_| ());
        result.map_err(|_| PlatformError::Worker("worker dropped".to_string()))
    }

    async fn show_notification(
        &self,
        title: &str,
        options: &NotificationOptions,
    ) -> Result<Option<NotificationHandle>, PlatformError> {
        let (handle, returns_handle) = {
            let mut state = self.platform.lock();
            state.calls.push(PlatformCall::WorkerShow {
                locator: self.locator.clone(),
                title: title.to_string(),
                options: options.clone(),
            });
            (state.display(title, options)?, state.worker_returns_handle)
        };
        self.visible.lock().push(handle.clone());
        Ok(returns_handle.then_some(handle))
    }

    async fn notifications(&self) -> Result<Vec<NotificationHandle>, PlatformError> {
        self.record(PlatformCall::WorkerNotifications {
            locator: self.locator.clone(),
        });
        let mut visible = self.visible.lock();
        visible.retain(|h| !h.is_finished());
        Ok(visible.clone())
    }

    async fn unregister(&self) -> Result<bool, PlatformError> {
        self.record(PlatformCall::Unregister {
            locator: self.locator.clone(),
        });
        Ok(true)
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
