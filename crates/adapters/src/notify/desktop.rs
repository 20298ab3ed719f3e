// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Desktop notification platform using notify-rust.
//!
//! Display is synchronous in notify-rust, so each notification runs on
//! tokio's blocking pool. On freedesktop hosts that task stays parked in
//! `wait_for_action` until the server reports a click or close, which is
//! how those signals reach the handle. Elsewhere only `Show` is reported
//! and the handle finishes once the display call returns.
//!
//! On macOS, `notify-rust` uses `mac-notification-sys` and looks up a bundle
//! identifier on first use via AppleScript, which blocks forever in
//! processes without Automation permissions. The identifier is pre-set at
//! construction time to bypass that lookup.
//!
//! Background workers are in-process display facilities keyed by locator.
//! They track the notifications they display and hand the handle back
//! directly, so callers never need the visible-list fallback.

use super::{BackgroundWorker, NotificationPlatform, PlatformError};
use crate::env;
use crate::handle::{NotificationHandle, NotificationSignal};
use async_trait::async_trait;
use parking_lot::Mutex;
use pn_core::{IdGen, NotificationId, NotificationOptions, Permission, UuidIdGen};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{oneshot, watch};

#[cfg(all(unix, not(target_os = "macos")))]
const DEFAULT_ACTION: &str = "default";
#[cfg(all(unix, not(target_os = "macos")))]
const CLOSED_ACTION: &str = "__closed";

/// Desktop platform settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopConfig {
    pub app_name: String,
    pub permission: Permission,
    /// Display timeout applied when the options carry none
    pub timeout_ms: Option<u32>,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            app_name: "pn".to_string(),
            permission: Permission::Granted,
            timeout_ms: None,
        }
    }
}

impl DesktopConfig {
    pub fn from_env() -> Self {
        Self {
            app_name: env::app_name(),
            permission: env::permission(),
            timeout_ms: env::timeout_ms(),
        }
    }
}

/// Builds and displays notify-rust notifications.
#[derive(Clone, Debug)]
struct Presenter {
    config: Arc<DesktopConfig>,
    ids: UuidIdGen,
}

impl Presenter {
    fn build(&self, title: &str, options: &NotificationOptions) -> notify_rust::Notification {
        let mut notification = notify_rust::Notification::new();
        notification.summary(title).appname(&self.config.app_name);
        if let Some(body) = options.body.as_deref() {
            notification.body(body);
        }
        if let Some(icon) = options.icon.as_deref() {
            notification.icon(icon);
        }

        let sticky = options.sticky.unwrap_or(false);
        let timeout = if sticky {
            notify_rust::Timeout::Never
        } else {
            match options.timeout_ms.or(self.config.timeout_ms) {
                Some(ms) => notify_rust::Timeout::Milliseconds(ms),
                None => notify_rust::Timeout::Default,
            }
        };
        notification.timeout(timeout);

        #[cfg(all(unix, not(target_os = "macos")))]
        {
            use notify_rust::Hint;
            notification.action(DEFAULT_ACTION, "Open");
            if sticky {
                notification.hint(Hint::Resident(true));
            }
            if options.silent.unwrap_or(false) {
                notification.hint(Hint::SuppressSound(true));
            }
            if let Some(sound) = options.sound.as_deref() {
                notification.hint(Hint::SoundName(sound.to_string()));
            }
        }

        notification
    }

    async fn present(
        &self,
        title: &str,
        options: &NotificationOptions,
    ) -> Result<NotificationHandle, PlatformError> {
        let handle = NotificationHandle::new(
            NotificationId::new(self.ids.next()),
            title,
            options.tag.clone(),
        );
        let notification = self.build(title, options);
        let (shown_tx, shown_rx) = oneshot::channel();
        let signals = handle.clone();
        tokio::task::spawn_blocking(move || display(notification, signals, shown_tx));

        match shown_rx.await {
            Ok(Ok(())) => {
                tracing::info!(id = %handle.id(), %title, "desktop notification shown");
                Ok(handle)
            }
            Ok(Err(e)) => {
                tracing::warn!(%title, error = %e, "desktop notification failed");
                Err(PlatformError::Display(e))
            }
            Err(_) => Err(PlatformError::Display(
                "display task exited before reporting".to_string(),
            )),
        }
    }
}

/// Runs on the blocking pool for the lifetime of the notification.
fn display(
    notification: notify_rust::Notification,
    handle: NotificationHandle,
    shown: oneshot::Sender<Result<(), String>>,
) {
    #[cfg(all(unix, not(target_os = "macos")))]
    {
        let native = match notification.show() {
            Ok(native) => native,
            Err(e) => {
                let _ = shown.send(Err(e.to_string()));
                return;
            }
        };
        handle.emit(NotificationSignal::Show(serde_json::Value::Null));
        let _ = shown.send(Ok(()));

        // The server dismisses the notification once an action is invoked.
        native.wait_for_action(|action| {
            if action != CLOSED_ACTION {
                tracing::debug!(id = %handle.id(), action, "desktop notification action");
                handle.emit(NotificationSignal::Click(
                    serde_json::json!({ "action": action }),
                ));
            }
            handle.emit(NotificationSignal::Close);
        });
    }

    #[cfg(not(all(unix, not(target_os = "macos"))))]
    report_untracked(notification.show().map_err(|e| e.to_string()), &handle, shown);
}

/// Settle a display whose host reports no clicks or closes: `Show`, then
/// finish the handle so subscribers and worker lists see it end.
#[cfg_attr(all(unix, not(target_os = "macos")), allow(dead_code))]
fn report_untracked<T>(
    result: Result<T, String>,
    handle: &NotificationHandle,
    shown: oneshot::Sender<Result<(), String>>,
) {
    let report = result.map(|_| {
        handle.emit(NotificationSignal::Show(serde_json::Value::Null));
    });
    handle.finish();
    let _ = shown.send(report);
}

/// Native desktop notifications.
#[derive(Clone, Debug)]
pub struct DesktopPlatform {
    presenter: Presenter,
    workers: Arc<Mutex<HashMap<String, DesktopWorker>>>,
}

impl Default for DesktopPlatform {
    fn default() -> Self {
        Self::new(DesktopConfig::default())
    }
}

impl DesktopPlatform {
    pub fn new(config: DesktopConfig) -> Self {
        #[cfg(target_os = "macos")]
        {
            let _ = mac_notification_sys::set_application(&env::macos_bundle());
        }
        Self {
            presenter: Presenter {
                config: Arc::new(config),
                ids: UuidIdGen,
            },
            workers: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn from_env() -> Self {
        Self::new(DesktopConfig::from_env())
    }

    pub fn config(&self) -> &DesktopConfig {
        &self.presenter.config
    }
}

#[async_trait]
impl NotificationPlatform for DesktopPlatform {
    type Worker = DesktopWorker;

    fn has_notifications(&self) -> bool {
        true
    }

    fn has_worker(&self) -> bool {
        true
    }

    fn has_worker_display(&self) -> bool {
        true
    }

    fn permission(&self) -> Permission {
        self.presenter.config.permission
    }

    async fn request_permission(&self) -> Permission {
        // No consent prompt on desktop hosts
        let permission = self.presenter.config.permission;
        tracing::debug!(%permission, "desktop permission is configured, not prompted");
        permission
    }

    async fn show(
        &self,
        title: &str,
        options: &NotificationOptions,
    ) -> Result<NotificationHandle, PlatformError> {
        self.presenter.present(title, options).await
    }

    async fn register_worker(&self, locator: &str) -> Result<DesktopWorker, PlatformError> {
        let locator = locator.trim();
        if locator.is_empty() || locator.chars().any(char::is_whitespace) {
            return Err(PlatformError::Registration(format!(
                "invalid worker locator: {locator:?}"
            )));
        }

        let worker = {
            let mut workers = self.workers.lock();
            if let Some(existing) = workers.get(locator).filter(|w| !w.is_unregistered()) {
                return Ok(existing.clone());
            }
            let worker = DesktopWorker::new(locator, self.presenter.clone());
            workers.insert(locator.to_string(), worker.clone());
            worker
        };

        // Installation completes on a later turn of the runtime
        let installing = worker.clone();
        tokio::spawn(async move {
            tokio::task::yield_now().await;
            installing.activate();
        });
        Ok(worker)
    }
}

#[derive(Debug)]
struct WorkerState {
    activated: watch::Sender<bool>,
    visible: Mutex<Vec<NotificationHandle>>,
    unregistered: AtomicBool,
}

/// In-process background display worker.
#[derive(Clone, Debug)]
pub struct DesktopWorker {
    locator: Arc<str>,
    presenter: Presenter,
    state: Arc<WorkerState>,
}

impl DesktopWorker {
    fn new(locator: &str, presenter: Presenter) -> Self {
        let (activated, _) = watch::channel(false);
        Self {
            locator: Arc::from(locator),
            presenter,
            state: Arc::new(WorkerState {
                activated,
                visible: Mutex::new(Vec::new()),
                unregistered: AtomicBool::new(false),
            }),
        }
    }

    fn activate(&self) {
        self.state.activated.send_replace(true);
        tracing::debug!(locator = %self.locator, "worker activated");
    }

    pub fn is_unregistered(&self) -> bool {
        self.state.unregistered.load(Ordering::SeqCst)
    }

    fn unregistered_error(&self) -> PlatformError {
        PlatformError::Worker(format!("worker {} is unregistered", self.locator))
    }
}

#[async_trait]
impl BackgroundWorker for DesktopWorker {
    fn locator(&self) -> &str {
        &self.locator
    }

    fn is_activated(&self) -> bool {
        *self.state.activated.borrow()
    }

    async fn ready(&self) -> Result<(), PlatformError> {
        if self.is_unregistered() {
            return Err(self.unregistered_error());
        }
        let mut rx = self.state.activated.subscribe();
        let result = rx.wait_for(|activated| *activated).await.map(|_| ());
        result.map_err(|_| PlatformError::Worker("worker dropped before activation".to_string()))
    }

    async fn show_notification(
        &self,
        title: &str,
        options: &NotificationOptions,
    ) -> Result<Option<NotificationHandle>, PlatformError> {
        if self.is_unregistered() {
            return Err(self.unregistered_error());
        }
        if !self.is_activated() {
            return Err(PlatformError::Worker(format!(
                "worker {} is not active",
                self.locator
            )));
        }

        let handle = self.presenter.present(title, options).await?;
        let mut visible = self.state.visible.lock();
        visible.retain(|h| !h.is_finished());
        visible.push(handle.clone());
        Ok(Some(handle))
    }

    async fn notifications(&self) -> Result<Vec<NotificationHandle>, PlatformError> {
        let mut visible = self.state.visible.lock();
        visible.retain(|h| !h.is_finished());
        Ok(visible.clone())
    }

    async fn unregister(&self) -> Result<bool, PlatformError> {
        let was_registered = !self.state.unregistered.swap(true, Ordering::SeqCst);
        if was_registered {
            tracing::info!(locator = %self.locator, "worker unregistered");
        }
        Ok(was_registered)
    }
}

#[cfg(test)]
#[path = "desktop_tests.rs"]
mod tests;
