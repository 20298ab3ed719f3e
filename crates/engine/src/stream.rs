// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lazy lifecycle event stream for one notification

use crate::error::NotificationError;
use futures::Stream;
use pn_core::LifecycleEvent;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::mpsc;

pub type StreamItem = Result<LifecycleEvent, NotificationError>;

pub(crate) type Driver = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Events for one notification, started on first poll.
///
/// Yields `Shown` and any number of `Clicked` events, then ends after
/// `Errored`, `Closed` or an error. The driver is spawned onto the runtime:
/// dropping the stream stops delivery but leaves the platform side running.
pub struct NotificationStream {
    driver: Option<Driver>,
    rx: mpsc::UnboundedReceiver<StreamItem>,
}

impl NotificationStream {
    pub(crate) fn new<F>(build: F) -> Self
    where
        F: FnOnce(mpsc::UnboundedSender<StreamItem>) -> Driver,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            driver: Some(build(tx)),
            rx,
        }
    }

    /// The driver has been spawned
    pub fn is_started(&self) -> bool {
        self.driver.is_none()
    }
}

impl Stream for NotificationStream {
    type Item = StreamItem;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if let Some(driver) = this.driver.take() {
            tokio::spawn(driver);
        }
        this.rx.poll_recv(cx)
    }
}

impl std::fmt::Debug for NotificationStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationStream")
            .field("started", &self.is_started())
            .finish()
    }
}

#[cfg(test)]
#[path = "stream_tests.rs"]
mod tests;
