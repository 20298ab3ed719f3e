// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Handle to a displayed notification.
//!
//! Platforms report show/click/error/close signals through the handle.
//! Every signal is recorded, and a new subscriber first receives the
//! recorded history, so attaching after the platform has already fired
//! loses nothing. Once a terminal signal is emitted the handle is
//! finished: subscribers drain what was sent and then see end-of-stream.

use parking_lot::Mutex;
use pn_core::NotificationId;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Raw signal reported by a platform for one notification.
#[derive(Debug, Clone, PartialEq)]
pub enum NotificationSignal {
    Show(serde_json::Value),
    Click(serde_json::Value),
    Error(serde_json::Value),
    Close,
}

impl NotificationSignal {
    pub fn is_terminal(&self) -> bool {
        matches!(self, NotificationSignal::Error(_) | NotificationSignal::Close)
    }
}

#[derive(Debug, Default)]
struct HandleState {
    history: Vec<NotificationSignal>,
    subscribers: Vec<mpsc::UnboundedSender<NotificationSignal>>,
    finished: bool,
}

/// Opaque reference to one displayed notification.
///
/// Clones share the same signal history. Dropping every clone ends all
/// subscriptions.
#[derive(Debug, Clone)]
pub struct NotificationHandle {
    id: NotificationId,
    title: String,
    tag: Option<String>,
    state: Arc<Mutex<HandleState>>,
}

impl NotificationHandle {
    pub fn new(id: NotificationId, title: impl Into<String>, tag: Option<String>) -> Self {
        Self {
            id,
            title: title.into(),
            tag,
            state: Arc::new(Mutex::new(HandleState::default())),
        }
    }

    pub fn id(&self) -> &NotificationId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Report a signal to all subscribers.
    ///
    /// Returns `false` (and drops the signal) if the handle already finished.
    pub fn emit(&self, signal: NotificationSignal) -> bool {
        let mut state = self.state.lock();
        if state.finished {
            tracing::trace!(id = %self.id, ?signal, "signal after finish ignored");
            return false;
        }
        state
            .subscribers
            .retain(|tx| tx.send(signal.clone()).is_ok());
        if signal.is_terminal() {
            state.finished = true;
            state.subscribers.clear();
        }
        state.history.push(signal);
        true
    }

    /// End all subscriptions without a terminal signal.
    pub fn finish(&self) {
        let mut state = self.state.lock();
        state.finished = true;
        state.subscribers.clear();
    }

    pub fn is_finished(&self) -> bool {
        self.state.lock().finished
    }

    /// Signals recorded so far.
    pub fn history(&self) -> Vec<NotificationSignal> {
        self.state.lock().history.clone()
    }

    /// Subscribe to signals, starting with the recorded history.
    pub fn subscribe(&self) -> SignalReceiver {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut state = self.state.lock();
        for signal in &state.history {
            // Receiver is held locally, send cannot fail
            let _ = tx.send(signal.clone());
        }
        if !state.finished {
            state.subscribers.push(tx);
        }
        SignalReceiver { rx }
    }
}

/// Receiving side of [`NotificationHandle::subscribe`].
#[derive(Debug)]
pub struct SignalReceiver {
    rx: mpsc::UnboundedReceiver<NotificationSignal>,
}

impl SignalReceiver {
    /// Next signal, or `None` once the handle finished and history drained.
    pub async fn recv(&mut self) -> Option<NotificationSignal> {
        self.rx.recv().await
    }
}

#[cfg(test)]
#[path = "handle_tests.rs"]
mod tests;
