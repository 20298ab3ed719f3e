// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lifecycle events reported for a displayed notification

use crate::id::NotificationId;
use serde::{Deserialize, Serialize};

fn is_null(value: &serde_json::Value) -> bool {
    value.is_null()
}

/// Events observed over the lifetime of one notification.
///
/// Serializes with `{"type": "notification:name", ...fields}` format.
/// `event` is the platform payload, passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LifecycleEvent {
    #[serde(rename = "notification:shown")]
    Shown {
        notification: NotificationId,
        #[serde(default, skip_serializing_if = "is_null")]
        event: serde_json::Value,
    },

    /// The user clicked the notification. May repeat.
    #[serde(rename = "notification:clicked")]
    Clicked {
        notification: NotificationId,
        #[serde(default, skip_serializing_if = "is_null")]
        event: serde_json::Value,
    },

    #[serde(rename = "notification:errored")]
    Errored {
        notification: NotificationId,
        #[serde(default, skip_serializing_if = "is_null")]
        event: serde_json::Value,
    },

    #[serde(rename = "notification:closed")]
    Closed { notification: NotificationId },
}

impl LifecycleEvent {
    pub fn notification(&self) -> &NotificationId {
        match self {
            LifecycleEvent::Shown { notification, .. }
            | LifecycleEvent::Clicked { notification, .. }
            | LifecycleEvent::Errored { notification, .. }
            | LifecycleEvent::Closed { notification } => notification,
        }
    }

    /// Platform payload, `Null` when the platform supplied none.
    pub fn payload(&self) -> &serde_json::Value {
        static NONE: serde_json::Value = serde_json::Value::Null;
        match self {
            LifecycleEvent::Shown { event, .. }
            | LifecycleEvent::Clicked { event, .. }
            | LifecycleEvent::Errored { event, .. } => event,
            LifecycleEvent::Closed { .. } => &NONE,
        }
    }

    /// Errored and closed end the notification's event stream.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            LifecycleEvent::Errored { .. } | LifecycleEvent::Closed { .. }
        )
    }

    /// Short name used in logs and text output.
    pub fn name(&self) -> &'static str {
        match self {
            LifecycleEvent::Shown { .. } => "shown",
            LifecycleEvent::Clicked { .. } => "clicked",
            LifecycleEvent::Errored { .. } => "errored",
            LifecycleEvent::Closed { .. } => "closed",
        }
    }
}

/// Outcome of a successful background worker registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerReady {
    pub locator: String,
    /// The worker was already registered and active before this call
    pub already_active: bool,
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
