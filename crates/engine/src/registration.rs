// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared outcome of a background worker registration.
//!
//! The registration runs as a single task started when it is requested.
//! Every clone of [`Registration`] observes that task's one outcome, no
//! matter when it starts waiting.

use crate::error::NotificationError;
use futures::Stream;
use pn_core::WorkerReady;
use std::sync::Arc;
use tokio::sync::watch;

pub type RegistrationOutcome = Result<WorkerReady, NotificationError>;

#[derive(Clone, Debug)]
pub struct Registration {
    locator: Arc<str>,
    rx: watch::Receiver<Option<RegistrationOutcome>>,
}

/// Settles a [`Registration`]. Dropping it unsettled fails the registration.
#[derive(Debug)]
pub(crate) struct Resolver {
    tx: watch::Sender<Option<RegistrationOutcome>>,
}

impl Resolver {
    pub(crate) fn resolve(self, outcome: RegistrationOutcome) {
        self.tx.send_replace(Some(outcome));
    }
}

impl Registration {
    pub(crate) fn pending(locator: &str) -> (Self, Resolver) {
        let (tx, rx) = watch::channel(None);
        (
            Self {
                locator: Arc::from(locator),
                rx,
            },
            Resolver { tx },
        )
    }

    pub fn locator(&self) -> &str {
        &self.locator
    }

    /// Outcome if the registration already settled.
    pub fn try_outcome(&self) -> Option<RegistrationOutcome> {
        self.rx.borrow().clone()
    }

    pub fn is_settled(&self) -> bool {
        self.rx.borrow().is_some()
    }

    /// Settled with an error, or abandoned by its resolver unsettled.
    pub(crate) fn has_failed(&self) -> bool {
        if let Some(outcome) = &*self.rx.borrow() {
            return outcome.is_err();
        }
        self.rx.has_changed().is_err()
    }

    /// Both values observe the same registration attempt.
    pub(crate) fn same_as(&self, other: &Registration) -> bool {
        self.rx.same_channel(&other.rx)
    }

    /// Wait for the registration to settle.
    pub async fn outcome(&self) -> RegistrationOutcome {
        let mut rx = self.rx.clone();
        let settled = rx
            .wait_for(Option::is_some)
            .await
            .map(|value| (*value).clone());
        match settled {
            Ok(Some(outcome)) => outcome,
            _ => Err(NotificationError::RegistrationFailed(
                "registration ended without an outcome".to_string(),
            )),
        }
    }

    /// Single-item stream yielding the outcome, then completing.
    pub fn into_stream(self) -> impl Stream<Item = RegistrationOutcome> + Send + 'static {
        futures::stream::once(async move { self.outcome().await })
    }
}

#[cfg(test)]
#[path = "registration_tests.rs"]
mod tests;
