// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! pn-core: Domain types for the pn push notification adapter

pub mod event;
pub mod id;
pub mod options;
pub mod permission;

pub use event::{LifecycleEvent, WorkerReady};
#[cfg(any(test, feature = "test-support"))]
pub use id::SequentialIdGen;
pub use id::{IdGen, NotificationId, UuidIdGen};
pub use options::{Direction, NotificationOptions};
pub use permission::{ParsePermissionError, Permission};
