// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Notification service: permission, display streams and background
//! worker registration

mod env;
mod error;
pub mod registration;
mod service;
pub mod stream;

pub use error::NotificationError;
pub use registration::{Registration, RegistrationOutcome};
pub use service::{NotificationService, ServiceConfig};
pub use stream::{NotificationStream, StreamItem};
