// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pn show` - display a notification and follow its lifecycle

use anyhow::{Context, Result};
use clap::Args;
use futures::StreamExt;
use pn_adapters::NotificationPlatform;
use pn_core::{LifecycleEvent, NotificationOptions};
use pn_engine::NotificationService;

use crate::exit_error::ExitError;
use crate::output::{format_event, OutputFormat};

/// Exit code when the platform reports the notification errored
pub const ERRORED_EXIT_CODE: i32 = 7;

#[derive(Args, Debug, Default)]
pub struct ShowArgs {
    /// Notification title
    pub title: String,

    /// Body text
    #[arg(long)]
    pub body: Option<String>,

    /// Icon name or path
    #[arg(long)]
    pub icon: Option<String>,

    /// Replace any notification with the same tag
    #[arg(long)]
    pub tag: Option<String>,

    /// Application data attached to the notification (JSON)
    #[arg(long, value_name = "JSON")]
    pub data: Option<String>,

    /// Keep the notification until it is dismissed
    #[arg(long)]
    pub sticky: bool,

    /// Suppress the notification sound
    #[arg(long)]
    pub silent: bool,

    /// Hide the notification after this many milliseconds
    #[arg(long, value_name = "MS", conflicts_with = "sticky")]
    pub timeout: Option<u32>,

    /// Display through a background worker
    #[arg(long)]
    pub worker: bool,

    /// Worker locator (defaults to PN_WORKER_LOCATOR)
    #[arg(long, requires = "worker")]
    pub locator: Option<String>,

    /// Exit once the notification is shown instead of waiting for it to close
    #[arg(long)]
    pub no_wait: bool,
}

impl ShowArgs {
    pub fn options(&self) -> Result<NotificationOptions> {
        let mut options = NotificationOptions::new();
        if let Some(body) = &self.body {
            options = options.body(body);
        }
        if let Some(icon) = &self.icon {
            options = options.icon(icon);
        }
        if let Some(tag) = &self.tag {
            options = options.tag(tag);
        }
        if let Some(data) = &self.data {
            let data = serde_json::from_str(data).context("--data is not valid JSON")?;
            options = options.data(data);
        }
        if self.sticky {
            options = options.sticky(true);
        }
        if self.silent {
            options = options.silent(true);
        }
        if let Some(timeout) = self.timeout {
            options = options.timeout_ms(timeout);
        }
        Ok(options)
    }
}

/// Display the notification and pass each lifecycle event to `emit`.
///
/// Stream errors become [`ExitError`]s carrying the error's exit code. An
/// `errored` event is emitted first, then fails with [`ERRORED_EXIT_CODE`].
pub async fn run<P, F>(args: ShowArgs, service: &NotificationService<P>, mut emit: F) -> Result<()>
where
    P: NotificationPlatform,
    F: FnMut(&LifecycleEvent) -> Result<()>,
{
    let options = args.options()?;

    if args.worker {
        let ready = service
            .register_service_worker(args.locator.as_deref())
            .outcome()
            .await
            .map_err(ExitError::from)?;
        tracing::debug!(locator = %ready.locator, "showing through worker");
    }

    let mut events = service.create(args.title, Some(options));
    while let Some(item) = events.next().await {
        let event = item.map_err(ExitError::from)?;
        emit(&event)?;
        if let LifecycleEvent::Errored {
            notification,
            event,
        } = &event
        {
            return Err(ExitError::new(
                ERRORED_EXIT_CODE,
                format!("notification {notification} errored: {event}"),
            )
            .into());
        }
        if args.no_wait && matches!(event, LifecycleEvent::Shown { .. }) {
            break;
        }
    }
    Ok(())
}

pub async fn handle<P: NotificationPlatform>(
    args: ShowArgs,
    service: &NotificationService<P>,
    format: OutputFormat,
) -> Result<()> {
    run(args, service, |event| {
        println!("{}", format_event(event, format)?);
        Ok(())
    })
    .await
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
