// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pn register` - register a background worker and wait until it is ready

use anyhow::Result;
use clap::Args;
use pn_adapters::NotificationPlatform;
use pn_core::WorkerReady;
use pn_engine::NotificationService;

use crate::color;
use crate::exit_error::ExitError;
use crate::output::{print_json, OutputFormat};

#[derive(Args, Debug, Default)]
pub struct RegisterArgs {
    /// Worker locator (defaults to PN_WORKER_LOCATOR)
    #[arg(long)]
    pub locator: Option<String>,
}

pub async fn run<P: NotificationPlatform>(
    args: &RegisterArgs,
    service: &NotificationService<P>,
) -> Result<WorkerReady> {
    let ready = service
        .register_service_worker(args.locator.as_deref())
        .outcome()
        .await
        .map_err(ExitError::from)?;
    Ok(ready)
}

pub fn format_text(ready: &WorkerReady) -> String {
    let state = if ready.already_active {
        "already active"
    } else {
        "activated"
    };
    format!(
        "{} {} {}",
        color::status("ready"),
        ready.locator,
        color::muted(&format!("({state})"))
    )
}

pub async fn handle<P: NotificationPlatform>(
    args: RegisterArgs,
    service: &NotificationService<P>,
    format: OutputFormat,
) -> Result<()> {
    let ready = run(&args, service).await?;
    match format {
        OutputFormat::Text => println!("{}", format_text(&ready)),
        OutputFormat::Json => print_json(&ready)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "register_tests.rs"]
mod tests;
