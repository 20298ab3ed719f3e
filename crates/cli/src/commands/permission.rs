// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pn permission` - read or request notification permission

use anyhow::Result;
use clap::Args;
use pn_adapters::NotificationPlatform;
use pn_core::Permission;
use pn_engine::NotificationService;

use crate::color;
use crate::output::{print_json, OutputFormat};

#[derive(Args, Debug, Default)]
pub struct PermissionArgs {
    /// Prompt for permission and wait for the answer
    #[arg(long)]
    pub request: bool,
}

pub async fn resolve<P: NotificationPlatform>(
    args: &PermissionArgs,
    service: &NotificationService<P>,
) -> Permission {
    if args.request {
        service.resolve_permission().await
    } else {
        service.permission()
    }
}

pub async fn handle<P: NotificationPlatform>(
    args: PermissionArgs,
    service: &NotificationService<P>,
    format: OutputFormat,
) -> Result<()> {
    let permission = resolve(&args, service).await;
    match format {
        OutputFormat::Text => println!("{}", color::status(permission.as_str())),
        OutputFormat::Json => print_json(&serde_json::json!({ "permission": permission }))?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "permission_tests.rs"]
mod tests;
