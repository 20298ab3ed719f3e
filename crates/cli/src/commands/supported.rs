// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pn supported` - capability report

use anyhow::Result;
use pn_adapters::NotificationPlatform;
use pn_core::Permission;
use pn_engine::NotificationService;
use serde::Serialize;

use crate::color;
use crate::output::{print_json, yes_no, OutputFormat};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportReport {
    pub supported: bool,
    pub notifications: bool,
    pub worker: bool,
    pub worker_display: bool,
    pub permission: Permission,
}

pub fn report<P: NotificationPlatform>(service: &NotificationService<P>) -> SupportReport {
    let platform = service.platform();
    SupportReport {
        supported: service.is_supported(),
        notifications: platform.has_notifications(),
        worker: platform.has_worker(),
        worker_display: platform.has_worker_display(),
        permission: service.permission(),
    }
}

pub fn format_text(report: &SupportReport) -> String {
    let rows = [
        ("supported", yes_no(report.supported)),
        ("notifications", yes_no(report.notifications)),
        ("worker", yes_no(report.worker)),
        ("worker display", yes_no(report.worker_display)),
        ("permission", color::status(report.permission.as_str())),
    ];
    rows.iter()
        .map(|(label, value)| {
            let label = format!("{label}:");
            format!("{} {value}", color::header(&format!("{label:<15}")))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn handle<P: NotificationPlatform>(
    service: &NotificationService<P>,
    format: OutputFormat,
) -> Result<()> {
    let report = report(service);
    match format {
        OutputFormat::Text => println!("{}", format_text(&report)),
        OutputFormat::Json => print_json(&report)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "supported_tests.rs"]
mod tests;
