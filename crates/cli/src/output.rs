// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use pn_core::LifecycleEvent;
use serde::Serialize;

use crate::color;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print a value as one line of JSON.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

/// Render a lifecycle event as a single line.
///
/// Text lines look like `clicked  n-1 {"action":"default"}`; the payload is
/// omitted when the platform sent none. JSON lines are the serialized event.
pub fn format_event(event: &LifecycleEvent, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(event)?),
        OutputFormat::Text => {
            let name = event.name();
            let padded = format!("{name:<8}");
            let mut line = format!(
                "{} {}",
                padded.replacen(name, &color::status(name), 1),
                color::muted(event.notification().as_str())
            );
            let payload = event.payload();
            if !payload.is_null() {
                line.push(' ');
                line.push_str(&payload.to_string());
            }
            Ok(line)
        }
    }
}

/// Text label for a boolean capability.
pub fn yes_no(value: bool) -> String {
    color::status(if value { "yes" } else { "no" })
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
