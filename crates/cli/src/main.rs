// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! pn - desktop push notifications CLI

mod color;
mod commands;
mod env;
mod exit_error;
mod output;

use output::OutputFormat;

use anyhow::Result;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use commands::{permission, register, show, supported};
use pn_adapters::{DesktopPlatform, NoOpPlatform, NotificationPlatform, TracedPlatform};
use pn_engine::{NotificationService, ServiceConfig};

#[derive(Parser)]
#[command(
    name = "pn",
    version,
    about = "Show desktop notifications and follow their lifecycle"
)]
struct Cli {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Report which notification capabilities are available
    Supported,
    /// Show the notification permission, or request it
    Permission(permission::PermissionArgs),
    /// Display a notification and print its lifecycle events
    Show(show::ShowArgs),
    /// Register a background worker and wait until it is ready
    Register(register::RegisterArgs),
}

fn cli_command() -> clap::Command {
    Cli::command().styles(color::styles())
}

fn main() {
    setup_logging();

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: failed to start runtime: {}", e);
            std::process::exit(1);
        }
    };
    let result = runtime.block_on(run());
    // A displayed notification may still be waiting on the user in a
    // blocking thread; it must not keep the process alive.
    runtime.shutdown_background();

    if let Err(e) = result {
        let code = e
            .downcast_ref::<exit_error::ExitError>()
            .map_or(1, |c| c.code);
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(code);
    }
}

/// Log to stderr, filtered by `PN_LOG` or `RUST_LOG` (default `warn`).
fn setup_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = env::log_filter()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, we skip
/// the "Caused by" chain to avoid noisy duplicate output. Otherwise we render
/// the full chain so context isn't lost.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

async fn run() -> Result<()> {
    let matches = cli_command().get_matches();
    let cli = Cli::from_arg_matches(&matches)?;
    let format = cli.output;

    let Some(command) = cli.command else {
        // No subcommand provided: print help and exit 0
        cli_command().print_help()?;
        println!();
        return Ok(());
    };

    let config = ServiceConfig::from_env();
    if env::disabled() {
        tracing::info!("notifications disabled by PN_DISABLED");
        let service = NotificationService::new(TracedPlatform::new(NoOpPlatform::new()), config);
        dispatch(command, &service, format).await
    } else {
        let platform = TracedPlatform::new(DesktopPlatform::from_env());
        let service = NotificationService::new(platform, config);
        dispatch(command, &service, format).await
    }
}

async fn dispatch<P: NotificationPlatform>(
    command: Commands,
    service: &NotificationService<P>,
    format: OutputFormat,
) -> Result<()> {
    match command {
        Commands::Supported => supported::handle(service, format),
        Commands::Permission(args) => permission::handle(args, service, format).await,
        Commands::Show(args) => show::handle(args, service, format).await,
        Commands::Register(args) => register::handle(args, service, format).await,
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
