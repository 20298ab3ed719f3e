//! Error reporting and exit code specs

use crate::prelude::*;

#[test]
fn show_without_permission_fails_before_display() {
    cli()
        .env("PN_PERMISSION", "denied")
        .args(&["show", "Hi"])
        .fails()
        .code(3)
        .stdout_eq("")
        .stderr_has("Error: the user hasn't granted permission to show notifications");
}

#[test]
fn error_is_the_only_stderr_output_when_logging_is_off() {
    cli()
        .env("PN_PERMISSION", "denied")
        .env("PN_LOG", "off")
        .args(&["show", "Hi"])
        .fails()
        .code(3)
        .stderr_eq("Error: the user hasn't granted permission to show notifications\n");
}

#[test]
fn show_with_default_permission_fails() {
    cli()
        .env("PN_PERMISSION", "default")
        .args(&["show", "Hi", "--body", "World"])
        .fails()
        .code(3);
}

#[test]
fn show_on_disabled_platform_is_unsupported() {
    cli()
        .disabled()
        .args(&["show", "Hi"])
        .fails()
        .code(2)
        .stdout_eq("")
        .stderr_has("Error: notifications are not available in this environment");
}

#[test]
fn show_worker_on_disabled_platform_is_unavailable() {
    cli()
        .disabled()
        .args(&["show", "Hi", "--worker"])
        .fails()
        .code(4)
        .stderr_has("background worker notifications are not available");
}

#[test]
fn show_rejects_invalid_data() {
    cli()
        .env("PN_PERMISSION", "denied")
        .args(&["show", "Hi", "--data", "{nope"])
        .fails()
        .code(1)
        .stderr_has("Error: --data is not valid JSON");
}

#[test]
fn unknown_command_fails() {
    cli().args(&["frobnicate"]).fails().code(2);
}
