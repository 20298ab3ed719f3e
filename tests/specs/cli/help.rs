//! CLI help output specs

use crate::prelude::*;

#[test]
fn pn_no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn pn_help_lists_commands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("supported")
        .stdout_has("permission")
        .stdout_has("show")
        .stdout_has("register");
}

#[test]
fn pn_show_help_lists_flags() {
    cli()
        .args(&["show", "--help"])
        .passes()
        .stdout_has("--body")
        .stdout_has("--sticky")
        .stdout_has("--worker")
        .stdout_has("--no-wait");
}

#[test]
fn pn_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.1");
}
