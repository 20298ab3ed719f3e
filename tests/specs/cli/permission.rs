//! `pn permission` specs

use crate::prelude::*;

#[test]
fn defaults_to_granted() {
    cli().args(&["permission"]).passes().stdout_eq("granted\n");
}

#[test]
fn reads_configured_permission() {
    cli()
        .env("PN_PERMISSION", "denied")
        .args(&["permission"])
        .passes()
        .stdout_eq("denied\n");
}

#[test]
fn unparseable_permission_is_default() {
    cli()
        .env("PN_PERMISSION", "sure")
        .args(&["permission"])
        .passes()
        .stdout_eq("default\n");
}

#[test]
fn request_returns_configured_answer() {
    cli()
        .env("PN_PERMISSION", "default")
        .args(&["permission", "--request"])
        .passes()
        .stdout_eq("default\n");
}

#[test]
fn disabled_platform_is_denied() {
    cli()
        .disabled()
        .args(&["-o", "json", "permission", "--request"])
        .passes()
        .stdout_eq("{\"permission\":\"denied\"}\n");
}
