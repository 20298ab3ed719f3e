//! `pn register` specs

use crate::prelude::*;

#[test]
fn registers_at_given_locator() {
    cli()
        .args(&["register", "--locator", "/sw"])
        .passes()
        .stdout_has("ready /sw");
}

#[test]
fn uses_configured_locator() {
    let run = cli()
        .env("PN_WORKER_LOCATOR", "/from-env")
        .args(&["-o", "json", "register"])
        .passes();
    assert_eq!(run.stdout_json()["locator"], "/from-env");
}

#[test]
fn default_locator() {
    let run = cli().args(&["-o", "json", "register"]).passes();
    assert_eq!(run.stdout_json()["locator"], "/push-notifications-worker");
}

#[test]
fn invalid_locator_fails_registration() {
    cli()
        .args(&["register", "--locator", "two words"])
        .fails()
        .code(5)
        .stderr_has("Error: error registering background worker: invalid worker locator");
}

#[test]
fn disabled_platform_has_no_worker() {
    cli().disabled().args(&["register"]).fails().code(4);
}
