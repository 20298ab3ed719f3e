//! `pn supported` specs

use crate::prelude::*;

#[test]
fn disabled_platform_reports_nothing_supported() {
    cli()
        .disabled()
        .args(&["supported"])
        .passes()
        .stdout_eq(
            "supported:      no\n\
             notifications:  no\n\
             worker:         no\n\
             worker display: no\n\
             permission:     denied\n",
        );
}

#[test]
fn desktop_platform_reports_configured_permission() {
    cli()
        .env("PN_PERMISSION", "default")
        .args(&["supported"])
        .passes()
        .stdout_has("supported:      yes")
        .stdout_has("permission:     default");
}

#[test]
fn json_output() {
    let run = cli().disabled().args(&["-o", "json", "supported"]).passes();
    let json = run.stdout_json();
    assert_eq!(json["supported"], false);
    assert_eq!(json["permission"], "denied");
}
