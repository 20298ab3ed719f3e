// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use pn_core::NotificationId;
use serde_json::json;
use serial_test::serial;

fn plain<T>(f: impl FnOnce() -> T) -> T {
    std::env::set_var("NO_COLOR", "1");
    let result = f();
    std::env::remove_var("NO_COLOR");
    result
}

#[test]
#[serial]
fn text_event_without_payload() {
    let event = LifecycleEvent::Shown {
        notification: NotificationId::new("n-1"),
        event: serde_json::Value::Null,
    };
    let line = plain(|| format_event(&event, OutputFormat::Text)).unwrap();
    assert_eq!(line, "shown    n-1");
}

#[test]
#[serial]
fn text_event_with_payload() {
    let event = LifecycleEvent::Clicked {
        notification: NotificationId::new("n-1"),
        event: json!({ "action": "default" }),
    };
    let line = plain(|| format_event(&event, OutputFormat::Text)).unwrap();
    assert_eq!(line, r#"clicked  n-1 {"action":"default"}"#);
}

#[test]
fn json_event_is_tagged() {
    let event = LifecycleEvent::Closed {
        notification: NotificationId::new("n-2"),
    };
    let line = format_event(&event, OutputFormat::Json).unwrap();
    assert_eq!(line, r#"{"type":"notification:closed","notification":"n-2"}"#);
}

#[test]
#[serial]
fn yes_no_plain() {
    let (yes, no) = plain(|| (yes_no(true), yes_no(false)));
    assert_eq!(yes, "yes");
    assert_eq!(no, "no");
}
