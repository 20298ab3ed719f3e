// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use pn_adapters::{FakePlatform, FakeRegistration};
use pn_engine::ServiceConfig;
use serial_test::serial;

fn service(fake: &FakePlatform) -> NotificationService<FakePlatform> {
    NotificationService::new(
        fake.clone(),
        ServiceConfig {
            worker_locator: "/default-worker".to_string(),
        },
    )
}

#[tokio::test]
async fn uses_configured_locator_by_default() {
    let fake = FakePlatform::new();
    let ready = run(&RegisterArgs::default(), &service(&fake)).await.unwrap();
    assert_eq!(ready.locator, "/default-worker");
    assert!(ready.already_active);
}

#[tokio::test]
async fn failure_exits_with_registration_code() {
    let fake = FakePlatform::new();
    fake.set_registration(FakeRegistration::Fail("script missing".to_string()));
    let args = RegisterArgs {
        locator: Some("/sw".to_string()),
    };

    let err = run(&args, &service(&fake)).await.unwrap_err();

    let exit = err.downcast_ref::<ExitError>().unwrap();
    assert_eq!(exit.code, 5);
    assert_eq!(exit.message, "error registering background worker: script missing");
}

#[test]
#[serial]
fn text_output() {
    std::env::set_var("NO_COLOR", "1");
    let fresh = format_text(&WorkerReady {
        locator: "/sw".to_string(),
        already_active: false,
    });
    let reused = format_text(&WorkerReady {
        locator: "/sw".to_string(),
        already_active: true,
    });
    std::env::remove_var("NO_COLOR");

    assert_eq!(fresh, "ready /sw (activated)");
    assert_eq!(reused, "ready /sw (already active)");
}
