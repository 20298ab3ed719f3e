// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[tokio::test]
async fn fake_show_records_calls_and_reports_show() {
    let platform = FakePlatform::new();
    let options = NotificationOptions::new().body("Pipeline started");

    let handle = platform.show("Build", &options).await.unwrap();

    assert_eq!(handle.id(), &NotificationId::new("n-1"));
    assert_eq!(
        handle.history(),
        vec![NotificationSignal::Show(serde_json::Value::Null)]
    );
    assert_eq!(
        platform.calls(),
        vec![PlatformCall::Show {
            title: "Build".to_string(),
            options,
        }]
    );
    assert_eq!(platform.shown().len(), 1);
}

#[tokio::test]
async fn fake_display_error_fails_show() {
    let platform = FakePlatform::new();
    platform.set_display_error("no server");

    let err = platform
        .show("Build", &NotificationOptions::default())
        .await
        .unwrap_err();
    assert_eq!(err, PlatformError::Display("no server".to_string()));
    assert!(platform.shown().is_empty());
}

#[tokio::test]
async fn fake_prompt_updates_permission() {
    let platform = FakePlatform::new();
    platform.set_permission(Permission::Default);
    platform.set_prompt_answer(Permission::Denied);

    assert_eq!(platform.request_permission().await, Permission::Denied);
    assert_eq!(platform.permission(), Permission::Denied);
    assert_eq!(platform.calls(), vec![PlatformCall::RequestPermission]);
}

#[test]
fn fake_unsupported_has_no_capabilities() {
    let platform = FakePlatform::unsupported();
    assert!(!platform.has_notifications());
    assert!(!platform.has_worker());
    assert!(!platform.has_worker_display());
}

#[tokio::test]
async fn fake_registration_failure() {
    let platform = FakePlatform::new();
    platform.set_registration(FakeRegistration::Fail("bad script".to_string()));

    let err = platform.register_worker("/sw").await.unwrap_err();
    assert_eq!(err, PlatformError::Registration("bad script".to_string()));
    assert!(platform.workers().is_empty());
}

#[tokio::test]
async fn fake_worker_waits_for_activation() {
    let platform = FakePlatform::new();
    platform.set_registration(FakeRegistration::Succeed { activated: false });
    let worker = platform.register_worker("/sw").await.unwrap();
    assert!(!worker.is_activated());

    let waiting = tokio::spawn({
        let worker = worker.clone();
        async move { worker.ready().await }
    });
    tokio::task::yield_now().await;
    platform.activate_workers();

    waiting.await.unwrap().unwrap();
    assert!(worker.is_activated());
}

#[tokio::test]
async fn fake_worker_lists_visible_notifications() {
    let platform = FakePlatform::new();
    platform.set_worker_returns_handle(false);
    let worker = platform.register_worker("/sw").await.unwrap();

    let returned = worker
        .show_notification("one", &NotificationOptions::default())
        .await
        .unwrap();
    assert!(returned.is_none());
    worker
        .show_notification("two", &NotificationOptions::default())
        .await
        .unwrap();

    let listed = worker.notifications().await.unwrap();
    let titles: Vec<_> = listed.iter().map(|h| h.title().to_string()).collect();
    assert_eq!(titles, vec!["one", "two"]);

    listed[0].emit(NotificationSignal::Close);
    assert_eq!(worker.notifications().await.unwrap().len(), 1);
}

#[tokio::test]
async fn fake_worker_unregister_is_recorded() {
    let platform = FakePlatform::new();
    let worker = platform.register_worker("/sw").await.unwrap();
    assert!(worker.unregister().await.unwrap());
    assert_eq!(
        platform.count_calls(|c| matches!(c, PlatformCall::Unregister { .. })),
        1
    );
}

#[tokio::test]
async fn fake_ready_error_fails_activation_wait() {
    let platform = FakePlatform::new();
    platform.set_registration(FakeRegistration::Succeed { activated: false });
    platform.set_ready_error("install script threw");
    let worker = platform.register_worker("/sw").await.unwrap();

    let err = worker.ready().await.unwrap_err();

    assert_eq!(err, PlatformError::Worker("install script threw".to_string()));
    assert!(platform.calls().contains(&PlatformCall::WorkerReady {
        locator: "/sw".to_string()
    }));
}
