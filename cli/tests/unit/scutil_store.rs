//! Tests for `ScutilFieldStore` over a canned `CommandRunner`.

#![allow(clippy::expect_used)]

use namesync_cli::application::ports::FieldStore;
use namesync_cli::domain::StoreError;
use namesync_cli::infra::scutil::ScutilFieldStore;

use crate::helpers::{err_output, ok_output};
use crate::mocks::CannedRunner;

#[tokio::test]
async fn test_get_returns_trimmed_stdout() {
    let runner = CannedRunner::new(|_, _| Ok(ok_output(b"old-a\n")));
    let store = ScutilFieldStore::new(runner, false);

    let value = store.get("ComputerName").await.expect("get");
    assert_eq!(value, "old-a");
}

#[tokio::test]
async fn test_get_invokes_scutil_get() {
    let runner = CannedRunner::new(|_, _| Ok(ok_output(b"x")));
    let store = ScutilFieldStore::new(runner, true);
    store.get("LocalHostName").await.expect("get");
    // reads never go through sudo
    assert_eq!(store_calls(&store), vec!["scutil --get LocalHostName"]);
}

#[tokio::test]
async fn test_get_not_set_is_not_found() {
    let runner = CannedRunner::new(|_, _| {
        let mut out = err_output(1, b"");
        out.stdout = b"HostName: not set\n".to_vec();
        Ok(out)
    });
    let store = ScutilFieldStore::new(runner, false);

    let err = store.get("HostName").await.expect_err("must fail");
    assert_eq!(
        err,
        StoreError::NotFound {
            field: "HostName".to_string()
        }
    );
}

#[tokio::test]
async fn test_get_other_failure_is_unavailable_with_reason() {
    let runner = CannedRunner::new(|_, _| Ok(err_output(1, b"SCDynamicStore unavailable")));
    let store = ScutilFieldStore::new(runner, false);

    match store.get("HostName").await {
        Err(StoreError::Unavailable { field, reason }) => {
            assert_eq!(field, "HostName");
            assert!(reason.contains("SCDynamicStore"), "got: {reason}");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn test_get_spawn_failure_is_unavailable() {
    let runner = CannedRunner::new(|_, _| anyhow::bail!("failed to spawn scutil"));
    let store = ScutilFieldStore::new(runner, false);

    assert!(matches!(
        store.get("ComputerName").await,
        Err(StoreError::Unavailable { .. })
    ));
}

#[tokio::test]
async fn test_set_invokes_scutil_set() {
    let runner = CannedRunner::new(|_, _| Ok(ok_output(b"")));
    let store = ScutilFieldStore::new(runner, false);

    store
        .set("ComputerName", "Dev-alice-MacBookPro")
        .await
        .expect("set");
    assert_eq!(
        store_calls(&store),
        vec!["scutil --set ComputerName Dev-alice-MacBookPro"]
    );
}

#[tokio::test]
async fn test_set_with_sudo_is_non_interactive() {
    let runner = CannedRunner::new(|_, _| Ok(ok_output(b"")));
    let store = ScutilFieldStore::new(runner, true);

    store.set("HostName", "Dev-bob-iMac").await.expect("set");
    assert_eq!(
        store_calls(&store),
        vec!["sudo -n scutil --set HostName Dev-bob-iMac"]
    );
}

#[tokio::test]
async fn test_set_non_zero_exit_is_write_failed() {
    let runner = CannedRunner::new(|_, _| Ok(err_output(1, b"SCPreferencesLock() failed: Permission denied")));
    let store = ScutilFieldStore::new(runner, false);

    match store.set("HostName", "x").await {
        Err(StoreError::WriteFailed { field, reason }) => {
            assert_eq!(field, "HostName");
            assert!(reason.contains("Permission denied"), "got: {reason}");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn test_set_silent_failure_reports_exit_status() {
    let runner = CannedRunner::new(|_, _| Ok(err_output(1, b"")));
    let store = ScutilFieldStore::new(runner, false);

    match store.set("HostName", "x").await {
        Err(StoreError::WriteFailed { reason, .. }) => {
            assert!(reason.contains("scutil exited"), "got: {reason}");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn test_set_timeout_is_write_failed() {
    let runner = CannedRunner::new(|_, _| anyhow::bail!("sudo timed out after 30s"));
    let store = ScutilFieldStore::new(runner, true);

    match store.set("HostName", "x").await {
        Err(StoreError::WriteFailed { reason, .. }) => {
            assert!(reason.contains("timed out"), "got: {reason}");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

fn store_calls(store: &ScutilFieldStore<CannedRunner>) -> Vec<String> {
    store.runner().calls()
}
