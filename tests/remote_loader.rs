//! Load sequence behaviour: attempts, retries, timeouts and supersession.

mod common;

use std::time::Duration;

use common::fake_runtime::FakeRuntime;
use common::{component, request};
use remote_toast::federation::{FixedLocator, RemoteModule};
use remote_toast::loader::{LoadState, RemoteLoader};
use serde_json::json;
use tokio::time::Instant;

/// Every distinct state a handle observes until the sequence settles.
async fn trace(loader: &RemoteLoader, req: remote_toast::loader::LoadRequest) -> Vec<LoadState> {
    let mut handle = loader.load(req);
    let mut states = vec![handle.current()];
    while !states.last().unwrap().is_terminal() {
        let state = handle.changed().await.expect("loader alive");
        if states.last() != Some(&state) {
            states.push(state);
        }
    }
    states
}

#[tokio::test(start_paused = true)]
async fn starts_in_loading() {
    let runtime = FakeRuntime::new().resolve_default(component("Toast"));
    let loader = RemoteLoader::new(runtime.locator());

    let handle = loader.load(request("test-module", 1000, 0, 0));

    let state = handle.current();
    assert!(state.is_loading());
    assert!(state.component().is_none());
    assert!(state.error().is_none());
}

#[tokio::test(start_paused = true)]
async fn zero_retries_success_makes_one_attempt() {
    let toast = component("Toast");
    let runtime = FakeRuntime::new().resolve_default(toast.clone());
    let loader = RemoteLoader::new(runtime.locator());

    let state = loader.run(request("remoteToast/Toast", 1000, 0, 100)).await;

    assert_eq!(state, LoadState::Succeeded { component: toast });
    assert_eq!(runtime.call_count(), 1);
    assert_eq!(runtime.calls()[0].module_path, "remoteToast/Toast");
}

#[tokio::test(start_paused = true)]
async fn zero_retries_failure_never_waits() {
    let runtime = FakeRuntime::new().fail("Module not found");
    let loader = RemoteLoader::new(runtime.locator());
    let start = Instant::now();

    let state = loader.run(request("failed-module", 1000, 0, 500)).await;

    assert_eq!(
        state,
        LoadState::Failed {
            error: "Module not found".into()
        }
    );
    assert_eq!(runtime.call_count(), 1);
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn every_attempt_failing_makes_n_plus_one_attempts() {
    let runtime = FakeRuntime::new()
        .fail("one")
        .fail("two")
        .fail("three")
        .fail("four");
    let loader = RemoteLoader::new(runtime.locator());
    let start = Instant::now();

    let state = loader.run(request("pkg/Widget", 1000, 3, 100)).await;

    assert_eq!(state.error(), Some("four"));
    let offsets: Vec<Duration> = runtime
        .calls()
        .iter()
        .map(|call| call.at.duration_since(start))
        .collect();
    assert_eq!(
        offsets,
        vec![
            Duration::ZERO,
            Duration::from_millis(100),
            Duration::from_millis(200),
            Duration::from_millis(300),
        ]
    );
    assert_eq!(start.elapsed(), Duration::from_millis(300));
}

#[tokio::test(start_paused = true)]
async fn late_resolution_loses_to_timeout() {
    let runtime = FakeRuntime::new().resolve_after(
        1500,
        RemoteModule::new().with_component("default", component("Toast")),
    );
    let loader = RemoteLoader::new(runtime.locator());
    let start = Instant::now();

    let state = loader.run(request("pkg/Widget", 1000, 0, 0)).await;

    assert_eq!(
        state,
        LoadState::Failed {
            error: "Timeout loading remote component from pkg/Widget after 1000ms".into()
        }
    );
    assert_eq!(start.elapsed(), Duration::from_millis(1000));

    // The abandoned resolution never shows up.
    tokio::time::sleep(Duration::from_secs(2)).await;
    assert!(loader.state().error().is_some());
}

#[tokio::test(start_paused = true)]
async fn timeout_applies_per_attempt() {
    let toast = component("Toast");
    let runtime = FakeRuntime::new()
        .resolve_after(5000, RemoteModule::new())
        .resolve_after(900, RemoteModule::new().with_component("default", toast.clone()));
    let loader = RemoteLoader::new(runtime.locator());
    let start = Instant::now();

    let state = loader.run(request("pkg/Widget", 1000, 1, 100)).await;

    assert_eq!(state, LoadState::Succeeded { component: toast });
    assert_eq!(start.elapsed(), Duration::from_millis(1000 + 100 + 900));
}

#[tokio::test(start_paused = true)]
async fn retry_then_success_trace() {
    let widget = component("Widget");
    let runtime = FakeRuntime::new()
        .fail("network down")
        .resolve_default(widget.clone());
    let loader = RemoteLoader::new(runtime.locator());
    let start = Instant::now();

    let states = trace(&loader, request("pkg/Widget", 1000, 1, 100)).await;

    assert_eq!(
        states,
        vec![LoadState::Loading, LoadState::Succeeded { component: widget }]
    );
    assert_eq!(start.elapsed(), Duration::from_millis(100));
    assert_eq!(runtime.call_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn both_attempts_failing_report_last_message() {
    let runtime = FakeRuntime::new()
        .fail("network down")
        .fail("network down");
    let loader = RemoteLoader::new(runtime.locator());
    let start = Instant::now();

    let state = loader.run(request("pkg/Widget", 1000, 1, 100)).await;

    assert_eq!(
        state,
        LoadState::Failed {
            error: "network down".into()
        }
    );
    assert_eq!(start.elapsed(), Duration::from_millis(100));
    assert_eq!(runtime.call_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn missing_runtime_is_a_retried_failure() {
    let loader = RemoteLoader::new(FixedLocator::none());
    let start = Instant::now();

    let state = loader.run(request("pkg/Widget", 1000, 2, 50)).await;

    assert_eq!(
        state,
        LoadState::Failed {
            error: "No federation runtime instance found".into()
        }
    );
    assert_eq!(start.elapsed(), Duration::from_millis(100));
}

#[tokio::test(start_paused = true)]
async fn module_without_component_fails_extraction() {
    let plain = RemoteModule::new().with_value("version", json!("1.0.0"));
    let runtime = FakeRuntime::new()
        .resolve_after(0, plain.clone())
        .resolve_after(0, plain);
    let loader = RemoteLoader::new(runtime.locator());

    let state = loader.run(request("pkg/Widget", 1000, 1, 10)).await;

    assert_eq!(
        state.error(),
        Some("No valid component found in module. Expected a function, got: object")
    );
    assert_eq!(runtime.call_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn preferred_export_is_used() {
    let widget = component("Widget");
    let module = RemoteModule::new()
        .with_component("default", component("default"))
        .with_component("Widget", widget.clone());
    let runtime = FakeRuntime::new().resolve_after(0, module);
    let loader = RemoteLoader::new(runtime.locator());

    let state = loader
        .run(request("pkg/Widget", 1000, 0, 0).with_export("Widget"))
        .await;

    assert_eq!(state.component(), Some(&widget));
}

#[tokio::test(start_paused = true)]
async fn new_sequence_supersedes_pending_one() {
    let first = component("First");
    let second = component("Second");
    let runtime = FakeRuntime::new()
        .resolve_after(500, RemoteModule::new().with_component("default", first))
        .resolve_after(50, RemoteModule::new().with_component("default", second.clone()));
    let loader = RemoteLoader::new(runtime.locator());

    let mut stale = loader.load(request("pkg/First", 1000, 0, 0));
    tokio::time::sleep(Duration::from_millis(100)).await;
    let mut fresh = loader.load(request("pkg/Second", 1000, 0, 0));

    let expected = LoadState::Succeeded { component: second };
    assert_eq!(fresh.settled().await, Some(expected.clone()));
    assert_eq!(stale.settled().await, Some(expected.clone()));

    // Past the point where the first sequence would have resolved.
    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(loader.state(), expected);
    assert_eq!(loader.sequence().generation(), 2);
    assert_eq!(stale.generation(), 1);
}

#[tokio::test(start_paused = true)]
async fn restart_cancels_pending_retry() {
    let toast = component("Toast");
    let runtime = FakeRuntime::new()
        .fail("network down")
        .resolve_default(toast.clone());
    let loader = RemoteLoader::new(runtime.locator());

    let _first = loader.load(request("pkg/First", 1000, 3, 1000));
    // First attempt fails and the sequence waits out its retry delay.
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(runtime.call_count(), 1);

    let state = loader.run(request("pkg/Second", 1000, 0, 0)).await;
    assert_eq!(state, LoadState::Succeeded { component: toast });

    tokio::time::sleep(Duration::from_secs(5)).await;
    let paths: Vec<String> = runtime.calls().into_iter().map(|c| c.module_path).collect();
    assert_eq!(paths, vec!["pkg/First".to_string(), "pkg/Second".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn dropping_loader_abandons_sequence() {
    let runtime = FakeRuntime::new().resolve_default(component("Toast"));
    let loader = RemoteLoader::new(runtime.locator());
    let mut handle = loader.load(request("pkg/Widget", 1000, 0, 0));

    drop(loader);

    assert_eq!(handle.settled().await, None);
    assert_eq!(runtime.call_count(), 0);
}
