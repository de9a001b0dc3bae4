//! End-to-end monitor tests against mock stats endpoints.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use stats_monitor::config::MonitorConfig;
use stats_monitor::fetch::{FetchError, Fetcher};
use stats_monitor::lifecycle::Shutdown;
use stats_monitor::monitor::{
    CycleError, CycleOutcome, MemorySink, Monitor, MonitorExit, NoopSleeper, FATAL_MESSAGE,
    INVALID_FORMAT_MESSAGE,
};

mod common;

fn config_for(addr: std::net::SocketAddr) -> MonitorConfig {
    MonitorConfig {
        server_url: format!("http://{}/_stats", addr),
        ..MonitorConfig::default()
    }
}

#[tokio::test]
async fn test_warnings_from_live_endpoint() {
    let addr = common::start_mock_backend("40,8192,4096,524288,498532,1000,500\n").await;
    let mut monitor = Monitor::new(
        config_for(addr),
        common::direct_fetcher(),
        NoopSleeper::new(),
        MemorySink::new(),
    );

    let outcome = monitor.cycle().await;

    assert!(matches!(outcome, CycleOutcome::Evaluated(ref w) if w.len() == 2));
    assert_eq!(
        monitor.sink().lines(),
        &[
            "Load Average is too high: 40".to_string(),
            "Free disk space is too low: 0 Mb left".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_failing_endpoint_terminates_after_three_attempts() {
    let calls = Arc::new(AtomicU32::new(0));
    let counter = calls.clone();
    let addr = common::start_programmable_backend(move || {
        let counter = counter.clone();
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            (503, "Service Unavailable".into())
        }
    })
    .await;

    let shutdown = Shutdown::new();
    let mut monitor = Monitor::new(
        config_for(addr),
        common::direct_fetcher(),
        NoopSleeper::new(),
        MemorySink::new(),
    );

    let exit = monitor.run(shutdown.subscribe()).await;

    assert_eq!(exit, MonitorExit::FetchBudgetExhausted);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert_eq!(monitor.sink().lines(), &[FATAL_MESSAGE.to_string()]);
}

#[tokio::test]
async fn test_intermittent_success_never_terminates() {
    let calls = Arc::new(AtomicU32::new(0));
    let counter = calls.clone();
    let addr = common::start_programmable_backend(move || {
        let counter = counter.clone();
        async move {
            // 500, 500, 200, 500, 500, 200, ...
            if counter.fetch_add(1, Ordering::SeqCst) % 3 == 2 {
                (200, "10,8192,4096,524288,100000,1000,100".into())
            } else {
                (500, "boom".into())
            }
        }
    })
    .await;

    let mut monitor = Monitor::new(
        config_for(addr),
        common::direct_fetcher(),
        NoopSleeper::new(),
        MemorySink::new(),
    );

    for cycle in 0..9 {
        let outcome = monitor.cycle().await;
        assert_ne!(outcome, CycleOutcome::Exhausted, "cycle {cycle}");
        let expected = if cycle % 3 == 2 { 0 } else { cycle % 3 + 1 };
        assert_eq!(monitor.failures(), expected, "cycle {cycle}");
    }
    assert!(monitor.sink().lines().is_empty());
}

#[tokio::test]
async fn test_malformed_line_reported() {
    let addr = common::start_mock_backend("1,2,3,4,5\n").await;
    let mut monitor = Monitor::new(
        config_for(addr),
        common::direct_fetcher(),
        NoopSleeper::new(),
        MemorySink::new(),
    );

    assert_eq!(
        monitor.cycle().await,
        CycleOutcome::Skipped(CycleError::Format { fields: 5 })
    );
    assert_eq!(monitor.failures(), 0);
    assert_eq!(monitor.sink().lines(), &[INVALID_FORMAT_MESSAGE.to_string()]);
}

#[tokio::test]
async fn test_truncated_body_is_read_error() {
    let addr = common::start_truncating_backend().await;
    let fetcher = common::direct_fetcher();

    let err = fetcher
        .fetch(&format!("http://{}/_stats", addr))
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Body(_)));

    let mut monitor = Monitor::new(config_for(addr), fetcher, NoopSleeper::new(), MemorySink::new());
    assert!(matches!(
        monitor.cycle().await,
        CycleOutcome::Skipped(CycleError::Read(_))
    ));
    assert_eq!(monitor.failures(), 0);
    assert!(monitor.sink().lines()[0].starts_with("Error reading response body: "));
}

#[tokio::test]
async fn test_closed_port_is_transport_error() {
    let addr = common::closed_port().await;
    let err = common::direct_fetcher()
        .fetch(&format!("http://{}/_stats", addr))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Transport(_)));
    assert!(err.counts_toward_abort());
}

#[tokio::test]
async fn test_not_found_is_status_error() {
    let addr = common::start_programmable_backend(|| async { (404, "missing".to_string()) }).await;
    let err = common::direct_fetcher()
        .fetch(&format!("http://{}/_stats", addr))
        .await
        .unwrap_err();

    assert_eq!(err, FetchError::Status(404));
}
