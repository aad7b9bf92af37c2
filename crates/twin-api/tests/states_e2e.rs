//! E2E tests for the car state API with injected clock and id sources
//!
//! The store behind the router is built with deterministic capabilities so
//! responses can be asserted by exact value rather than shape alone.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use twin_api::{create_router, AppState};
use twin_client::testing::TestServer;
use twin_client::CarStateInput;
use twin_core::{CarStateStore, Clock, IdGenerator, MetricsAggregator};

// =============================================================================
// Deterministic Sources
// =============================================================================

/// Id source yielding car-1, car-2, ...
struct SequentialIds(AtomicU64);

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        format!("car-{}", self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

async fn create_test_server() -> TestServer {
    let clock = Arc::new(FixedClock(epoch()));
    let store = Arc::new(CarStateStore::with_sources(
        clock.clone(),
        Arc::new(SequentialIds(AtomicU64::new(0))),
    ));
    let state = AppState::with_parts(store, Arc::new(MetricsAggregator::with_clock(clock)));

    TestServer::start(create_router(state))
        .await
        .expect("Failed to start test server")
}

fn sample_input(session: &str) -> CarStateInput {
    CarStateInput {
        engine_running: true,
        current_gear: "D".to_string(),
        speed: 45.0,
        rpm: 2500.0,
        car_color: "#ff6b6b".to_string(),
        session_id: session.to_string(),
        temperature: 85.0,
        fuel: 60.0,
        mileage: 0.0,
    }
}

// =============================================================================
// Exact-Value Assertions
// =============================================================================

#[tokio::test]
async fn test_created_states_use_injected_sources() {
    let server = create_test_server().await;

    let first = server.client.create_state(&sample_input("s-1")).await.unwrap();
    let second = server.client.create_state(&sample_input("s-2")).await.unwrap();

    assert_eq!(first.id, "car-1");
    assert_eq!(second.id, "car-2");
    assert_eq!(first.timestamp, epoch());
    assert_eq!(second.timestamp, epoch());
}

#[tokio::test]
async fn test_get_by_exact_id() {
    let server = create_test_server().await;
    server.client.create_state(&sample_input("s-1")).await.unwrap();

    let fetched = server.client.get_state("car-1").await.unwrap();

    assert_eq!(fetched.id, "car-1");
    assert_eq!(fetched.session_id, "s-1");
}

#[tokio::test]
async fn test_metrics_last_updated_uses_injected_clock() {
    let server = create_test_server().await;
    server.client.create_state(&sample_input("s-1")).await.unwrap();

    let metrics = server.client.metrics().await.unwrap();

    assert_eq!(metrics.last_updated, epoch());
    assert_eq!(metrics.total_simulations, 1);
}
