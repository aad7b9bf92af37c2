//! Metrics aggregation over stored car states
//!
//! Statistics are recomputed from the full record set on every call rather
//! than maintained incrementally, so a snapshot can never go stale.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SystemClock};
use crate::models::CarState;

/// Engine temperature reported for an empty store (the simulation's idle value)
const IDLE_TEMPERATURE: f64 = 85.0;

/// Summary statistics over all stored car states
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    /// Count of all recorded states
    pub total_simulations: usize,
    /// Count of distinct session ids
    pub unique_sessions: usize,
    /// Mean speed in mph, 2 decimal places
    pub average_speed: f64,
    /// Mean engine speed, rounded to a whole number
    #[serde(rename = "averageRPM")]
    pub average_rpm: f64,
    /// Mean engine temperature, 2 decimal places
    pub average_temperature: f64,
    /// Mean odometer reading, 2 decimal places
    pub average_mileage: f64,
    /// Share of records with the engine running, in percent
    pub engine_running_percentage: f64,
    /// When this snapshot was produced (not the newest record timestamp)
    pub last_updated: DateTime<Utc>,
}

/// Computes [`MetricsSnapshot`]s from a record set
pub struct MetricsAggregator {
    clock: Arc<dyn Clock>,
}

impl Default for MetricsAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsAggregator {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Compute summary statistics over the given records.
    ///
    /// Always succeeds; an empty record set yields zeroed averages (and the
    /// idle temperature) instead of dividing by zero.
    pub fn compute(&self, records: &[CarState]) -> MetricsSnapshot {
        let total = records.len();
        let sessions: HashSet<&str> = records.iter().map(|r| r.session_id.as_str()).collect();

        let (average_speed, average_rpm, average_temperature, average_mileage, running_pct) =
            if total == 0 {
                (0.0, 0.0, IDLE_TEMPERATURE, 0.0, 0.0)
            } else {
                let n = total as f64;
                let speed = records.iter().map(|r| r.speed).sum::<f64>() / n;
                let rpm = records.iter().map(|r| r.rpm).sum::<f64>() / n;
                let temperature = records.iter().map(|r| r.temperature).sum::<f64>() / n;
                let mileage = records.iter().map(|r| r.mileage).sum::<f64>() / n;
                let running = records.iter().filter(|r| r.engine_running).count() as f64;
                (speed, rpm, temperature, mileage, running / n * 100.0)
            };

        MetricsSnapshot {
            total_simulations: total,
            unique_sessions: sessions.len(),
            average_speed: round2(average_speed),
            average_rpm: average_rpm.round(),
            average_temperature: round2(average_temperature),
            average_mileage: round2(average_mileage),
            engine_running_percentage: round2(running_pct),
            last_updated: self.clock.now(),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn epoch() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn aggregator() -> MetricsAggregator {
        MetricsAggregator::with_clock(Arc::new(FixedClock(epoch())))
    }

    fn record(engine_running: bool, speed: f64, rpm: f64, session: &str) -> CarState {
        CarState {
            id: format!("state-{}", session),
            engine_running,
            current_gear: "D".to_string(),
            speed,
            rpm,
            car_color: "#ff6b6b".to_string(),
            session_id: session.to_string(),
            temperature: 85.0,
            fuel: 60.0,
            mileage: 0.0,
            timestamp: epoch(),
        }
    }

    #[test]
    fn test_empty_store_metrics() {
        let snapshot = aggregator().compute(&[]);

        assert_eq!(snapshot.total_simulations, 0);
        assert_eq!(snapshot.unique_sessions, 0);
        assert_eq!(snapshot.average_speed, 0.0);
        assert_eq!(snapshot.average_rpm, 0.0);
        assert_eq!(snapshot.average_temperature, IDLE_TEMPERATURE);
        assert_eq!(snapshot.average_mileage, 0.0);
        assert_eq!(snapshot.engine_running_percentage, 0.0);
        assert_eq!(snapshot.last_updated, epoch());
    }

    #[test]
    fn test_worked_example() {
        let records = vec![
            record(true, 45.0, 2500.0, "a"),
            record(false, 0.0, 0.0, "b"),
            record(true, 85.0, 4200.0, "c"),
            record(true, 5.0, 1200.0, "d"),
        ];

        let snapshot = aggregator().compute(&records);

        assert_eq!(snapshot.total_simulations, 4);
        assert_eq!(snapshot.unique_sessions, 4);
        assert_eq!(snapshot.average_speed, 33.75);
        assert_eq!(snapshot.average_rpm, 1975.0);
        assert_eq!(snapshot.engine_running_percentage, 75.0);
    }

    #[test]
    fn test_duplicate_sessions_counted_once() {
        let records = vec![
            record(true, 10.0, 1000.0, "a"),
            record(true, 20.0, 2000.0, "a"),
            record(true, 30.0, 3000.0, "b"),
        ];

        let snapshot = aggregator().compute(&records);

        assert_eq!(snapshot.total_simulations, 3);
        assert_eq!(snapshot.unique_sessions, 2);
        assert_eq!(snapshot.average_speed, 20.0);
    }

    #[test]
    fn test_rpm_rounds_to_whole_number() {
        let records = vec![
            record(true, 0.0, 100.0, "a"),
            record(true, 0.0, 101.0, "b"),
        ];

        let snapshot = aggregator().compute(&records);

        // 100.5 rounds away from zero
        assert_eq!(snapshot.average_rpm, 101.0);
    }

    #[test]
    fn test_speed_rounds_to_two_decimals() {
        let records = vec![
            record(true, 10.0, 0.0, "a"),
            record(true, 10.0, 0.0, "b"),
            record(true, 11.0, 0.0, "c"),
        ];

        let snapshot = aggregator().compute(&records);

        // 31/3 = 10.333... -> 10.33
        assert_eq!(snapshot.average_speed, 10.33);
    }

    #[test]
    fn test_snapshot_serializes_with_wire_field_names() {
        let snapshot = aggregator().compute(&[]);
        let value = serde_json::to_value(&snapshot).unwrap();

        for key in [
            "totalSimulations",
            "uniqueSessions",
            "averageSpeed",
            "averageRPM",
            "averageTemperature",
            "averageMileage",
            "engineRunningPercentage",
            "lastUpdated",
        ] {
            assert!(value.get(key).is_some(), "missing key {}", key);
        }
    }
}
