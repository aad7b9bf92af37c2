//! Car state store - the append-only record collection
//!
//! Accepts state submissions, assigns identity and timestamps, and serves
//! lookups by id and by session.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::clock::{Clock, SystemClock};
use crate::error::{StoreError, StoreResult};
use crate::idgen::{IdGenerator, UuidIdGenerator};
use crate::models::{CarState, CarStateInput};

/// Filter for listing car states
#[derive(Debug, Clone, Default)]
pub struct StateFilter {
    /// Only records with exactly this session id
    pub session_id: Option<String>,
    /// Cap the number of returned records
    pub limit: Option<usize>,
}

/// Thread-safe in-memory store for car state records
///
/// Records are append-only: `submit` is the sole mutator, and a record is
/// never updated or removed afterwards. Id allocation and insertion happen
/// under one write lock, so concurrent submissions never share an id and a
/// record is fully visible before any reader can observe it.
pub struct CarStateStore {
    inner: RwLock<StoreInner>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

#[derive(Default)]
struct StoreInner {
    /// Records in insertion order
    records: Vec<CarState>,
    /// Index of record id -> position in `records`
    by_id: HashMap<String, usize>,
}

impl Default for CarStateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CarStateStore {
    /// Create an empty store backed by the system clock and UUID ids
    pub fn new() -> Self {
        Self::with_sources(Arc::new(SystemClock), Arc::new(UuidIdGenerator))
    }

    /// Create an empty store with explicit clock and id sources
    pub fn with_sources(clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            inner: RwLock::new(StoreInner::default()),
            clock,
            ids,
        }
    }

    /// Record a new car state and return it with assigned id and timestamp.
    ///
    /// Every call creates a new record, even for field-identical inputs.
    /// Timestamps are clamped so they never decrease in insertion order,
    /// regardless of wall-clock regression.
    pub fn submit(&self, input: CarStateInput) -> CarState {
        let mut inner = self.inner.write();

        let now = self.clock.now();
        let timestamp = match inner.records.last() {
            Some(prev) if prev.timestamp > now => prev.timestamp,
            _ => now,
        };

        let record = CarState {
            id: self.ids.next_id(),
            engine_running: input.engine_running,
            current_gear: input.current_gear,
            speed: input.speed,
            rpm: input.rpm,
            car_color: input.car_color,
            session_id: input.session_id,
            temperature: input.temperature,
            fuel: input.fuel,
            mileage: input.mileage,
            timestamp,
        };

        let idx = inner.records.len();
        inner.by_id.insert(record.id.clone(), idx);
        inner.records.push(record.clone());

        record
    }

    /// List records in insertion order, optionally filtered
    pub fn list(&self, filter: Option<&StateFilter>) -> Vec<CarState> {
        let inner = self.inner.read();

        let session_id = filter.and_then(|f| f.session_id.as_deref());
        let limit = filter.and_then(|f| f.limit).unwrap_or(usize::MAX);

        inner
            .records
            .iter()
            .filter(|r| session_id.map_or(true, |s| r.session_id == s))
            .take(limit)
            .cloned()
            .collect()
    }

    /// Get a record by id
    pub fn get(&self, id: &str) -> StoreResult<CarState> {
        let inner = self.inner.read();
        inner
            .by_id
            .get(id)
            .map(|&idx| inner.records[idx].clone())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Number of records in the store
    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
