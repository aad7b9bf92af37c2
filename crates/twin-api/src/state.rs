//! Application state for the car twin API

use std::sync::Arc;

use twin_core::{CarStateStore, MetricsAggregator};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// The record store
    store: Arc<CarStateStore>,
    /// On-demand statistics over the store's contents
    metrics: Arc<MetricsAggregator>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create state with a fresh empty store
    pub fn new() -> Self {
        Self::with_store(Arc::new(CarStateStore::new()))
    }

    /// Create state around an existing store (e.g. one with injected
    /// clock/id sources)
    pub fn with_store(store: Arc<CarStateStore>) -> Self {
        Self {
            store,
            metrics: Arc::new(MetricsAggregator::new()),
        }
    }

    /// Create state with explicit store and aggregator
    pub fn with_parts(store: Arc<CarStateStore>, metrics: Arc<MetricsAggregator>) -> Self {
        Self { store, metrics }
    }

    /// Get the record store
    pub fn store(&self) -> &CarStateStore {
        &self.store
    }

    /// Get the metrics aggregator
    pub fn metrics(&self) -> &MetricsAggregator {
        &self.metrics
    }
}
