//! Car state submission and lookup handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use twin_core::{CarState, CarStateInput, StateFilter, StoreError};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StateListQuery {
    pub session_id: Option<String>,
    pub limit: Option<usize>,
}

/// POST /api/car-state
/// Record a new car simulation state
pub async fn create_state(
    State(state): State<AppState>,
    payload: Result<Json<CarStateInput>, JsonRejection>,
) -> Result<Json<CarState>, ApiError> {
    let Json(input) = payload.map_err(|rej| StoreError::Validation(rej.body_text()))?;

    let record = state.store().submit(input);
    tracing::debug!(id = %record.id, session_id = %record.session_id, "Recorded car state");

    Ok(Json(record))
}

/// GET /api/car-state
/// List recorded states in insertion order, optionally filtered by session
pub async fn list_states(
    State(state): State<AppState>,
    Query(query): Query<StateListQuery>,
) -> Json<Vec<CarState>> {
    let filter = if query.session_id.is_some() || query.limit.is_some() {
        Some(StateFilter {
            session_id: query.session_id,
            limit: query.limit,
        })
    } else {
        None
    };

    Json(state.store().list(filter.as_ref()))
}

/// GET /api/car-state/:state_id
/// Get one recorded state by id
pub async fn get_state(
    State(state): State<AppState>,
    Path(state_id): Path<String>,
) -> Result<Json<CarState>, ApiError> {
    let record = state.store().get(&state_id)?;
    Ok(Json(record))
}
