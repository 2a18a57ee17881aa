//! Query execution handlers.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use dpql::discovery::find_unique_keys;
use dpql::{ParsedQuery, QueryResult};

use crate::server::error::ApiError;
use crate::server::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExecuteRequest {
    pub query: Option<String>,
}

#[derive(Serialize)]
pub struct ExecuteResponse {
    pub ok: bool,
    pub parsed: ParsedQuery,
    pub result: QueryResult,
}

#[derive(Serialize)]
pub struct ResultResponse {
    pub ok: bool,
    pub result: QueryResult,
}

/// Classify a DPQL query and run it over a snapshot of the registry.
pub async fn execute_query(
    State(state): State<AppState>,
    Json(request): Json<ExecuteRequest>,
) -> Result<Json<ExecuteResponse>, ApiError> {
    let query = request.query.unwrap_or_default();
    if query.trim().is_empty() {
        return Err(ApiError::BadRequest("Query is required".to_string()));
    }

    let profiler = state.profiler.clone();
    let outcome = tokio::task::spawn_blocking(move || profiler.execute_query(&query)).await??;

    Ok(Json(ExecuteResponse {
        ok: true,
        parsed: outcome.parsed,
        result: outcome.result,
    }))
}

/// Unique-key discovery without a query.
pub async fn unique_keys(State(state): State<AppState>) -> Result<Json<ResultResponse>, ApiError> {
    let snapshot = state.profiler.registry().snapshot();
    let table = tokio::task::spawn_blocking(move || find_unique_keys(&snapshot)).await?;

    Ok(Json(ResultResponse {
        ok: true,
        result: QueryResult {
            tables: vec![table],
            warnings: Vec::new(),
        },
    }))
}
