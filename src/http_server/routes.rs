//! Grid and health routes
//!
//! The grid endpoint answers validation failures in-protocol (HTTP 200,
//! `error` populated, draw echoed) so an unmodified grid client can show
//! them; only store failures become HTTP error responses.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::grid::{GridEngine, GridError, GridRequest, GridResponse, GridResult};
use crate::observability::Logger;
use crate::people::{self, Person};
use crate::source::MemorySource;

/// Shared state for the grid routes
pub struct GridState {
    engine: GridEngine<MemorySource<Person>>,
    max_page_length: usize,
}

impl GridState {
    /// Creates the state over an in-memory people source
    pub fn new(people: Vec<Person>, max_page_length: usize) -> Self {
        Self {
            engine: GridEngine::new(people::column_registry(), MemorySource::new(people)),
            max_page_length,
        }
    }

    /// Returns the engine
    pub fn engine(&self) -> &GridEngine<MemorySource<Person>> {
        &self.engine
    }
}

/// Builds the grid router
pub fn grid_routes(state: Arc<GridState>) -> Router {
    Router::new()
        .route("/people", get(people_page))
        .with_state(state)
}

/// Builds the health-check router
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({"status": "ok", "service": "gridserve"}))
}

/// People grid handler
async fn people_page(
    State(state): State<Arc<GridState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<GridResponse<Person>>, GridError> {
    Ok(Json(page_response(&state, &params)?))
}

/// Serves one grid request, folding validation failures into the protocol
/// error shape
pub fn page_response(
    state: &GridState,
    params: &HashMap<String, String>,
) -> GridResult<GridResponse<Person>> {
    let request = match GridRequest::parse(params, state.max_page_length) {
        Ok(request) => request,
        Err(e) => {
            let draw = GridRequest::draw_hint(params);
            let message = e.to_string();
            Logger::warn(
                "REQUEST_REJECTED",
                &[("draw", &draw.to_string()), ("reason", &message)],
            );
            return Ok(GridResponse::failure(draw, message));
        }
    };

    match state.engine.page::<Person>(&request) {
        Ok(response) => {
            Logger::info(
                "PAGE_SERVED",
                &[
                    ("draw", &request.draw.to_string()),
                    ("filtered", &response.records_filtered.to_string()),
                    ("returned", &response.data.len().to_string()),
                    ("total", &response.records_total.to_string()),
                ],
            );
            Ok(response)
        }
        Err(GridError::Validation(message)) => {
            Logger::warn(
                "REQUEST_REJECTED",
                &[("draw", &request.draw.to_string()), ("reason", &message)],
            );
            Ok(GridResponse::failure(request.draw, message))
        }
        Err(e) => {
            Logger::error("STORE_QUERY_FAILED", &[("reason", &e.to_string())]);
            Err(e)
        }
    }
}
