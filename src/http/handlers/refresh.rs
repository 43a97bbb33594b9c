use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{Value, json};

use crate::{
    aggregator::{self, RefreshOutcome},
    state::AppState,
};

/// Manual trigger. Shares the aggregator's busy guard with the scheduler, so
/// a trigger during a running pass is a no-op.
pub async fn trigger_refresh_handler(
    State(state): State<AppState>,
) -> Result<Json<Value>, (StatusCode, String)> {
    match aggregator::refresh_leaderboard(&state).await {
        Ok(RefreshOutcome::Completed) => Ok(Json(json!({ "status": "refreshed" }))),
        Ok(RefreshOutcome::AlreadyRunning) => Ok(Json(json!({ "status": "alreadyRunning" }))),
        Err(e) => {
            tracing::error!("Manual refresh failed: {}", e);
            Err(e.to_response())
        }
    }
}
