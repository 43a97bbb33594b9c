use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;

use crate::{
    models::{FilterBand, LeaderboardSnapshot},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    band: Option<FilterBand>,
}

/// Current snapshot as JSON. An optional band narrows the visible records;
/// the summary numbers always describe the whole snapshot.
pub async fn get_leaderboard_handler(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> Json<LeaderboardSnapshot> {
    let mut snapshot = state.snapshot.read().await.clone();

    let band = query.band.unwrap_or_default();
    if band != FilterBand::All {
        snapshot.records.retain(|record| band.matches(record.rating));
    }

    Json(snapshot)
}
