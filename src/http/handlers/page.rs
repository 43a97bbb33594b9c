use std::sync::atomic::Ordering;

use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;

use crate::{
    models::FilterBand,
    render::{self, PageStatus},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    band: Option<FilterBand>,
}

pub async fn leaderboard_page_handler(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Html<String> {
    let snapshot = state.snapshot.read().await.clone();
    let status = PageStatus {
        refreshing: state.refreshing.load(Ordering::SeqCst),
        directory_warning: state.directory_warning.read().await.clone(),
        last_error: state.last_error.read().await.clone(),
    };

    Html(render::render_page(
        &snapshot,
        query.band.unwrap_or_default(),
        &status,
    ))
}
