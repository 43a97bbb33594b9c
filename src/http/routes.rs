use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    http::handlers::{
        get_leaderboard_handler, get_roster_handler, leaderboard_page_handler,
        reload_roster_handler, trigger_refresh_handler,
    },
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(leaderboard_page_handler))
        .route("/api/leaderboard", get(get_leaderboard_handler))
        .route("/api/roster", get(get_roster_handler))
        .route("/api/roster/reload", post(reload_roster_handler))
        .route("/api/refresh", post(trigger_refresh_handler))
        .with_state(state)
}
