pub mod aggregator;
pub mod config;
pub mod directory;
pub mod errors;
mod http;
pub mod lookup;
mod middleware;
pub mod models;
pub mod render;
mod scheduler;
pub mod state;

use std::net::SocketAddr;

use axum::{Router, middleware as axum_middleware};
use middleware::{cors_layer, create_global_rate_limiter, rate_limit_middleware};

use crate::{config::Config, state::AppState};

pub async fn start_server() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    let port = config.port;
    let state = AppState::new(config);

    // Falling back to the sample roster is decided here, not in the
    // directory module, so the leaderboard stays demonstrable offline.
    match directory::load_roster(&state.http, &state.config).await {
        Ok(roster) => {
            *state.roster.write().await = roster;
        }
        Err(e) => {
            tracing::warn!("Failed to load roster from spreadsheet: {}", e);
            *state.roster.write().await = directory::fallback_roster();
            *state.directory_warning.write().await = Some(format!(
                "Failed to load roster from the spreadsheet: {e}. Showing the sample roster."
            ));
            tracing::info!("Using fallback sample roster");
        }
    }

    scheduler::spawn_refresh_loop(state.clone());

    let global_rate_limiter = create_global_rate_limiter();
    let cors = cors_layer(&state.config);

    let app = Router::new()
        .merge(http::create_http_routes(state))
        .layer(axum_middleware::from_fn(move |req, next| {
            rate_limit_middleware(global_rate_limiter.clone(), req, next)
        }))
        .layer(cors)
        .fallback(|| async { "404 Not Found" });

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("Failed to bind address");

    tracing::info!("Leaderboard running at http://127.0.0.1:{port}/");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
