use axum::{extract::State, response::Json};

use crate::{directory, state::AppState};

pub async fn get_roster_handler(State(state): State<AppState>) -> Json<Vec<String>> {
    let roster = state.roster.read().await.clone();
    Json(roster)
}

/// Re-read the spreadsheet without touching the current snapshot; the next
/// aggregation pass picks up the new roster. A failed read falls back to the
/// sample roster and leaves a visible warning.
pub async fn reload_roster_handler(State(state): State<AppState>) -> Json<Vec<String>> {
    let roster = match directory::load_roster(&state.http, &state.config).await {
        Ok(roster) => {
            *state.directory_warning.write().await = None;
            roster
        }
        Err(e) => {
            tracing::warn!("Failed to reload roster from spreadsheet: {}", e);
            *state.directory_warning.write().await = Some(format!(
                "Failed to load roster from the spreadsheet: {e}. Showing the sample roster."
            ));
            directory::fallback_roster()
        }
    };

    *state.roster.write().await = roster.clone();

    Json(roster)
}
