use tokio::time::sleep;

use crate::{aggregator, state::AppState};

/// One pass immediately, then one per configured interval. Errors are
/// recorded on the state by the aggregator and shown on the page; the loop
/// itself never stops.
pub fn spawn_refresh_loop(state: AppState) {
    tokio::spawn(async move {
        loop {
            let _ = aggregator::refresh_leaderboard(&state).await;
            sleep(state.config.refresh_interval).await;
        }
    });
}
