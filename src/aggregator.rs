use std::sync::atomic::Ordering;

use chrono::Utc;
use futures::{StreamExt, stream};

use crate::{
    errors::{AggregationError, LookupError},
    lookup,
    models::{LeaderboardSnapshot, ProfileRecord},
    state::AppState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Completed,
    /// A pass was already in flight; the trigger was dropped, not queued.
    AlreadyRunning,
}

/// Run one aggregation pass: fan out a lookup per handle, wait for every
/// lookup to settle, drop the failures, sort and publish a new snapshot.
/// At most one pass runs at a time process-wide.
pub async fn refresh_leaderboard(state: &AppState) -> Result<RefreshOutcome, AggregationError> {
    if state
        .refreshing
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        tracing::debug!("Refresh already in progress, dropping trigger");
        return Ok(RefreshOutcome::AlreadyRunning);
    }

    let result = run_pass(state).await;
    state.refreshing.store(false, Ordering::SeqCst);

    match &result {
        Ok(_) => *state.last_error.write().await = None,
        Err(e) => {
            tracing::error!("Failed to update leaderboard: {}", e);
            *state.last_error.write().await = Some(e.to_string());
        }
    }

    result.map(|_| RefreshOutcome::Completed)
}

async fn run_pass(state: &AppState) -> Result<(), AggregationError> {
    let handles = state.roster.read().await.clone();
    if handles.is_empty() {
        return Err(AggregationError::EmptyRoster);
    }

    // Every lookup settles before the join completes; one failing handle
    // never cancels the others.
    let results: Vec<(String, Result<ProfileRecord, LookupError>)> =
        stream::iter(handles.into_iter().map(|handle| {
            let http = state.http.clone();
            let config = state.config.clone();
            async move {
                let outcome = lookup::fetch_profile(&http, &config, &handle).await;
                (handle, outcome)
            }
        }))
        .buffer_unordered(state.config.lookup_concurrency)
        .collect()
        .await;

    let profiles = collect_settled(results);
    let snapshot = build_snapshot(profiles);

    tracing::info!("Leaderboard updated with {} entries", snapshot.count);

    *state.snapshot.write().await = snapshot;

    Ok(())
}

/// Keep the successful lookups in settle order; failures are logged and
/// leave no trace in the snapshot.
pub fn collect_settled(
    results: Vec<(String, Result<ProfileRecord, LookupError>)>,
) -> Vec<ProfileRecord> {
    let mut profiles = Vec::with_capacity(results.len());

    for (handle, result) in results {
        match result {
            Ok(profile) => profiles.push(profile),
            Err(e) => tracing::warn!("Dropping {} from this pass: {}", handle, e),
        }
    }

    profiles
}

/// Sort by rating descending (stable, so settle order breaks ties) and
/// derive the summary numbers.
pub fn build_snapshot(mut profiles: Vec<ProfileRecord>) -> LeaderboardSnapshot {
    profiles.sort_by_key(|p| std::cmp::Reverse(p.rating));

    let count = profiles.len();
    let average_rating = if count == 0 {
        0
    } else {
        let sum: i64 = profiles.iter().map(|p| p.rating).sum();
        (sum as f64 / count as f64).round() as i64
    };
    let max_rating = profiles.iter().map(|p| p.rating).max().unwrap_or(0);

    LeaderboardSnapshot {
        records: profiles,
        count,
        average_rating,
        max_rating,
        refreshed_at: Some(Utc::now()),
    }
}
