use reqwest::Client;
use serde::Deserialize;

use crate::{config::Config, errors::LookupError, models::ProfileRecord};

// Codeforces wraps every response in {status, comment?, result?} where
// status "OK" means result is present.
#[derive(Debug, Deserialize)]
struct CfEnvelope<T> {
    status: String,
    comment: Option<String>,
    result: Option<T>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CfUser {
    handle: String,
    rating: Option<i64>,
    max_rating: Option<i64>,
    rank: Option<String>,
    last_online_time_seconds: Option<i64>,
    title_photo: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingChange {
    pub old_rating: i64,
    pub new_rating: i64,
}

/// Build one profile record from two independent reads: `user.info` is
/// required, `user.rating` is a best-effort enrichment whose failure only
/// zeroes the change and contest-count columns.
pub async fn fetch_profile(
    http: &Client,
    config: &Config,
    handle: &str,
) -> Result<ProfileRecord, LookupError> {
    let url = format!("{}/user.info?handles={}", config.cf_api_base, handle);

    let res = http.get(&url).send().await?;
    if !res.status().is_success() {
        return Err(LookupError::Status(res.status()));
    }

    let body: CfEnvelope<Vec<CfUser>> = res.json().await?;
    if body.status != "OK" {
        return Err(LookupError::Rejected(
            body.comment
                .unwrap_or_else(|| format!("user {handle} not found")),
        ));
    }

    let user = body
        .result
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or(LookupError::MissingProfile)?;

    let history = match fetch_rating_history(http, config, handle).await {
        Ok(history) => history,
        Err(e) => {
            tracing::warn!("Rating history unavailable for {}: {}", handle, e);
            Vec::new()
        }
    };

    Ok(ProfileRecord {
        handle: user.handle,
        rating: user.rating.unwrap_or(0),
        max_rating: user.max_rating.unwrap_or(0),
        rank: user.rank.unwrap_or_else(|| "unrated".to_string()),
        rating_change: latest_rating_change(&history),
        contest_count: history.len() as u64,
        last_online_seconds: user.last_online_time_seconds,
        title_photo: user.title_photo,
    })
}

async fn fetch_rating_history(
    http: &Client,
    config: &Config,
    handle: &str,
) -> Result<Vec<RatingChange>, LookupError> {
    let url = format!("{}/user.rating?handle={}", config.cf_api_base, handle);

    let res = http.get(&url).send().await?;
    if !res.status().is_success() {
        return Err(LookupError::Status(res.status()));
    }

    let body: CfEnvelope<Vec<RatingChange>> = res.json().await?;
    if body.status != "OK" {
        return Err(LookupError::Rejected(
            body.comment
                .unwrap_or_else(|| format!("no rating history for {handle}")),
        ));
    }

    Ok(body.result.unwrap_or_default())
}

/// History is chronological, so the last entry is the most recent contest.
pub fn latest_rating_change(history: &[RatingChange]) -> i64 {
    history
        .last()
        .map(|change| change.new_rating - change.old_rating)
        .unwrap_or(0)
}
