use reqwest::Client;
use serde::Deserialize;

use crate::{config::Config, errors::DirectoryError};

/// Sample roster used when the spreadsheet is unreachable or unconfigured,
/// so the leaderboard stays demonstrable offline. Applying it is the
/// caller's decision, not this module's.
pub const FALLBACK_ROSTER: [&str; 5] = ["tourist", "Petr", "Egor", "rng_58", "ACRush"];

pub fn fallback_roster() -> Vec<String> {
    FALLBACK_ROSTER.iter().map(|h| h.to_string()).collect()
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// Fetch the tracked handles from the configured spreadsheet range. The
/// first row is a header; handles come from the first column, trimmed, with
/// empty rows discarded.
pub async fn load_roster(http: &Client, config: &Config) -> Result<Vec<String>, DirectoryError> {
    let (Some(spreadsheet_id), Some(api_key)) = (&config.spreadsheet_id, &config.sheets_api_key)
    else {
        return Err(DirectoryError::Unconfigured);
    };

    let url = format!(
        "{}/{}/values/{}?key={}",
        config.sheets_api_base, spreadsheet_id, config.sheets_range, api_key
    );

    let res = http.get(&url).send().await?;
    if !res.status().is_success() {
        return Err(DirectoryError::Status(res.status()));
    }

    let body: ValueRange = res.json().await?;
    if body.values.is_empty() {
        return Err(DirectoryError::Empty);
    }

    let roster = parse_roster_rows(&body.values);
    if roster.is_empty() {
        return Err(DirectoryError::NoUsableRows);
    }

    tracing::info!("Loaded {} handles from the spreadsheet", roster.len());

    Ok(roster)
}

pub fn parse_roster_rows(rows: &[Vec<String>]) -> Vec<String> {
    rows.iter()
        .skip(1)
        .filter_map(|row| row.first())
        .map(|cell| cell.trim())
        .filter(|cell| !cell.is_empty())
        .map(|cell| cell.to_string())
        .collect()
}
