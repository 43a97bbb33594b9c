use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::profile::ProfileRecord;

/// The complete ranked result of one aggregation pass. Records are sorted by
/// rating descending; the summary numbers are derived from the same records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardSnapshot {
    pub records: Vec<ProfileRecord>,
    pub count: usize,
    pub average_rating: i64,
    pub max_rating: i64,
    pub refreshed_at: Option<DateTime<Utc>>,
}
