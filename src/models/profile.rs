use serde::{Deserialize, Serialize};

/// One tracked competitor, as assembled from the two rating-service reads.
/// Exists only for handles whose primary lookup succeeded; failed lookups
/// produce no record at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub handle: String,
    /// 0 when the service reports no rating ("unrated").
    pub rating: i64,
    pub max_rating: i64,
    pub rank: String,
    /// Signed change from the most recent contest, 0 with no history.
    pub rating_change: i64,
    pub contest_count: u64,
    pub last_online_seconds: Option<i64>,
    pub title_photo: Option<String>,
}
