use axum::http::StatusCode;
use thiserror::Error;

/// Roster source failures. Callers are expected to fall back to the sample
/// roster and surface a warning instead of aborting.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("spreadsheet id or api key not configured")]
    Unconfigured,

    #[error("spreadsheet request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("spreadsheet request returned status {0}")]
    Status(StatusCode),

    #[error("no data found in the spreadsheet")]
    Empty,

    #[error("spreadsheet contains no usable handles")]
    NoUsableRows,
}

/// Per-handle lookup failures. These never fail an aggregation pass; the
/// handle is simply dropped from the snapshot and logged.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("rating service request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("rating service returned status {0}")]
    Status(StatusCode),

    #[error("rating service rejected the request: {0}")]
    Rejected(String),

    #[error("rating service returned no profile")]
    MissingProfile,
}

/// Failures of a whole aggregation pass. The previous snapshot stays in
/// place and the message is shown on the page.
#[derive(Error, Debug)]
pub enum AggregationError {
    #[error("roster is empty, nothing to aggregate")]
    EmptyRoster,
}

impl AggregationError {
    pub fn to_response(&self) -> (StatusCode, String) {
        match self {
            AggregationError::EmptyRoster => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        }
    }
}
