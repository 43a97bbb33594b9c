use std::time::Duration;

/// Runtime configuration, read once at startup. Every value has a default so
/// the binary stays runnable with an empty environment; without sheet
/// credentials the roster falls back to the sample list.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub spreadsheet_id: Option<String>,
    pub sheets_api_key: Option<String>,
    pub sheets_range: String,
    pub sheets_api_base: String,
    pub cf_api_base: String,
    pub refresh_interval: Duration,
    pub lookup_concurrency: usize,
    pub lookup_timeout: Duration,
    pub allowed_origins: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3001,
            spreadsheet_id: None,
            sheets_api_key: None,
            sheets_range: "Sheet1!A:B".to_string(),
            sheets_api_base: "https://sheets.googleapis.com/v4/spreadsheets".to_string(),
            cf_api_base: "https://codeforces.com/api".to_string(),
            refresh_interval: Duration::from_secs(300),
            lookup_concurrency: 10,
            lookup_timeout: Duration::from_secs(10),
            allowed_origins: "http://localhost:3000".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Config::default();

        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|s| s.parse::<u16>().ok())
                .unwrap_or(defaults.port),
            spreadsheet_id: std::env::var("SHEETS_SPREADSHEET_ID")
                .ok()
                .filter(|s| !s.is_empty()),
            sheets_api_key: std::env::var("SHEETS_API_KEY")
                .ok()
                .filter(|s| !s.is_empty()),
            sheets_range: std::env::var("SHEETS_RANGE").unwrap_or(defaults.sheets_range),
            sheets_api_base: std::env::var("SHEETS_API_BASE").unwrap_or(defaults.sheets_api_base),
            cf_api_base: std::env::var("CF_API_BASE").unwrap_or(defaults.cf_api_base),
            refresh_interval: std::env::var("REFRESH_INTERVAL_SECS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.refresh_interval),
            lookup_concurrency: std::env::var("LOOKUP_CONCURRENCY")
                .ok()
                .and_then(|s| s.parse::<usize>().ok())
                .unwrap_or(defaults.lookup_concurrency)
                .max(1),
            lookup_timeout: std::env::var("LOOKUP_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.lookup_timeout),
            allowed_origins: std::env::var("ALLOWED_ORIGINS").unwrap_or(defaults.allowed_origins),
        }
    }
}
