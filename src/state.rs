use std::{
    sync::{Arc, atomic::AtomicBool},
    time::Duration,
};

use tokio::sync::RwLock;

use crate::{config::Config, models::snapshot::LeaderboardSnapshot};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: reqwest::Client,
    pub roster: SharedRoster,
    pub snapshot: SharedSnapshot,
    pub refreshing: Arc<AtomicBool>,
    pub directory_warning: SharedNotice,
    pub last_error: SharedNotice,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.lookup_timeout.max(Duration::from_secs(1)))
            .build()
            .expect("Failed to build http client");

        Self {
            config: Arc::new(config),
            http,
            roster: Default::default(),
            snapshot: Default::default(),
            refreshing: Default::default(),
            directory_warning: Default::default(),
            last_error: Default::default(),
        }
    }
}

pub type SharedRoster = Arc<RwLock<Vec<String>>>;

// Replaced wholesale by the aggregator after each pass; readers only ever
// see a fully formed snapshot.
pub type SharedSnapshot = Arc<RwLock<LeaderboardSnapshot>>;

pub type SharedNotice = Arc<RwLock<Option<String>>>;
