pub mod profile;
pub mod snapshot;
pub mod tier;

pub use profile::ProfileRecord;
pub use snapshot::LeaderboardSnapshot;
pub use tier::{FilterBand, Tier};
