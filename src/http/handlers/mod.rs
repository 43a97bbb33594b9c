pub mod leaderboard;
pub mod page;
pub mod refresh;
pub mod roster;

pub use leaderboard::get_leaderboard_handler;
pub use page::leaderboard_page_handler;
pub use refresh::trigger_refresh_handler;
pub use roster::{get_roster_handler, reload_roster_handler};
