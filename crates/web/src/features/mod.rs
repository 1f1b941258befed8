pub mod events;
pub mod leaderboard;
pub mod nominees;
pub mod odds;
pub mod picks;
pub mod settings;
