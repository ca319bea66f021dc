pub mod database_service;
pub mod leaderboard;
pub mod progress;
pub mod question;
pub mod user;
