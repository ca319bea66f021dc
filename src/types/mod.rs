pub mod error;
pub mod leaderboard;
pub mod progress;
pub mod question;
pub mod response;
pub mod token;
pub mod user;
