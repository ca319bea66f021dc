use serde::{Deserialize, Serialize};

pub const LEADERBOARD_SIZE: u64 = 10;
pub const TOTAL_ROOMS: i32 = 10;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub username: String,
    pub score: i32,
    pub rooms_completed: i32,
    pub game_completed: bool,
}

/// Rooms cleared so far. The room you stand in is not cleared yet.
pub fn rooms_completed(current_room: i32, game_completed: bool) -> i32 {
    if game_completed {
        TOTAL_ROOMS
    } else {
        current_room.saturating_sub(1).clamp(0, TOTAL_ROOMS)
    }
}
