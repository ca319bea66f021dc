use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::leaderboard::{rooms_completed, LeaderboardEntry};
use entity::game_progress::{Column, Entity as GameProgress};
use entity::user::Entity as User;
use sea_orm::{EntityTrait, QueryOrder, QuerySelect};

impl DatabaseService {
    /// Best `limit` runs by score. Equal scores keep signup order.
    pub async fn top_players(&self, limit: u64) -> Result<Vec<LeaderboardEntry>, AppError> {
        let rows = GameProgress::find()
            .find_also_related(User)
            .order_by_desc(Column::Score)
            .order_by_asc(Column::UserId)
            .limit(limit)
            .all(&self.database_connection)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(progress, user)| user.map(|u| (progress, u)))
            .enumerate()
            .map(|(i, (progress, user))| LeaderboardEntry {
                rank: i + 1,
                username: user.username,
                score: progress.score,
                rooms_completed: rooms_completed(progress.current_room, progress.game_completed),
                game_completed: progress.game_completed,
            })
            .collect())
    }
}
