use actix_web::{get, web};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::leaderboard::{LeaderboardEntry, LEADERBOARD_SIZE};
use crate::types::response::{ApiResponse, ApiResult};

#[get("")]
async fn leaderboard(
    db: web::Data<Arc<DatabaseService>>,
) -> ApiResult<Vec<LeaderboardEntry>> {
    Ok(ApiResponse::Ok(db.top_players(LEADERBOARD_SIZE).await?))
}
