use crate::db::database_service::DatabaseService;
use crate::db::question::QuestionFilter;
use crate::types::error::AppError;
use crate::types::question::{Difficulty, QuestionRes, RRoomChestQuestion};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::OptionalUser;
use actix_web::{get, web};
use std::sync::Arc;
use validator::Validate;

#[get("/by-room-chest")]
async fn by_room_chest(
    db: web::Data<Arc<DatabaseService>>,
    viewer: OptionalUser,
    query: web::Query<RRoomChestQuestion>,
) -> ApiResult<QuestionRes> {
    query.validate().map_err(|e| AppError::Validation(e.to_string()))?;

    let filter = QuestionFilter {
        difficulty: Difficulty::for_room_chest(query.room, query.chest).to_string(),
        user_id: viewer.id(),
        exclude_ids: Vec::new(),
    };

    let question = db.random_question(&filter).await?;
    Ok(ApiResponse::Ok(question.into()))
}
