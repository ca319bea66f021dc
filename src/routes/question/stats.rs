use crate::db::database_service::DatabaseService;
use crate::types::question::QuestionStatsRes;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::OptionalUser;
use actix_web::{get, web};
use std::sync::Arc;

#[get("/stats")]
async fn stats(
    db: web::Data<Arc<DatabaseService>>,
    viewer: OptionalUser,
) -> ApiResult<QuestionStatsRes> {
    Ok(ApiResponse::Ok(db.question_stats(viewer.id()).await?))
}
