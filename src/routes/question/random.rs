use crate::db::database_service::DatabaseService;
use crate::db::question::QuestionFilter;
use crate::types::question::{parse_exclude_ids, QuestionRes, RRandomQuestion};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::OptionalUser;
use actix_web::{get, web};
use std::sync::Arc;

#[get("/random")]
async fn random(
    db: web::Data<Arc<DatabaseService>>,
    viewer: OptionalUser,
    query: web::Query<RRandomQuestion>,
) -> ApiResult<QuestionRes> {
    let query = query.into_inner();
    let filter = QuestionFilter {
        difficulty: query.difficulty,
        user_id: viewer.id(),
        exclude_ids: query.exclude_ids.as_deref().map(parse_exclude_ids).unwrap_or_default(),
    };

    let question = db.random_question(&filter).await?;
    Ok(ApiResponse::Ok(question.into()))
}
