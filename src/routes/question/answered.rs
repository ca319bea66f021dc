use crate::db::database_service::DatabaseService;
use crate::types::question::{AnsweredRes, RAnswerQuestion};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::CurrentUser;
use actix_web::{get, post, web};
use std::sync::Arc;

#[post("")]
async fn record_answered(
    db: web::Data<Arc<DatabaseService>>,
    user: web::ReqData<CurrentUser>,
    body: web::Json<RAnswerQuestion>,
) -> ApiResult<AnsweredRes> {
    let answered = db.record_answer(user.0.id, body.into_inner()).await?;
    Ok(ApiResponse::Ok(answered.into()))
}

#[get("")]
async fn list_answered(
    db: web::Data<Arc<DatabaseService>>,
    user: web::ReqData<CurrentUser>,
) -> ApiResult<Vec<AnsweredRes>> {
    let answered = db.list_answered(user.0.id).await?;
    Ok(ApiResponse::Ok(answered.into_iter().map(AnsweredRes::from).collect()))
}
