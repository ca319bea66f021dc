use actix_web::{delete, get, post, put, web};
use std::sync::Arc;

use crate::db::database_service::DatabaseService;
use crate::types::progress::{ProgressRes, RProgressCreate, RProgressUpdate};
use crate::types::response::{ApiResponse, ApiResult, MessageRes};
use crate::utils::webutils::CurrentUser;

#[get("")]
async fn get_progress(
    db: web::Data<Arc<DatabaseService>>,
    user: web::ReqData<CurrentUser>,
) -> ApiResult<ProgressRes> {
    let progress = db.get_or_create_progress(user.0.id).await?;
    Ok(ApiResponse::Ok(progress.into()))
}

#[post("")]
async fn create_progress(
    db: web::Data<Arc<DatabaseService>>,
    user: web::ReqData<CurrentUser>,
    body: web::Json<RProgressCreate>,
) -> ApiResult<ProgressRes> {
    let progress = db.start_new_progress(user.0.id, body.into_inner()).await?;
    Ok(ApiResponse::Ok(progress.into()))
}

#[put("")]
async fn update_progress(
    db: web::Data<Arc<DatabaseService>>,
    user: web::ReqData<CurrentUser>,
    body: web::Json<RProgressUpdate>,
) -> ApiResult<ProgressRes> {
    let progress = db.update_progress(user.0.id, body.into_inner()).await?;
    Ok(ApiResponse::Ok(progress.into()))
}

#[delete("")]
async fn delete_progress(
    db: web::Data<Arc<DatabaseService>>,
    user: web::ReqData<CurrentUser>,
) -> ApiResult<MessageRes> {
    db.delete_progress(user.0.id).await?;
    Ok(ApiResponse::Ok(MessageRes {
        message: "Progress reset successfully".into(),
    }))
}
