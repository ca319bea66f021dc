use crate::config::config;
use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RUserRegister, TokenRes};
use crate::utils::token::{create_access_token, hash_password};
use actix_web::{post, web};
use std::sync::Arc;
use validator::Validate;

#[post("/register")]
async fn register(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    body: web::Json<RUserRegister>,
) -> ApiResult<TokenRes> {
    body.validate().map_err(|e| AppError::Validation(e.to_string()))?;
    let body = body.into_inner();

    let user = db
        .create_user(DBUserCreate {
            username: body.username,
            email: body.email,
            password_hash: hash_password(&body.password)?,
        })
        .await?;

    let token = create_access_token(user.id, &config().jwt)?;
    Ok(ApiResponse::Ok(TokenRes::bearer(token)))
}
