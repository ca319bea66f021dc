use crate::config::config;
use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RUserLogin, TokenRes};
use crate::utils::token::{create_access_token, verify_password};
use actix_web::{post, web};
use std::sync::Arc;
use validator::Validate;

#[post("/login")]
async fn login(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DatabaseService>>,
    body: web::Json<RUserLogin>,
) -> ApiResult<TokenRes> {
    body.validate().map_err(|e| AppError::Validation(e.to_string()))?;

    // same answer for unknown email and wrong password
    let user = match db.find_user_by_email(&body.email).await? {
        Some(user) if verify_password(&body.password, &user.password_hash) => user,
        _ => return Err(AppError::Unauthorized("Incorrect email or password".into())),
    };

    let user = db.touch_last_login(user).await?;
    let token = create_access_token(user.id, &config().jwt)?;
    Ok(ApiResponse::Ok(TokenRes::bearer(token)))
}
