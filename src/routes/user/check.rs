use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::AuthCheckRes;
use crate::utils::webutils::CurrentUser;
use actix_web::{get, web};

#[get("")]
async fn check(
    _req: actix_web::HttpRequest,
    user: web::ReqData<CurrentUser>,
) -> ApiResult<AuthCheckRes> {
    let CurrentUser(user) = user.into_inner();
    Ok(ApiResponse::Ok(AuthCheckRes {
        authenticated: true,
        user_id: user.id,
        username: user.username,
    }))
}
