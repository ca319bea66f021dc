use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserProfileRes;
use crate::utils::webutils::CurrentUser;
use actix_web::{get, web};

#[get("")]
async fn profile(
    _req: actix_web::HttpRequest,
    user: web::ReqData<CurrentUser>,
) -> ApiResult<UserProfileRes> {
    Ok(ApiResponse::Ok(user.into_inner().0.into()))
}
