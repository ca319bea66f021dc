use actix_web::get;
use serde::{Deserialize, Serialize};

use crate::types::response::{ApiResponse, ApiResult};

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub status: String,
}

#[derive(Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub docs: String,
}

#[get("/health")]
async fn health(
    _req: actix_web::HttpRequest
) -> ApiResult<Response> {
    Ok(ApiResponse::Ok(Response { status: "healthy".into() }))
}

#[get("/")]
async fn root(
    _req: actix_web::HttpRequest
) -> ApiResult<RootResponse> {
    Ok(ApiResponse::Ok(RootResponse {
        message: "Welcome to Data Science Dungeon API".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        docs: "/docs".into(),
    }))
}
