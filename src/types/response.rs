use serde::Serialize;
use crate::types::error::AppError;
use actix_web::{HttpResponse, Responder};

pub enum ApiResponse<T> {
    Ok(T),
}

impl<T: Serialize> Responder for ApiResponse<T> {
    type Body = actix_web::body::BoxBody;
    fn respond_to(self, _: &actix_web::HttpRequest) -> HttpResponse {
        match self {
            ApiResponse::Ok(v) => HttpResponse::Ok().json(v),
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

/// Plain `{"message": ...}` body.
#[derive(Serialize, Debug)]
pub struct MessageRes {
    pub message: String,
}
