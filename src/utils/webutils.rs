use actix_cors::Cors;
use actix_web::{
    dev::{Payload, ServiceRequest},
    http::header,
    web, FromRequest, HttpMessage, HttpRequest,
};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use futures::future::LocalBoxFuture;
use std::sync::Arc;

use crate::config::config;
use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::utils::token::user_id_from_token;

/// Authenticated caller, placed in request extensions by [`validate_token`].
#[derive(Clone, Debug)]
pub struct CurrentUser(pub entity::user::Model);

/// Caller if a usable bearer token came along, anonymous otherwise. Bad
/// tokens never fail the request.
#[derive(Clone, Debug)]
pub struct OptionalUser(pub Option<entity::user::Model>);

impl OptionalUser {
    pub fn id(&self) -> Option<i32> {
        self.0.as_ref().map(|u| u.id)
    }
}

/// Token -> live user row. A token for a deleted user is as good as none.
pub async fn resolve_user(db: &DatabaseService, token: &str) -> Result<entity::user::Model, AppError> {
    let user_id = user_id_from_token(token, &config().jwt)?;
    db.find_user_by_id(user_id)
        .await?
        .ok_or_else(AppError::unauthorized)
}

fn database(req: &HttpRequest) -> Option<Arc<DatabaseService>> {
    req.app_data::<web::Data<Arc<DatabaseService>>>()
        .map(|d| Arc::clone(d.get_ref()))
}

/// Bearer middleware callback. A missing header is rejected here too so the
/// client always gets the JSON error body.
pub async fn validate_token(req: ServiceRequest, credentials: Option<BearerAuth>) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let Some(credentials) = credentials else {
        return Err((AppError::Unauthorized("Not authenticated".into()).into(), req));
    };
    let Some(db) = database(req.request()) else {
        return Err((AppError::Internal("database not configured".into()).into(), req));
    };

    match resolve_user(&db, credentials.token()).await {
        Ok(user) => {
            req.extensions_mut().insert(CurrentUser(user));
            Ok(req)
        }
        Err(e) => Err((e.into(), req)),
    }
}

fn bearer_token(req: &HttpRequest) -> Option<String> {
    let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") || token.trim().is_empty() {
        return None;
    }
    Some(token.trim().to_string())
}

impl FromRequest for OptionalUser {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let token = bearer_token(req);
        let db = database(req);

        Box::pin(async move {
            let user = match (token, db) {
                (Some(token), Some(db)) => resolve_user(&db, &token).await.ok(),
                _ => None,
            };
            Ok(OptionalUser(user))
        })
    }
}

/// `*` (or nothing) opens CORS to every origin, otherwise only the listed ones.
/// Credentials are never allowed.
pub fn build_cors(origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600);

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return cors.allow_any_origin();
    }

    origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::Method, test, App, HttpResponse};
    use actix_web::test::TestRequest;

    async fn preflight(origins: &[&str], origin: &str) -> actix_web::dev::ServiceResponse<actix_web::body::EitherBody<actix_web::body::BoxBody>> {
        let origins: Vec<String> = origins.iter().map(|o| o.to_string()).collect();
        let app = test::init_service(
            App::new()
                .wrap(build_cors(&origins))
                .route("/health", web::get().to(HttpResponse::Ok)),
        )
        .await;

        let req = TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/health")
            .insert_header((header::ORIGIN, origin))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization, x-custom"))
            .to_request();
        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn wildcard_cors_allows_any_origin_without_credentials() {
        let res = preflight(&["*"], "https://anywhere.example").await;
        assert!(res.status().is_success());

        let headers = res.headers();
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "https://anywhere.example"
        );
        let methods = headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap().to_str().unwrap();
        assert!(methods.contains("DELETE"));
        let allowed = headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS).unwrap().to_str().unwrap();
        assert!(allowed.to_ascii_lowercase().contains("x-custom"));
        assert!(headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).is_none());
    }

    #[actix_web::test]
    async fn empty_origin_list_is_open() {
        let res = preflight(&[], "https://anywhere.example").await;
        assert!(res.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_some());
    }

    #[actix_web::test]
    async fn restricted_cors_only_allows_listed_origins() {
        let res = preflight(&["https://a.example"], "https://a.example").await;
        assert!(res.status().is_success());
        assert_eq!(
            res.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "https://a.example"
        );
        assert!(res.headers().get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).is_none());

        let res = preflight(&["https://a.example"], "https://b.example").await;
        assert!(res.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
        assert!(res.headers().get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).is_none());
    }

    #[::core::prelude::v1::test]
    fn bearer_token_parsing() {
        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Bearer abc.def"))
            .to_http_request();
        assert_eq!(bearer_token(&req).as_deref(), Some("abc.def"));

        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Basic dXNlcjpwYXNz"))
            .to_http_request();
        assert!(bearer_token(&req).is_none());

        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Bearer "))
            .to_http_request();
        assert!(bearer_token(&req).is_none());

        assert!(bearer_token(&TestRequest::default().to_http_request()).is_none());
    }
}
