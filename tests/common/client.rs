use actix_web::{web, App};
use std::sync::Arc;
use dungeon_api::{
    config::config,
    db::database_service::DatabaseService,
    types::{error::AppError, user::DBUserCreate},
    utils::token::{create_access_token, hash_password},
};

pub struct TestClient {
    pub db: Arc<DatabaseService>,
}

impl TestClient {
    pub fn new(db: Arc<DatabaseService>) -> Self {
        TestClient { db }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(dungeon_api::routes::configure_routes)
    }

    /// Registers straight through the database and hands back a signed token.
    #[allow(dead_code)]
    pub async fn create_test_user(&self, username: &str) -> Result<(i32, String), AppError> {
        let user = self.db.create_user(DBUserCreate {
            username: username.to_string(),
            email: format!("{}@test.com", username.to_lowercase()),
            password_hash: hash_password("password")?,
        }).await?;

        let access_token = create_access_token(user.id, &config().jwt)?;

        Ok((user.id, access_token))
    }
}
