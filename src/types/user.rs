use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use validator::Validate;

use crate::types::token::TOKEN_TYPE;

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct RUserRegister {
    #[validate(length(min = 1, max = 50, message = "Username must be 1-50 characters"))]
    pub username: String,
    #[validate(email(message = "Invalid email format"), length(max = 100))]
    pub email: String,
    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct RUserLogin {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct DBUserCreate {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct TokenRes {
    pub access_token: String,
    pub token_type: String,
}

impl TokenRes {
    pub fn bearer(access_token: String) -> Self {
        Self { access_token, token_type: TOKEN_TYPE.to_string() }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UserProfileRes {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<entity::user::Model> for UserProfileRes {
    fn from(u: entity::user::Model) -> Self {
        Self { id: u.id, username: u.username, email: u.email, created_at: u.created_at }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct AuthCheckRes {
    pub authenticated: bool,
    pub user_id: i32,
    pub username: String,
}
