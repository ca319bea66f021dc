use serde::{Deserialize, Serialize};

pub const TOKEN_TYPE: &str = "bearer";

/// JWT payload. `sub` is the user id as a decimal string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
    pub iat: usize,
}

impl Claims {
    pub fn user_id(&self) -> Option<i32> {
        self.sub.parse().ok()
    }
}
