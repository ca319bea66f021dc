use std::env;
use std::sync::OnceLock;
use tracing::warn;

const DEV_SECRET_KEY: &str = "dungeon-dev-secret-change-me";

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub host: String,
    pub port: u16,
    pub db_url: String,
    pub jwt: JwtConfig,
    pub cors_origins: Vec<String>,
    pub question_bank_path: Option<String>,
}

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub expire_minutes: i64,
}

impl EnvConfig {
    fn get_env_or(key: &str, default: &str) -> String {
        env::var(key).unwrap_or_else(|_| default.to_string())
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let secret = env::var("SECRET_KEY").unwrap_or_else(|_| {
            warn!("SECRET_KEY not set, falling back to the development key");
            DEV_SECRET_KEY.to_string()
        });

        let cors_origins = Self::get_env_or("CORS_ALLOWED_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let question_bank_path = Some(Self::get_env_or("QUESTION_BANK_PATH", "data/questions.json"))
            .filter(|p| !p.trim().is_empty());

        EnvConfig {
            host: Self::get_env_or("HOST", "0.0.0.0"),
            port: Self::get_env_or("PORT", "8080").parse().unwrap_or(8080),
            db_url: Self::get_env_or("DATABASE_URL", "sqlite://dungeon.db?mode=rwc"),
            jwt: JwtConfig {
                secret,
                expire_minutes: Self::get_env_or("ACCESS_TOKEN_EXPIRE_MINUTES", "1440")
                    .parse()
                    .unwrap_or(1440),
            },
            cors_origins,
            question_bank_path,
        }
    }
}

pub static CONFIG: OnceLock<EnvConfig> = OnceLock::new();

/// Process-wide config, read from the environment on first use unless
/// `CONFIG` was set beforehand.
pub fn config() -> &'static EnvConfig {
    CONFIG.get_or_init(EnvConfig::from_env)
}
