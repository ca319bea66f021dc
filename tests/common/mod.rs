use std::sync::Arc;
use dungeon_api::config::{EnvConfig, JwtConfig, CONFIG};
use dungeon_api::db::database_service::DatabaseService;

pub mod client;

pub struct TestContext {
    pub db: Arc<DatabaseService>,
}

impl TestContext {
    /// Fresh in-memory database, empty question table.
    pub async fn new() -> TestContext {
        let _ = CONFIG.set(get_test_config());

        let db = Arc::new(
            DatabaseService::new("sqlite::memory:")
                .await
                .expect("Failed to initialize DatabaseService")
        );

        TestContext { db }
    }

    /// Fresh database seeded with `per_tier` questions of every difficulty.
    #[allow(dead_code)]
    pub async fn with_questions(per_tier: usize) -> TestContext {
        let ctx = TestContext::new().await;
        ctx.db
            .seed_questions(test_data::question_bank(per_tier))
            .await
            .expect("Failed to seed questions");
        ctx
    }
}

pub fn get_test_config() -> EnvConfig {
    EnvConfig {
        host: "127.0.0.1".to_string(),
        port: 8080,
        db_url: "sqlite::memory:".to_string(),
        jwt: JwtConfig {
            secret: "test-secret".to_string(),
            expire_minutes: 30,
        },
        cors_origins: vec!["*".to_string()],
        question_bank_path: None,
    }
}

#[allow(dead_code)]
pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use dungeon_api::types::question::{Difficulty, QuestionSeed, SeedOptions};
    use dungeon_api::types::user::RUserRegister;

    pub fn sample_user() -> RUserRegister {
        RUserRegister {
            username: "DungeonCrawler".to_string(),
            email: "crawler@example.com".to_string(),
            password: "hunter22".to_string(),
        }
    }

    pub fn sample_user_with(username: &str, email: &str) -> RUserRegister {
        RUserRegister {
            username: username.to_string(),
            email: email.to_string(),
            password: "hunter22".to_string(),
        }
    }

    /// Ids come out in tier order: easy gets 1..=per_tier, medium the next
    /// block and so on.
    pub fn question_bank(per_tier: usize) -> Vec<QuestionSeed> {
        Difficulty::ALL
            .into_iter()
            .flat_map(|tier| {
                (1..=per_tier).map(move |n| QuestionSeed {
                    topic: "Statistics".to_string(),
                    difficulty: tier.as_str().to_string(),
                    question: format!("{} question {}", tier, n),
                    options: SeedOptions {
                        a: "first".to_string(),
                        b: "second".to_string(),
                        c: "third".to_string(),
                        d: "fourth".to_string(),
                    },
                    answer: "B".to_string(),
                    explanation: Some(format!("because {}", n)),
                })
            })
            .collect()
    }

    /// Id of the `n`th (1-based) question of `tier` in [`question_bank`].
    pub fn question_id(tier: Difficulty, n: usize, per_tier: usize) -> i32 {
        let block = Difficulty::ALL.iter().position(|d| *d == tier).unwrap();
        (block * per_tier + n) as i32
    }
}
