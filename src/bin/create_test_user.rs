//! Creates (or resets) a test account parked in the final room with every
//! chest opened, for walking through the victory flow by hand.
//!
//! Login: test@dungeon.com / test123

use dungeon_api::config::config;
use dungeon_api::db::database_service::DatabaseService;
use dungeon_api::types::progress::{ChestState, RProgressUpdate};
use dungeon_api::types::user::DBUserCreate;
use dungeon_api::utils::token::hash_password;

const TEST_EMAIL: &str = "test@dungeon.com";
const TEST_PASSWORD: &str = "test123";
const TEST_USERNAME: &str = "TestHero";

fn all_chests_opened() -> Vec<ChestState> {
    (1..=10)
        .flat_map(|room| (1..=3).map(move |chest| ChestState { room, chest }))
        .collect()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    let db = DatabaseService::new(&config().db_url).await?;

    let user = match db.find_user_by_email(TEST_EMAIL).await? {
        Some(existing) => {
            println!("Test user already exists: {TEST_EMAIL}");
            existing
        }
        None => {
            let created = db
                .create_user(DBUserCreate {
                    username: TEST_USERNAME.to_string(),
                    email: TEST_EMAIL.to_string(),
                    password_hash: hash_password(TEST_PASSWORD)?,
                })
                .await?;
            println!("Created test user:");
            println!("  Email: {TEST_EMAIL}");
            println!("  Password: {TEST_PASSWORD}");
            created
        }
    };

    db.update_progress(
        user.id,
        RProgressUpdate {
            current_room: Some(10),
            brightness_level: Some(80),
            total_correct: Some(28),
            total_incorrect: Some(2),
            score: Some(5000),
            game_completed: Some(false),
            chest_states: Some(serde_json::to_value(all_chests_opened())?),
        },
    )
    .await?;

    println!("  Room: 10 (ready to enter victory portal)");
    Ok(())
}
