use actix_web::{middleware::Logger, web, App, HttpServer};
use dungeon_api::config::config;
use dungeon_api::db::database_service::DatabaseService;
use dungeon_api::routes::configure_routes;
use dungeon_api::utils::{question_bank::load_question_bank, webutils::build_cors};
use std::sync::Arc;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    let config = config();
    let addr = format!("{}:{}", config.host, config.port);

    let database_service = Arc::new(
        DatabaseService::new(&config.db_url)
            .await
            .expect("Failed to initialize DatabaseService")
    );

    if let Some(path) = &config.question_bank_path {
        match load_question_bank(path) {
            Ok(bank) => match database_service.seed_questions(bank).await {
                Ok(0) => info!("Question table already populated, skipping seed."),
                Ok(n) => info!("Seeded {} questions from {}", n, path),
                Err(e) => error!("Seeding questions failed: {}", e),
            },
            Err(e) => error!("Could not load question bank {}: {}", path, e),
        }
    }

    info!("Starting server on {}", addr);

    let cors_origins = config.cors_origins.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(build_cors(&cors_origins))
            .wrap(Logger::default())
            .app_data(web::Data::new(Arc::clone(&database_service)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
