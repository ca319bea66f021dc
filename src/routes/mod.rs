use crate::types::error::AppError;
use crate::utils::webutils::validate_token;
use actix_web::web;

pub mod health;
pub mod leaderboard;
pub mod progress;
pub mod question;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let user_auth = actix_web_httpauth::middleware::HttpAuthentication::with_fn(validate_token);

    // malformed bodies and query strings come back as 422 like every other validation failure
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    );
    cfg.app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::Validation(err.to_string()).into()),
    );

    cfg.service(health::root);
    cfg.service(health::health);
    cfg.service(
        web::scope("/api/users")
            .service(user::register::register)
            .service(user::login::login)
            .service(
                web::scope("/profile")
                    .service(user::profile::profile)
                    .wrap(user_auth.clone())
            )
            .service(
                web::scope("/check")
                    .service(user::check::check)
                    .wrap(user_auth.clone())
            )
    );
    cfg.service(
        web::scope("/api/progress")
            .service(progress::get_progress)
            .service(progress::create_progress)
            .service(progress::update_progress)
            .service(progress::delete_progress)
            .wrap(user_auth.clone())
    );
    cfg.service(
        web::scope("/api/questions")
            .service(question::random::random)
            .service(question::room_chest::by_room_chest)
            .service(question::stats::stats)
            .service(
                web::scope("/answered")
                    .service(question::answered::record_answered)
                    .service(question::answered::list_answered)
                    .wrap(user_auth)
            )
    );
    cfg.service(
        web::scope("/api/leaderboard").service(leaderboard::leaderboard)
    );
}
