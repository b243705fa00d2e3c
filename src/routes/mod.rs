use crate::types::error::AppError;
use crate::utils::webutils::validate_token;
use actix_web::web;
use actix_web_httpauth::middleware::HttpAuthentication;

pub mod auth;
pub mod health;
pub mod registration;
pub mod workshop;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let user_auth = HttpAuthentication::with_fn(validate_token);

    // Malformed bodies and query strings get the same JSON error shape as everything else.
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    );
    cfg.app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    );
    // An id that does not parse names nothing that exists.
    cfg.app_data(
        web::PathConfig::default()
            .error_handler(|_err, _req| AppError::NotFound("Request not found".into()).into()),
    );

    cfg.service(
        web::scope("/health").service(health::health)
    );
    cfg.service(
        web::scope("/api/auth")
            .service(auth::register::register)
            .service(auth::login::login)
            .service(auth::check_admin::check_admin)
    );
    cfg.service(
        web::scope("/api/registration-requests")
            .service(registration::submit::submit_request)
            .service(registration::pending::pending_requests)
            .service(registration::approve::approve)
            .service(registration::reject::reject)
            .service(registration::status::status)
    );
    cfg.service(
        web::scope("/api/workshop-requests")
            .service(workshop::submit::submit)
            .service(workshop::list::requests)
            .service(workshop::decide::approve)
            .service(workshop::decide::reject)
            .service(workshop::stats::stats)
            .wrap(user_auth)
    );
}
