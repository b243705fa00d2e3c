use actix_web::{middleware::Logger, web, App, HttpServer};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use workshop_server::config::EnvConfig;
use workshop_server::db::database_service::DatabaseService;
use workshop_server::routes::configure_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    if config.mail.api_key.is_none() {
        tracing::warn!("MAIL_API_KEY not set; notification emails are disabled");
    }

    let database_service = Arc::new(
        DatabaseService::new(&config.db_url)
            .await
            .map_err(|e| std::io::Error::other(format!("database init failed: {e}")))?
    );

    info!("Starting server on {}", addr);

    let config = web::Data::new(config);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(Arc::clone(&database_service)))
            .app_data(config.clone())
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
