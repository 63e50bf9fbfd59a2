mod api;
mod config;
mod database;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::io;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::database::BookmarkStore;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        log::error!("❌ Invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    log::info!("🚀 Starting Recipe Bookmarks Service...");

    // Initialize MongoDB connection
    let db = database::MongoDB::new(&config.database_url)
        .await
        .map_err(|e| {
            log::error!("❌ Failed to connect to MongoDB: {}", e);
            io::Error::new(io::ErrorKind::Other, e)
        })?;

    log::info!("✅ MongoDB connected successfully");

    let store: Arc<dyn BookmarkStore> = Arc::new(db);
    let store_data = web::Data::from(store);

    log::info!("🌐 Server starting on {}:{}", config.host, config.port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", config.host, config.port);
    log::info!("📄 OpenAPI spec at: http://{}:{}/api-docs/openapi.json", config.host, config.port);

    let cors_origins = config.cors_origins.clone();

    // Start HTTP server
    HttpServer::new(move || {
        let cors = cors_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(store_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi)
            )
            // Health check
            .route("/health", web::get().to(api::health::health_check))
            // Metrics
            .route("/metrics", web::get().to(api::metrics::get_metrics))
            // Bookmarks: token-authenticated CRUD
            .service(web::scope("/bookmarks").configure(api::bookmarks::configure))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
