use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::database::BookmarkStore;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: i64,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service status; `degraded` when the database does not answer a ping", body = HealthResponse)
    )
)]
pub async fn health_check(store: web::Data<dyn BookmarkStore>) -> impl Responder {
    let status = match store.ping().await {
        Ok(()) => "healthy",
        Err(e) => {
            log::warn!("⚠️ Health check: database ping failed: {}", e);
            "degraded"
        }
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().timestamp(),
    })
}
