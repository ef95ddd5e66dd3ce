use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Service banner
#[derive(Debug, Serialize, Deserialize)]
pub struct BannerResponse {
    pub message: String,
    pub version: String,
}

/// Liveness response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Storage backend; the shop runs on the in-memory store
    pub store: String,
    pub version: String,
    pub timestamp: String,
}

/// GET /
pub async fn banner() -> impl Responder {
    HttpResponse::Ok().json(BannerResponse {
        message: "Retail Boss API".to_string(),
        version: VERSION.to_string(),
    })
}

/// GET /health - Liveness probe
/// Returns 200 whenever the process can answer requests
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        store: "in_memory".to_string(),
        version: VERSION.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Configure banner and health routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(banner))
        .route("/health", web::get().to(health_check));
}
