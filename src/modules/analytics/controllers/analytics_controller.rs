use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::modules::analytics::services::AnalyticsService;

/// GET /analytics
pub async fn get_analytics(service: web::Data<Arc<AnalyticsService>>) -> HttpResponse {
    HttpResponse::Ok().json(service.get_analytics())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/analytics", web::get().to(get_analytics));
}
