use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::dashboard::services::DashboardService;

/// GET /dashboard
pub async fn get_dashboard(
    service: web::Data<Arc<DashboardService>>,
) -> Result<HttpResponse, AppError> {
    let dashboard = service.get_dashboard().await?;
    Ok(HttpResponse::Ok().json(dashboard))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/dashboard", web::get().to(get_dashboard));
}
