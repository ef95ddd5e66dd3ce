use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::notifications::models::MarkReadRequest;
use crate::modules::notifications::services::NotificationService;

/// GET /notifications
pub async fn list_notifications(
    service: web::Data<Arc<NotificationService>>,
) -> Result<HttpResponse, AppError> {
    let notifications = service.list().await?;
    Ok(HttpResponse::Ok().json(notifications))
}

/// POST /notifications/{id}/read
pub async fn mark_read(
    service: web::Data<Arc<NotificationService>>,
    path: web::Path<u32>,
) -> Result<HttpResponse, AppError> {
    let response = service.mark_read(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// PUT /notifications with `{ "id": … }`
pub async fn mark_read_legacy(
    service: web::Data<Arc<NotificationService>>,
    request: web::Json<MarkReadRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.mark_read(request.id).await?;
    Ok(HttpResponse::Ok().json(response))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/notifications")
            .route("", web::get().to(list_notifications))
            .route("", web::put().to(mark_read_legacy))
            .route("/{id}/read", web::post().to(mark_read)),
    );
}
