use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::voice::models::VoiceCommand;
use crate::modules::voice::services::VoiceService;

/// POST /voice
pub async fn process_command(
    service: web::Data<Arc<VoiceService>>,
    request: web::Json<VoiceCommand>,
) -> Result<HttpResponse, AppError> {
    let response = service.process(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/voice", web::post().to(process_command));
}
