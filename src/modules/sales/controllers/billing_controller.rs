// Legacy billing endpoints kept for older dashboard builds

use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::sales::models::{CreateSaleRequest, SaleResponse};
use crate::modules::sales::services::SalesService;

/// POST /api/billing
pub async fn create_bill(
    service: web::Data<Arc<SalesService>>,
    request: web::Json<CreateSaleRequest>,
) -> Result<HttpResponse, AppError> {
    let invoice = service.create_sale(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(SaleResponse {
        success: true,
        invoice,
    }))
}

/// GET /api/billing
pub async fn recent_bills(
    service: web::Data<Arc<SalesService>>,
) -> Result<HttpResponse, AppError> {
    let bills = service.recent_bills().await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "bills": bills })))
}
