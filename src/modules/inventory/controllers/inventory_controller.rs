use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::inventory::models::{AdjustStockRequest, LedgerQuery, StockInRequest};
use crate::modules::inventory::services::InventoryService;

/// GET /inventory
pub async fn get_inventory(
    service: web::Data<Arc<InventoryService>>,
) -> Result<HttpResponse, AppError> {
    let overview = service.get_inventory().await?;
    Ok(HttpResponse::Ok().json(overview))
}

/// POST /inventory/stock-in
pub async fn stock_in(
    service: web::Data<Arc<InventoryService>>,
    request: web::Json<StockInRequest>,
) -> Result<HttpResponse, AppError> {
    let moved = service.stock_in(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(moved))
}

/// POST /inventory/adjust
pub async fn adjust_stock(
    service: web::Data<Arc<InventoryService>>,
    request: web::Json<AdjustStockRequest>,
) -> Result<HttpResponse, AppError> {
    let moved = service.adjust_stock(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(moved))
}

/// GET /inventory/ledger
pub async fn get_ledger(
    service: web::Data<Arc<InventoryService>>,
    query: web::Query<LedgerQuery>,
) -> Result<HttpResponse, AppError> {
    let entries = service.ledger(query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "entries": entries })))
}

/// Configure inventory routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/inventory")
            .route("", web::get().to(get_inventory))
            .route("/stock-in", web::post().to(stock_in))
            .route("/adjust", web::post().to(adjust_stock))
            .route("/ledger", web::get().to(get_ledger)),
    );
}
