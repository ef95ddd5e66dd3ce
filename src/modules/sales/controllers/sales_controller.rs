use std::sync::Arc;

use actix_web::{http::header::ContentType, web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::sales::controllers::billing_controller;
use crate::modules::sales::models::{
    CreateSaleRequest, ListSalesQuery, SaleResponse, SalesListResponse,
};
use crate::modules::sales::services::SalesService;

/// Checkout
/// POST /sales
pub async fn create_sale(
    service: web::Data<Arc<SalesService>>,
    request: web::Json<CreateSaleRequest>,
) -> Result<HttpResponse, AppError> {
    let invoice = service.create_sale(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(SaleResponse {
        success: true,
        invoice,
    }))
}

/// GET /sales?limit=
pub async fn list_sales(
    service: web::Data<Arc<SalesService>>,
    query: web::Query<ListSalesQuery>,
) -> Result<HttpResponse, AppError> {
    let sales = service.list_sales(query.limit).await?;
    Ok(HttpResponse::Ok().json(SalesListResponse { sales }))
}

/// GET /sales/{id}
pub async fn get_sale(
    service: web::Data<Arc<SalesService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let invoice = service.get_sale(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(invoice))
}

/// GET /sales/{id}/print
pub async fn print_sale(
    service: web::Data<Arc<SalesService>>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let text = service.print_sale(&path.into_inner()).await?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(text))
}

/// Configure sales routes, including the legacy `/api/billing` alias
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/sales")
            .route("", web::post().to(create_sale))
            .route("", web::get().to(list_sales))
            .route("/{id}", web::get().to(get_sale))
            .route("/{id}/print", web::get().to(print_sale)),
    )
    .service(
        web::resource("/api/billing")
            .route(web::post().to(billing_controller::create_bill))
            .route(web::get().to(billing_controller::recent_bills)),
    );
}
