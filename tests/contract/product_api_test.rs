// Contract tests for the product catalog API
//
// Endpoints:
// - GET    /products
// - POST   /products
// - GET    /products/{id}
// - PUT    /products/{id}
// - DELETE /products/{id}

use actix_web::http::StatusCode;
use actix_web::middleware::NormalizePath;
use actix_web::{test, App};
use serde_json::{json, Value};

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;

#[actix_web::test]
async fn test_list_products_shape() {
    let services = test_services();
    let app = test::init_service(
        App::new()
            .wrap(NormalizePath::trim())
            .configure(|cfg| services.configure(cfg)),
    )
    .await;

    let req = test::TestRequest::get().uri("/products").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let products = body["products"].as_array().expect("products array");
    assert_eq!(products.len(), 6);

    let maggi = products
        .iter()
        .find(|p| p["id"] == MAGGI)
        .expect("seeded product");
    assert_eq!(maggi["name"], "Maggi Noodles 2-Min");
    assert_eq!(maggi["selling_price"], 12.0);
    assert_eq!(maggi["qty_on_hand"], 45);
    assert!(maggi["sku"].is_string());
    assert!(maggi["unit"].is_string());

    // Sorted by name
    let names: Vec<&str> = products.iter().map(|p| p["name"].as_str().unwrap()).collect();
    let mut sorted = names.clone();
    sorted.sort_by_key(|n| n.to_lowercase());
    assert_eq!(names, sorted);
}

#[actix_web::test]
async fn test_trailing_slash_is_accepted() {
    let services = test_services();
    let app = test::init_service(
        App::new()
            .wrap(NormalizePath::trim())
            .configure(|cfg| services.configure(cfg)),
    )
    .await;

    let req = test::TestRequest::get().uri("/products/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_get_product() {
    let services = test_services();
    let app = test::init_service(App::new().configure(|cfg| services.configure(cfg))).await;

    let req = test::TestRequest::get()
        .uri(&format!("/products/{}", TATA_TEA))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["id"], TATA_TEA);
    assert_eq!(body["selling_price"], 250.0);
}

#[actix_web::test]
async fn test_unknown_product_uses_error_envelope() {
    let services = test_services();
    let app = test::init_service(App::new().configure(|cfg| services.configure(cfg))).await;

    let req = test::TestRequest::get().uri("/products/NOPE").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 404);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Product not found"));
}

#[actix_web::test]
async fn test_create_product() {
    let services = test_services();
    let app = test::init_service(App::new().configure(|cfg| services.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/products")
        .set_json(product_payload("FORT-OIL-1L"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    let product = &body["product"];
    assert_eq!(product["sku"], "FORT-OIL-1L");
    assert_eq!(product["qty_on_hand"], 0);
    assert!(product["barcode"].as_str().is_some_and(|b| !b.is_empty()));

    let id = product["id"].as_str().unwrap().to_string();
    let req = test::TestRequest::get()
        .uri(&format!("/products/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/products").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["products"].as_array().unwrap().len(), 7);
}

#[actix_web::test]
async fn test_create_product_duplicate_sku_conflicts() {
    let services = test_services();
    let app = test::init_service(App::new().configure(|cfg| services.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/products")
        .set_json(product_payload("MAG-2MIN-70G"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 409);
}

#[actix_web::test]
async fn test_create_product_validation() {
    let services = test_services();
    let app = test::init_service(App::new().configure(|cfg| services.configure(cfg))).await;

    // Missing required fields
    let req = test::TestRequest::post()
        .uri("/products")
        .set_json(json!({ "name": "No SKU" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 400);

    // Negative price
    let mut payload = product_payload("NEG-PRICE");
    payload["selling_price"] = json!(-5.0);
    let req = test::TestRequest::post()
        .uri("/products")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Above the price ceiling
    let mut payload = product_payload("HUGE-PRICE");
    payload["selling_price"] = json!(1e20);
    let req = test::TestRequest::post()
        .uri("/products")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Selling price cannot exceed"));
}

#[actix_web::test]
async fn test_update_product() {
    let services = test_services();
    let app = test::init_service(App::new().configure(|cfg| services.configure(cfg))).await;

    let req = test::TestRequest::put()
        .uri(&format!("/products/{}", PARLE_G))
        .set_json(json!({ "selling_price": 11.0, "min_level": 20 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["product"]["selling_price"], 11.0);
    assert_eq!(body["product"]["min_level"], 20);
    // Stock is untouched by catalog edits
    assert_eq!(body["product"]["qty_on_hand"], 8);

    let req = test::TestRequest::put()
        .uri("/products/NOPE")
        .set_json(json!({ "name": "Ghost" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_delete_product() {
    let services = test_services();
    let app = test::init_service(App::new().configure(|cfg| services.configure(cfg))).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/products/{}", BREAD))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);

    let req = test::TestRequest::get()
        .uri(&format!("/products/{}", BREAD))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete()
        .uri(&format!("/products/{}", BREAD))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
