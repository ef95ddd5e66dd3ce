// Billing over HTTP: a remote till talks to a real server through HttpSalesClient
//
// The server runs on a random local port (actix-test) with the same middleware
// stack as production; the client side is the billing session a terminal embeds.

use std::sync::Arc;
use std::time::Duration;

use retail_boss::billing::{BillingError, BillingSession, HttpSalesClient, SalesGateway};
use retail_boss::core::AppError;
use retail_boss::sales::{CreateSaleRequest, PaymentMode, SaleItemRequest};
use rust_decimal_macros::dec;

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;

fn remote_session(client: HttpSalesClient) -> BillingSession {
    BillingSession::new(Arc::new(client), test_services().calculator())
}

#[actix_web::test]
async fn test_fetch_products_over_http() {
    let srv = spawn_test_server(test_services());
    let client = HttpSalesClient::new(format!("{}/", base_url(&srv))).unwrap();
    assert_eq!(client.base_url(), base_url(&srv));

    let products = client.fetch_products().await.unwrap();
    assert_eq!(products.len(), 6);
    let tea = products.iter().find(|p| p.id == TATA_TEA).unwrap();
    assert_eq!(tea.selling_price, dec!(250));
    assert_eq!(tea.qty_on_hand, Some(32));
}

#[actix_web::test]
async fn test_remote_checkout() {
    let services = test_services();
    let srv = spawn_test_server(services.clone());
    let session = remote_session(HttpSalesClient::new(base_url(&srv)).unwrap());

    assert_eq!(session.load_catalog().await.unwrap(), 6);
    session.add_by_id(MAGGI, 1).await.unwrap();
    session.add_by_id(TATA_TEA, 1).await.unwrap();

    let invoice = session.checkout(PaymentMode::Card).await.unwrap();
    assert_eq!(invoice.subtotal, dec!(262));
    assert_eq!(invoice.tax, dec!(13));
    assert_eq!(invoice.total, dec!(275));
    assert_eq!(invoice.payment_mode, PaymentMode::Card);
    assert!(session.cart().await.is_empty());

    // The server's own state moved
    let maggi = services.products.get_product(MAGGI).await.unwrap();
    assert_eq!(maggi.qty_on_hand, Some(44));
    let stored = services.sales.get_sale(&invoice.id).await.unwrap();
    assert_eq!(stored.invoice_number, invoice.invoice_number);
}

#[actix_web::test]
async fn test_server_error_message_reaches_the_till() {
    let services = test_services();
    let srv = spawn_test_server(services.clone());
    let client = HttpSalesClient::new(base_url(&srv)).unwrap();

    let err = client
        .submit_sale(&CreateSaleRequest {
            items: vec![SaleItemRequest {
                product_id: AMUL_BUTTER.to_string(),
                quantity: 5,
            }],
            payment_mode: PaymentMode::Cash,
        })
        .await
        .unwrap_err();

    match err {
        AppError::Gateway(message) => assert_eq!(
            message,
            "Insufficient stock for Amul Butter 500g. Available: 3, Requested: 5"
        ),
        other => panic!("expected gateway error, got {:?}", other),
    }

    let err = client
        .submit_sale(&CreateSaleRequest {
            items: vec![SaleItemRequest {
                product_id: "NOPE".to_string(),
                quantity: 1,
            }],
            payment_mode: PaymentMode::Cash,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Gateway(ref m) if m.contains("Product NOPE not found")));
}

#[actix_web::test]
async fn test_remote_failure_keeps_cart() {
    let services = test_services();
    let srv = spawn_test_server(services.clone());
    let session = remote_session(HttpSalesClient::new(base_url(&srv)).unwrap());
    session.load_catalog().await.unwrap();
    session.add_by_id(AMUL_BUTTER, 3).await.unwrap();

    // Stock runs out on the server after the till loaded its catalog
    services
        .sales
        .create_sale(CreateSaleRequest {
            items: vec![SaleItemRequest {
                product_id: AMUL_BUTTER.to_string(),
                quantity: 3,
            }],
            payment_mode: PaymentMode::Cash,
        })
        .await
        .unwrap();

    let err = session.checkout(PaymentMode::Cash).await.unwrap_err();
    assert!(matches!(err, BillingError::Submission(AppError::Gateway(_))));
    assert_eq!(session.cart().await.len(), 1);
    assert_eq!(services.sales.list_sales(10).await.unwrap().len(), 1);
}

#[actix_web::test]
async fn test_unreachable_server() {
    // Nothing listens on port 9 (discard) in the test environment
    let client =
        HttpSalesClient::with_timeout("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
    let session = remote_session(client);

    let err = session.load_catalog().await.unwrap_err();
    assert!(matches!(err, BillingError::Submission(AppError::Gateway(_))));
    assert!(err.to_string().contains("Sales API unreachable"));
}
