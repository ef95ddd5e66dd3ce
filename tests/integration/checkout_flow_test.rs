// End-to-end checkout through a billing session wired to in-process services
//
// Covers the till flow: load catalog, build a cart, check out, and the effects
// on stock, the ledger, sales history and the dashboard.

use retail_boss::billing::BillingError;
use retail_boss::modules::inventory::models::LedgerQuery;
use retail_boss::modules::inventory::LedgerReason;
use retail_boss::sales::PaymentMode;
use rust_decimal_macros::dec;

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;

#[tokio::test]
async fn test_checkout_end_to_end() {
    let services = test_services();
    let session = services.local_billing_session();

    assert_eq!(session.load_catalog().await.unwrap(), 6);
    session.add_by_id(MAGGI, 1).await.unwrap();
    let totals = session.add_by_id(TATA_TEA, 1).await.unwrap();
    assert_eq!(totals.subtotal, dec!(262));
    assert_eq!(totals.tax, dec!(13));
    assert_eq!(totals.total, dec!(275));

    let invoice = session.checkout(PaymentMode::Upi).await.unwrap();
    assert_eq!(invoice.total, dec!(275));
    assert_eq!(invoice.payment_mode, PaymentMode::Upi);
    assert!(invoice.invoice_number.ends_with("-001"));

    // Cart is cleared and the local catalog snapshot deducted
    assert!(session.cart().await.is_empty());
    let maggi = session.search("maggi").await;
    assert_eq!(maggi[0].qty_on_hand, Some(44));

    // Server-side stock
    let product = services.products.get_product(MAGGI).await.unwrap();
    assert_eq!(product.qty_on_hand, Some(44));
    let tea = services.products.get_product(TATA_TEA).await.unwrap();
    assert_eq!(tea.qty_on_hand, Some(31));

    // History
    let sales = services.sales.list_sales(10).await.unwrap();
    assert_eq!(sales.len(), 1);
    assert_eq!(sales[0].id, invoice.id);

    // Dashboard counts today's takings
    let dashboard = services.dashboard.get_dashboard().await.unwrap();
    assert_eq!(dashboard.sales.today, dec!(275));
}

#[tokio::test]
async fn test_checkout_writes_sale_ledger_entries() {
    let services = test_services();
    let session = services.local_billing_session();
    session.load_catalog().await.unwrap();

    session.add_by_id(BREAD, 2).await.unwrap();
    session.add_by_id(ATTA, 1).await.unwrap();
    let invoice = session.checkout(PaymentMode::Cash).await.unwrap();

    let entries = services
        .inventory
        .ledger(LedgerQuery {
            product_id: Some(BREAD.to_string()),
            limit: 10,
        })
        .await
        .unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].reason, LedgerReason::Sale);
    assert_eq!(entries[0].qty_delta, -2);
    assert_eq!(entries[0].reference_id.as_deref(), Some(invoice.id.as_str()));
    assert_eq!(
        entries[0].notes.as_deref(),
        Some(format!("Sale {}", invoice.invoice_number).as_str())
    );

    let all = services
        .inventory
        .ledger(LedgerQuery {
            product_id: None,
            limit: 10,
        })
        .await
        .unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn test_failed_checkout_keeps_cart() {
    let services = test_services();
    let session = services.local_billing_session();
    session.load_catalog().await.unwrap();
    session.add_by_id(AMUL_BUTTER, 3).await.unwrap();

    // Someone else sells the butter first
    services
        .sales
        .create_sale(retail_boss::sales::CreateSaleRequest {
            items: vec![retail_boss::sales::SaleItemRequest {
                product_id: AMUL_BUTTER.to_string(),
                quantity: 2,
            }],
            payment_mode: PaymentMode::Cash,
        })
        .await
        .unwrap();

    let err = session.checkout(PaymentMode::Cash).await.unwrap_err();
    assert!(matches!(err, BillingError::Submission(_)));
    assert!(err.to_string().contains("Insufficient stock for Amul Butter 500g"));

    // Cart still holds the line so the cashier can adjust and retry
    let cart = session.cart().await;
    assert_eq!(cart.line(AMUL_BUTTER).unwrap().quantity, 3);
    assert!(!session.is_submitting());

    session.update_quantity(AMUL_BUTTER, 1).await.unwrap();
    let invoice = session.checkout(PaymentMode::Cash).await.unwrap();
    assert_eq!(invoice.items[0].quantity, 1);

    let butter = services.products.get_product(AMUL_BUTTER).await.unwrap();
    assert_eq!(butter.qty_on_hand, Some(0));
}

#[tokio::test]
async fn test_empty_cart_and_unknown_product() {
    let services = test_services();
    let session = services.local_billing_session();
    session.load_catalog().await.unwrap();

    assert!(matches!(
        session.checkout(PaymentMode::Cash).await.unwrap_err(),
        BillingError::EmptyCart
    ));
    assert!(matches!(
        session.add_by_id("NOPE", 1).await.unwrap_err(),
        BillingError::UnknownProduct(_)
    ));
    assert!(services.sales.list_sales(10).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_cart_rejects_more_than_stock() {
    let services = test_services();
    let session = services.local_billing_session();
    session.load_catalog().await.unwrap();

    let err = session.add_by_id(AMUL_BUTTER, 5).await.unwrap_err();
    assert!(matches!(
        err,
        BillingError::InsufficientStock {
            available: 3,
            requested: 5,
            ..
        }
    ));
    assert!(session.cart().await.is_empty());
}

#[tokio::test]
async fn test_invoice_numbers_are_sequential() {
    let services = test_services();
    let session = services.local_billing_session();
    session.load_catalog().await.unwrap();

    let mut numbers = Vec::new();
    for _ in 0..3 {
        session.add_by_id(MAGGI, 1).await.unwrap();
        numbers.push(session.checkout(PaymentMode::Cash).await.unwrap().invoice_number);
    }

    let suffixes: Vec<&str> = numbers
        .iter()
        .map(|n| n.rsplit('-').next().unwrap())
        .collect();
    assert_eq!(suffixes, vec!["001", "002", "003"]);

    let prefix = |n: &String| n.rsplit_once('-').unwrap().0.to_string();
    assert!(numbers.iter().all(|n| prefix(n) == prefix(&numbers[0])));
}

#[tokio::test]
async fn test_concurrent_sale_of_last_units() {
    let services = test_services();
    let first = services.local_billing_session();
    let second = services.local_billing_session();
    first.load_catalog().await.unwrap();
    second.load_catalog().await.unwrap();

    // Both tills see 3 butter in stock and want all of it
    first.add_by_id(AMUL_BUTTER, 3).await.unwrap();
    second.add_by_id(AMUL_BUTTER, 3).await.unwrap();

    let (a, b) = tokio::join!(
        first.checkout(PaymentMode::Cash),
        second.checkout(PaymentMode::Card)
    );
    assert_eq!(
        [a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count(),
        1,
        "exactly one till should win"
    );

    let butter = services.products.get_product(AMUL_BUTTER).await.unwrap();
    assert_eq!(butter.qty_on_hand, Some(0));

    let sales = services.sales.list_sales(10).await.unwrap();
    assert_eq!(sales.len(), 1);
    assert!(sales[0].invoice_number.ends_with("-001"));
}
