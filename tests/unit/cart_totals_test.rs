// Property-based tests for cart totals
//
// For any sequence of add / update / remove / clear operations:
// - subtotal == sum(quantity × unit price)
// - tax == round_half_up(subtotal × 5%), total == subtotal + tax
// - every line has quantity >= 1 and product ids are unique
// - a rejected operation leaves the cart exactly as it was

use proptest::prelude::*;
use retail_boss::billing::{BillingError, Cart};
use retail_boss::products::Product;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

fn catalog() -> Vec<Product> {
    let product = |id: &str, price: Decimal, stock: Option<u32>| Product {
        id: id.to_string(),
        name: format!("Product {}", id),
        sku: format!("SKU-{}", id),
        barcode: None,
        unit: "pcs".to_string(),
        category: None,
        mrp: None,
        selling_price: price,
        tax_rate: None,
        qty_on_hand: stock,
        min_level: 0,
    };

    vec![
        product("P1", dec!(12), Some(45)),
        product("P2", dec!(250), Some(3)),
        product("P3", dec!(9.50), None),
        product("P4", dec!(55), Some(10)),
    ]
}

#[derive(Debug, Clone)]
enum Op {
    Add(usize, u32),
    Update(usize, i64),
    Remove(usize),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0usize..4, 0u32..6).prop_map(|(i, q)| Op::Add(i, q)),
        3 => (0usize..4, -2i64..12).prop_map(|(i, q)| Op::Update(i, q)),
        2 => (0usize..4).prop_map(Op::Remove),
        1 => Just(Op::Clear),
    ]
}

fn apply(cart: &mut Cart, products: &[Product], op: &Op) -> Result<(), BillingError> {
    match *op {
        Op::Add(i, q) => cart.add(&products[i], q),
        Op::Update(i, q) => cart.update_quantity(&products[i].id, q),
        Op::Remove(i) => {
            cart.remove(&products[i].id);
            Ok(())
        }
        Op::Clear => {
            cart.clear();
            Ok(())
        }
    }
}

fn lines_snapshot(cart: &Cart) -> Vec<(String, u32)> {
    cart.lines()
        .iter()
        .map(|l| (l.product_id.clone(), l.quantity))
        .collect()
}

proptest! {
    #[test]
    fn test_totals_hold_after_every_mutation(ops in prop::collection::vec(op(), 0..40)) {
        let products = catalog();
        let mut cart = Cart::default();

        for op in ops {
            let before = lines_snapshot(&cart);
            let result = apply(&mut cart, &products, &op);

            if result.is_err() {
                prop_assert_eq!(&before, &lines_snapshot(&cart), "rejected op must not change the cart");
            }

            let expected_subtotal: Decimal = cart
                .lines()
                .iter()
                .map(|l| l.unit_price * Decimal::from(l.quantity))
                .sum();
            let expected_tax = (expected_subtotal * dec!(0.05))
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
            let totals = cart.totals();

            prop_assert_eq!(totals.subtotal, expected_subtotal);
            prop_assert_eq!(totals.tax, expected_tax);
            prop_assert_eq!(totals.total, totals.subtotal + totals.tax);

            let mut ids: Vec<&str> = cart.lines().iter().map(|l| l.product_id.as_str()).collect();
            prop_assert!(cart.lines().iter().all(|l| l.quantity >= 1));
            let count = ids.len();
            ids.sort();
            ids.dedup();
            prop_assert_eq!(ids.len(), count, "one line per product");
        }
    }

    #[test]
    fn test_tracked_stock_is_never_exceeded(ops in prop::collection::vec(op(), 0..40)) {
        let products = catalog();
        let mut cart = Cart::default();

        for op in ops {
            let _ = apply(&mut cart, &products, &op);

            for line in cart.lines() {
                if let Some(stock) = line.stock {
                    prop_assert!(line.quantity <= stock);
                }
            }
        }
    }

    #[test]
    fn test_repeated_adds_merge(times in 1u32..20) {
        let products = catalog();
        let mut cart = Cart::default();
        for _ in 0..times {
            cart.add(&products[0], 1).unwrap();
        }

        prop_assert_eq!(cart.len(), 1);
        prop_assert_eq!(cart.lines()[0].quantity, times);
    }
}

#[test]
fn test_worked_example() {
    let products = catalog();
    let mut cart = Cart::default();
    cart.add(&products[0], 1).unwrap();
    cart.add(&products[1], 1).unwrap();

    let totals = cart.totals();
    assert_eq!(totals.subtotal, dec!(262));
    assert_eq!(totals.tax, dec!(13));
    assert_eq!(totals.total, dec!(275));
}

#[test]
fn test_quantity_above_stock_is_rejected() {
    let products = catalog();
    let mut cart = Cart::default();
    cart.add(&products[1], 2).unwrap();

    let err = cart.update_quantity("P2", 5).unwrap_err();
    assert!(matches!(
        err,
        BillingError::InsufficientStock { available: 3, requested: 5, .. }
    ));
    assert_eq!(cart.line("P2").unwrap().quantity, 2);
}

#[test]
fn test_zeroed_cart_behaves_like_empty() {
    let products = catalog();
    let mut cart = Cart::default();
    cart.add(&products[2], 4).unwrap();
    cart.update_quantity("P3", 0).unwrap();

    assert!(cart.is_empty());
    assert_eq!(cart.totals(), Cart::default().totals());
    assert!(cart.to_sale_request(Default::default()).items.is_empty());
}
