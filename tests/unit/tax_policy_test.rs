// Property-based tests for the tax policy
//
// - Flat mode ignores per-product rates
// - PerProduct mode falls back to the default rate for unrated lines
// - Tax is rounded once on the bill, never per line

use proptest::prelude::*;
use retail_boss::taxes::{TaxCalculator, TaxMode, TaxPolicy, TaxableLine};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

fn line_strategy() -> impl Strategy<Value = TaxableLine> {
    (
        1i64..=500_000,
        prop::option::of(prop_oneof![Just(dec!(0)), Just(dec!(0.05)), Just(dec!(0.12)), Just(dec!(0.18))]),
    )
        .prop_map(|(paise, tax_rate)| TaxableLine {
            line_total: Decimal::new(paise, 2),
            tax_rate,
        })
}

proptest! {
    #[test]
    fn test_flat_mode_uses_default_rate(lines in prop::collection::vec(line_strategy(), 0..20)) {
        let calculator = TaxCalculator::new(TaxPolicy::flat(dec!(0.05)));
        let totals = calculator.calculate(lines.iter().copied()).unwrap();

        let subtotal: Decimal = lines.iter().map(|l| l.line_total).sum();
        prop_assert_eq!(totals.subtotal, subtotal);
        prop_assert_eq!(totals.tax, round_half_up(subtotal * dec!(0.05)));
        prop_assert_eq!(totals.total, totals.subtotal + totals.tax);
    }

    #[test]
    fn test_per_product_mode_weights_each_line(lines in prop::collection::vec(line_strategy(), 0..20)) {
        let calculator = TaxCalculator::new(TaxPolicy::new(TaxMode::PerProduct, dec!(0.05)));
        let totals = calculator.calculate(lines.iter().copied()).unwrap();

        let raw: Decimal = lines
            .iter()
            .map(|l| l.line_total * l.tax_rate.unwrap_or(dec!(0.05)))
            .sum();
        prop_assert_eq!(totals.tax, round_half_up(raw));
        prop_assert_eq!(totals.total, totals.subtotal + totals.tax);
    }

    #[test]
    fn test_modes_agree_when_no_line_has_a_rate(paise in prop::collection::vec(1i64..=100_000, 0..15)) {
        let lines: Vec<TaxableLine> = paise
            .iter()
            .map(|p| TaxableLine { line_total: Decimal::new(*p, 2), tax_rate: None })
            .collect();

        let flat = TaxCalculator::new(TaxPolicy::flat(dec!(0.05)))
            .calculate(lines.iter().copied())
            .unwrap();
        let per_product = TaxCalculator::new(TaxPolicy::new(TaxMode::PerProduct, dec!(0.05)))
            .calculate(lines.iter().copied())
            .unwrap();
        prop_assert_eq!(flat, per_product);
    }

    #[test]
    fn test_tax_rates_in_range_are_accepted(basis_points in 0i64..=10_000) {
        prop_assert!(TaxCalculator::validate_tax_rate(Decimal::new(basis_points, 4)).is_ok());
    }
}

#[test]
fn test_tax_is_rounded_once_per_bill() {
    // Ten lines of 10 at 5%: 0.5 each would round to 1 per line (10 total),
    // but the bill tax is round(100 × 0.05) = 5
    let lines = vec![
        TaxableLine {
            line_total: dec!(10),
            tax_rate: None,
        };
        10
    ];
    let totals = TaxCalculator::default().calculate(lines).unwrap();

    assert_eq!(totals.subtotal, dec!(100));
    assert_eq!(totals.tax, dec!(5));
    assert_eq!(totals.total, dec!(105));
}

#[test]
fn test_half_rupee_rounds_away_from_zero() {
    // 30 × 0.05 = 1.5 → 2
    let totals = TaxCalculator::default().calculate([TaxableLine {
        line_total: dec!(30),
        tax_rate: None,
    }])
    .unwrap();
    assert_eq!(totals.tax, dec!(2));
    assert_eq!(totals.total, dec!(32));
}

#[test]
fn test_per_product_rates() {
    let calculator = TaxCalculator::new(TaxPolicy::new(TaxMode::PerProduct, dec!(0.05)));
    let totals = calculator.calculate([
        TaxableLine {
            line_total: dec!(250),
            tax_rate: Some(dec!(0.18)),
        },
        TaxableLine {
            line_total: dec!(12),
            tax_rate: None,
        },
    ])
    .unwrap();

    // 45 + 0.6 = 45.6 → 46
    assert_eq!(totals.tax, dec!(46));
    assert_eq!(totals.total, dec!(308));
}

#[test]
fn test_empty_bill_is_zero() {
    let totals = TaxCalculator::default().calculate(Vec::new()).unwrap();
    assert_eq!(totals.subtotal, Decimal::ZERO);
    assert_eq!(totals.tax, Decimal::ZERO);
    assert_eq!(totals.total, Decimal::ZERO);
}

#[test]
fn test_bill_too_large_for_a_decimal_is_rejected() {
    let lines = [
        TaxableLine {
            line_total: Decimal::MAX,
            tax_rate: None,
        },
        TaxableLine {
            line_total: dec!(1),
            tax_rate: None,
        },
    ];
    let err = TaxCalculator::default().calculate(lines).unwrap_err();
    assert_eq!(err.to_string(), "Validation error: Bill amount is too large");
}

#[test]
fn test_invalid_tax_rates() {
    assert!(TaxCalculator::validate_tax_rate(dec!(-0.01)).is_err());
    assert!(TaxCalculator::validate_tax_rate(dec!(1.01)).is_err());
    assert!(TaxCalculator::validate_tax_rate(dec!(0.12345)).is_err());
    assert!(TaxCalculator::validate_tax_rate(dec!(0.1800)).is_ok());
}
