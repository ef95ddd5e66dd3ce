use rust_decimal::{Decimal, RoundingStrategy};

/// Shop amounts are settled in whole rupees.
pub const CURRENCY_SCALE: u32 = 0;

/// Currency symbol used on printed invoices
pub const CURRENCY_SYMBOL: &str = "₹";

/// Rounds an amount to the nearest whole currency unit, half away from zero.
///
/// This is the invoice rounding policy: 13.1 -> 13, 13.5 -> 14. Changing it changes
/// printed totals, so callers must not round amounts any other way.
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Highest unit price the shop accepts (₹1 crore)
pub const MAX_PRICE: Decimal = Decimal::from_parts(10_000_000, 0, 0, false, 0);

/// Validates a price: non-negative, at most [`MAX_PRICE`], two decimal places
pub fn validate_price(field: &str, amount: Decimal) -> Result<(), String> {
    if amount < Decimal::ZERO {
        return Err(format!("{} cannot be negative", field));
    }

    if amount > MAX_PRICE {
        return Err(format!(
            "{} cannot exceed {}",
            field,
            format_amount(MAX_PRICE)
        ));
    }

    if amount.normalize().scale() > 2 {
        return Err(format!(
            "{} must have at most 2 decimal places, got {}",
            field, amount
        ));
    }

    Ok(())
}

/// `unit_price × quantity`, or `None` when the amount does not fit a Decimal
pub fn line_amount(unit_price: Decimal, quantity: u32) -> Option<Decimal> {
    unit_price.checked_mul(Decimal::from(quantity))
}

/// Sums amounts, or `None` on overflow
pub fn checked_sum<I>(amounts: I) -> Option<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(amount))
}

/// Formats an amount for display, e.g. `₹1,250` or `₹12.50`
pub fn format_amount(amount: Decimal) -> String {
    let normalized = amount.normalize();
    let negative = normalized < Decimal::ZERO;
    let text = normalized.abs().to_string();

    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole.to_string(), Some(format!("{:0<2}", fraction))),
        None => (text, None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    match fraction {
        Some(fraction) => format!("{}{}{}.{}", sign, CURRENCY_SYMBOL, grouped, fraction),
        None => format!("{}{}{}", sign, CURRENCY_SYMBOL, grouped),
    }
}
