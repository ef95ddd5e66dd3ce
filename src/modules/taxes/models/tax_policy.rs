// GST policy shared by the server (authoritative) and the cart (display).
// Both sides must build totals through TaxCalculator so the displayed cart total
// equals the invoice total.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How tax is derived from a bill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxMode {
    /// One rate applied to the whole subtotal
    Flat,
    /// Each line taxed at its product's rate (falling back to the default rate)
    PerProduct,
}

impl std::fmt::Display for TaxMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaxMode::Flat => write!(f, "flat"),
            TaxMode::PerProduct => write!(f, "per_product"),
        }
    }
}

impl std::str::FromStr for TaxMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "flat" => Ok(TaxMode::Flat),
            "per_product" | "per-product" => Ok(TaxMode::PerProduct),
            _ => Err(format!("Invalid tax mode: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxPolicy {
    mode: TaxMode,
    default_rate: Decimal,
}

impl TaxPolicy {
    /// 5% GST
    pub fn default_gst_rate() -> Decimal {
        Decimal::new(5, 2)
    }

    pub fn new(mode: TaxMode, default_rate: Decimal) -> Self {
        Self { mode, default_rate }
    }

    pub fn flat(rate: Decimal) -> Self {
        Self::new(TaxMode::Flat, rate)
    }

    pub fn mode(&self) -> TaxMode {
        self.mode
    }

    pub fn default_rate(&self) -> Decimal {
        self.default_rate
    }

    /// Effective rate for a line given its product's configured rate
    pub fn rate_for(&self, product_rate: Option<Decimal>) -> Decimal {
        match self.mode {
            TaxMode::Flat => self.default_rate,
            TaxMode::PerProduct => product_rate.unwrap_or(self.default_rate),
        }
    }
}

impl Default for TaxPolicy {
    fn default() -> Self {
        Self::flat(Self::default_gst_rate())
    }
}

/// One line as seen by the tax calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxableLine {
    pub line_total: Decimal,
    pub tax_rate: Option<Decimal>,
}

/// Derived bill amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BillTotals {
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub tax: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}
