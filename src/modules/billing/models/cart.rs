use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::money::line_amount;
use crate::modules::billing::error::BillingError;
use crate::modules::products::Product;
use crate::modules::sales::models::{CreateSaleRequest, PaymentMode, SaleItemRequest};
use crate::modules::taxes::{BillTotals, TaxCalculator, TaxableLine};

/// One product in the cart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
    pub product_id: String,
    pub product_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub tax_rate: Option<Decimal>,
    /// Stock on hand when the product was last added; `None` if untracked
    pub stock: Option<u32>,
    pub quantity: u32,
}

impl CartLine {
    /// `None` if the amount does not fit a Decimal
    pub fn line_total(&self) -> Option<Decimal> {
        line_amount(self.unit_price, self.quantity)
    }

    fn taxable(&self) -> Option<TaxableLine> {
        Some(TaxableLine {
            line_total: self.line_total()?,
            tax_rate: self.tax_rate,
        })
    }

    fn check_stock(&self, quantity: u32) -> Result<(), BillingError> {
        ensure_stock(&self.product_name, self.stock, quantity)
    }
}

fn ensure_stock(name: &str, stock: Option<u32>, quantity: u32) -> Result<(), BillingError> {
    match stock {
        Some(available) if quantity > available => Err(BillingError::InsufficientStock {
            product: name.to_string(),
            available,
            requested: quantity,
        }),
        _ => Ok(()),
    }
}

/// The in-progress bill.
///
/// Lines keep insertion order and every line has a quantity of at least 1. Totals
/// are recomputed after every mutation with the same calculator the server uses;
/// a mutation whose totals would not fit a Decimal is rejected.
#[derive(Debug, Clone)]
pub struct Cart {
    lines: Vec<CartLine>,
    totals: BillTotals,
    calculator: TaxCalculator,
}

impl Cart {
    pub fn new(calculator: TaxCalculator) -> Self {
        Self {
            lines: Vec::new(),
            totals: BillTotals::default(),
            calculator,
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn totals(&self) -> BillTotals {
        self.totals
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id == product_id)
    }

    /// Add `quantity` units of a product, merging into an existing line.
    /// The cart is unchanged if the result would exceed tracked stock.
    pub fn add(&mut self, product: &Product, quantity: u32) -> Result<(), BillingError> {
        if quantity == 0 {
            return Err(BillingError::InvalidQuantity);
        }

        let mut lines = self.lines.clone();
        match lines.iter().position(|line| line.product_id == product.id) {
            Some(index) => {
                let line = &mut lines[index];
                let next = line.quantity.saturating_add(quantity);
                ensure_stock(&line.product_name, product.qty_on_hand, next)?;
                line.stock = product.qty_on_hand;
                line.quantity = next;
            }
            None => {
                let line = CartLine {
                    product_id: product.id.clone(),
                    product_name: product.name.clone(),
                    unit_price: product.selling_price,
                    tax_rate: product.tax_rate,
                    stock: product.qty_on_hand,
                    quantity,
                };
                line.check_stock(quantity)?;
                lines.push(line);
            }
        }

        self.commit(lines)
    }

    /// Set a line's quantity; zero or less removes the line
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) -> Result<(), BillingError> {
        let index = self
            .lines
            .iter()
            .position(|line| line.product_id == product_id)
            .ok_or_else(|| BillingError::NotInCart(product_id.to_string()))?;

        let mut lines = self.lines.clone();
        if quantity <= 0 {
            lines.remove(index);
        } else {
            let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
            let line = &mut lines[index];
            line.check_stock(quantity)?;
            line.quantity = quantity;
        }

        self.commit(lines)
    }

    /// Remove a line; returns whether anything was removed
    pub fn remove(&mut self, product_id: &str) -> bool {
        let lines: Vec<CartLine> = self
            .lines
            .iter()
            .filter(|line| line.product_id != product_id)
            .cloned()
            .collect();
        if lines.len() == self.lines.len() {
            return false;
        }
        self.commit(lines).is_ok()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.totals = BillTotals::default();
    }

    /// Freeze the current lines into a sale request
    pub fn to_sale_request(&self, payment_mode: PaymentMode) -> CreateSaleRequest {
        CreateSaleRequest {
            items: self
                .lines
                .iter()
                .map(|line| SaleItemRequest {
                    product_id: line.product_id.clone(),
                    quantity: line.quantity,
                })
                .collect(),
            payment_mode,
        }
    }

    /// Replace the lines if their totals can be computed
    fn commit(&mut self, lines: Vec<CartLine>) -> Result<(), BillingError> {
        let taxable = lines
            .iter()
            .map(CartLine::taxable)
            .collect::<Option<Vec<_>>>()
            .ok_or(BillingError::AmountTooLarge)?;
        self.totals = self
            .calculator
            .calculate(taxable)
            .map_err(|_| BillingError::AmountTooLarge)?;
        self.lines = lines;
        Ok(())
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(TaxCalculator::default())
    }
}
