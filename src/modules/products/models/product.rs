// A sellable catalog product.
//
// Stock is tracked per product in `qty_on_hand`; `None` means the product is not
// stock-tracked and can be sold in any quantity.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::money::{line_amount, validate_price};
use crate::core::{AppError, Result};
use crate::modules::taxes::TaxCalculator;

/// Stock level classification shown on the inventory screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    #[serde(rename = "Good Stock")]
    Good,
    #[serde(rename = "Low Stock")]
    Low,
    #[serde(rename = "Critical")]
    Critical,
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StockStatus::Good => write!(f, "Good Stock"),
            StockStatus::Low => write!(f, "Low Stock"),
            StockStatus::Critical => write!(f, "Critical"),
        }
    }
}

/// Most units of one product the shop will hold
pub const MAX_STOCK: u32 = 1_000_000_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub sku: String,
    #[serde(default)]
    pub barcode: Option<String>,
    pub unit: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub mrp: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::float")]
    pub selling_price: Decimal,
    /// Fractional tax rate (0.05 = 5%), used when the tax mode is per-product
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub tax_rate: Option<Decimal>,
    #[serde(default)]
    pub qty_on_hand: Option<u32>,
    #[serde(default)]
    pub min_level: u32,
}

impl Product {
    pub fn is_stock_tracked(&self) -> bool {
        self.qty_on_hand.is_some()
    }

    /// Whether `quantity` units can be taken from stock
    pub fn can_supply(&self, quantity: u32) -> bool {
        self.qty_on_hand.map_or(true, |on_hand| quantity <= on_hand)
    }

    pub fn stock_status(&self) -> StockStatus {
        let Some(stock) = self.qty_on_hand else {
            return StockStatus::Good;
        };

        if stock >= self.min_level {
            StockStatus::Good
        } else if u64::from(stock) * 2 < u64::from(self.min_level) {
            StockStatus::Critical
        } else {
            StockStatus::Low
        }
    }

    pub fn is_low_stock(&self) -> bool {
        self.stock_status() != StockStatus::Good
    }

    /// Value of stock on hand at selling price; `None` if it does not fit a Decimal
    pub fn stock_value(&self) -> Option<Decimal> {
        line_amount(self.selling_price, self.qty_on_hand.unwrap_or(0))
    }

    /// Validate catalog fields shared by create and update
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("Product name is required"));
        }
        if self.name.len() > 255 {
            return Err(AppError::validation(
                "Product name cannot exceed 255 characters",
            ));
        }
        if self.sku.trim().is_empty() {
            return Err(AppError::validation("SKU is required"));
        }
        if self.unit.trim().is_empty() {
            return Err(AppError::validation("Unit is required"));
        }

        validate_price("Selling price", self.selling_price).map_err(AppError::Validation)?;
        if let Some(mrp) = self.mrp {
            validate_price("MRP", mrp).map_err(AppError::Validation)?;
        }
        if let Some(tax_rate) = self.tax_rate {
            TaxCalculator::validate_tax_rate(tax_rate)?;
        }
        if self.qty_on_hand.is_some_and(|qty| qty > MAX_STOCK) {
            return Err(AppError::validation(format!(
                "Stock cannot exceed {} units",
                MAX_STOCK
            )));
        }

        Ok(())
    }
}

/// Response for GET /products
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
}

/// Request to create a catalog product
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub sku: String,
    pub unit: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub selling_price: Decimal,
    #[serde(default)]
    pub barcode: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub mrp: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub tax_rate: Option<Decimal>,
    #[serde(default)]
    pub min_level: Option<u32>,
}

/// Partial update of catalog fields; stock moves through the inventory endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProductRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub selling_price: Option<Decimal>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub mrp: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub tax_rate: Option<Decimal>,
    #[serde(default)]
    pub min_level: Option<u32>,
}

impl UpdateProductRequest {
    /// Apply the provided fields onto `product`
    pub fn apply_to(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(sku) = self.sku {
            product.sku = sku;
        }
        if let Some(unit) = self.unit {
            product.unit = unit;
        }
        if let Some(selling_price) = self.selling_price {
            product.selling_price = selling_price;
        }
        if self.category.is_some() {
            product.category = self.category;
        }
        if self.mrp.is_some() {
            product.mrp = self.mrp;
        }
        if self.tax_rate.is_some() {
            product.tax_rate = self.tax_rate;
        }
        if let Some(min_level) = self.min_level {
            product.min_level = min_level;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProductResponse {
    pub success: bool,
    pub product: Product,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteProductResponse {
    pub success: bool,
    pub message: String,
}
