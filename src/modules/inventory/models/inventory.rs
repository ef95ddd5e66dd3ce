use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ledger_entry::LedgerEntry;
use crate::modules::products::{Product, StockStatus};

/// Response for GET /inventory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryOverview {
    pub stats: InventoryStats,
    pub products: Vec<InventoryItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryStats {
    pub in_stock: usize,
    pub low_stock: usize,
    /// Expiry dates are not tracked; always zero
    pub expiring_soon: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub stock_value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub stock: Option<u32>,
    pub min_level: u32,
    pub status: StockStatus,
    pub forecast: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl From<&Product> for InventoryItem {
    fn from(product: &Product) -> Self {
        let status = product.stock_status();
        let forecast = if status == StockStatus::Good {
            "Stable"
        } else {
            "Reorder now"
        };

        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            category: product.category.clone(),
            stock: product.qty_on_hand,
            min_level: product.min_level,
            status,
            forecast: forecast.to_string(),
            price: product.selling_price,
        }
    }
}

/// POST /inventory/stock-in
#[derive(Debug, Clone, Deserialize)]
pub struct StockInRequest {
    pub product_id: String,
    pub quantity: u32,
    #[serde(default)]
    pub notes: Option<String>,
}

/// POST /inventory/adjust
#[derive(Debug, Clone, Deserialize)]
pub struct AdjustStockRequest {
    pub product_id: String,
    pub qty_delta: i64,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockMovementResponse {
    pub success: bool,
    pub product: Product,
    pub entry: LedgerEntry,
}

/// Query for GET /inventory/ledger
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerQuery {
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default = "default_ledger_limit")]
    pub limit: usize,
}

fn default_ledger_limit() -> usize {
    100
}
