// A completed sale. Invoices are immutable snapshots: product names, prices and
// tax rates are copied at checkout so later catalog edits never change a bill.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::sale_request::PaymentMode;
use crate::modules::taxes::{BillTotals, TaxableLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaleStatus {
    Completed,
}

impl std::fmt::Display for SaleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaleStatus::Completed => write!(f, "completed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLine {
    pub product_id: String,
    pub product_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub tax_rate: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub line_total: Decimal,
}

impl InvoiceLine {
    pub fn taxable(&self) -> TaxableLine {
        TaxableLine {
            line_total: self.line_total,
            tax_rate: Some(self.tax_rate),
        }
    }
}

/// Everything about a sale except its invoice number, which the store assigns
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDraft {
    pub id: String,
    pub items: Vec<InvoiceLine>,
    pub totals: BillTotals,
    pub payment_mode: PaymentMode,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub invoice_number: String,
    pub items: Vec<InvoiceLine>,
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub tax: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub payment_mode: PaymentMode,
    pub status: SaleStatus,
    pub created_at: DateTime<Utc>,
}

impl Invoice {
    pub fn from_draft(draft: InvoiceDraft, invoice_number: String) -> Self {
        Self {
            id: draft.id,
            invoice_number,
            items: draft.items,
            subtotal: draft.totals.subtotal,
            tax: draft.totals.tax,
            total: draft.totals.total,
            payment_mode: draft.payment_mode,
            status: SaleStatus::Completed,
            created_at: draft.created_at,
        }
    }

    pub fn totals(&self) -> BillTotals {
        BillTotals {
            subtotal: self.subtotal,
            tax: self.tax,
            total: self.total,
        }
    }

    /// Total number of units sold
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }
}

/// Compact bill row served by `GET /api/billing`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillSummary {
    pub id: String,
    pub invoice_number: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub items: u64,
    pub timestamp: DateTime<Utc>,
}

impl From<&Invoice> for BillSummary {
    fn from(invoice: &Invoice) -> Self {
        Self {
            id: invoice.id.clone(),
            invoice_number: invoice.invoice_number.clone(),
            total: invoice.total,
            items: invoice.item_count(),
            timestamp: invoice.created_at,
        }
    }
}
