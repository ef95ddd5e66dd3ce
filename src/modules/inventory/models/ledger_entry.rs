use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Why stock moved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LedgerReason {
    Sale,
    StockIn,
    Adjustment,
}

impl std::fmt::Display for LedgerReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerReason::Sale => write!(f, "SALE"),
            LedgerReason::StockIn => write!(f, "STOCK_IN"),
            LedgerReason::Adjustment => write!(f, "ADJUSTMENT"),
        }
    }
}

/// One stock movement; negative deltas take stock out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: String,
    pub product_id: String,
    pub qty_delta: i64,
    pub reason: LedgerReason,
    pub reference_id: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl LedgerEntry {
    pub fn new(
        product_id: impl Into<String>,
        qty_delta: i64,
        reason: LedgerReason,
        reference_id: Option<String>,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            product_id: product_id.into(),
            qty_delta,
            reason,
            reference_id,
            notes,
            created_at: Utc::now(),
        }
    }
}
