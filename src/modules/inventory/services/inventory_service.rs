use std::sync::Arc;

use crate::core::error::AppError;
use crate::core::money::checked_sum;
use crate::modules::inventory::models::{
    AdjustStockRequest, InventoryItem, InventoryOverview, InventoryStats, LedgerEntry,
    LedgerQuery, LedgerReason, StockInRequest, StockMovementResponse,
};
use crate::modules::inventory::repositories::LedgerRepository;
use crate::modules::products::repositories::{ProductRepository, StockChange};

/// Service for stock overview and stock movements
pub struct InventoryService {
    product_repo: Arc<dyn ProductRepository>,
    ledger_repo: Arc<dyn LedgerRepository>,
}

impl InventoryService {
    pub fn new(
        product_repo: Arc<dyn ProductRepository>,
        ledger_repo: Arc<dyn LedgerRepository>,
    ) -> Self {
        Self {
            product_repo,
            ledger_repo,
        }
    }

    /// Stock overview computed from the catalog
    pub async fn get_inventory(&self) -> Result<InventoryOverview, AppError> {
        let products = self.product_repo.list().await?;
        let stock_value = products
            .iter()
            .map(|p| p.stock_value())
            .collect::<Option<Vec<_>>>()
            .and_then(checked_sum)
            .ok_or_else(|| AppError::validation("Stock value is too large"))?;

        let stats = InventoryStats {
            in_stock: products
                .iter()
                .filter(|p| p.qty_on_hand.map_or(true, |q| q > 0))
                .count(),
            low_stock: products.iter().filter(|p| p.is_low_stock()).count(),
            expiring_soon: 0,
            stock_value,
        };

        Ok(InventoryOverview {
            stats,
            products: products.iter().map(InventoryItem::from).collect(),
        })
    }

    /// Receive goods (STOCK IN)
    pub async fn stock_in(
        &self,
        request: StockInRequest,
    ) -> Result<StockMovementResponse, AppError> {
        if request.quantity == 0 {
            return Err(AppError::Validation(
                "quantity must be positive".to_string(),
            ));
        }

        self.move_stock(
            &request.product_id,
            i64::from(request.quantity),
            LedgerReason::StockIn,
            request.notes,
        )
        .await
    }

    /// Correct stock after a count; cannot take stock below zero
    pub async fn adjust_stock(
        &self,
        request: AdjustStockRequest,
    ) -> Result<StockMovementResponse, AppError> {
        if request.qty_delta == 0 {
            return Err(AppError::Validation(
                "qty_delta must not be zero".to_string(),
            ));
        }

        self.move_stock(
            &request.product_id,
            request.qty_delta,
            LedgerReason::Adjustment,
            request.notes,
        )
        .await
    }

    pub async fn ledger(&self, query: LedgerQuery) -> Result<Vec<LedgerEntry>, AppError> {
        self.ledger_repo
            .list(query.product_id.as_deref(), query.limit)
            .await
    }

    async fn move_stock(
        &self,
        product_id: &str,
        delta: i64,
        reason: LedgerReason,
        notes: Option<String>,
    ) -> Result<StockMovementResponse, AppError> {
        let mut updated = self
            .product_repo
            .apply_stock_changes(&[StockChange { product_id, delta }])
            .await?;
        let product = updated
            .pop()
            .ok_or_else(|| AppError::internal("Stock update returned no product"))?;

        let entry = LedgerEntry::new(product_id, delta, reason, None, notes);
        self.ledger_repo.record(vec![entry.clone()]).await?;

        tracing::info!(
            product_id = %product_id,
            delta = delta,
            reason = %reason,
            qty_on_hand = ?product.qty_on_hand,
            "Stock moved"
        );

        Ok(StockMovementResponse {
            success: true,
            product,
            entry,
        })
    }
}
