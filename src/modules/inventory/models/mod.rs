mod inventory;
mod ledger_entry;

pub use inventory::{
    AdjustStockRequest, InventoryItem, InventoryOverview, InventoryStats, LedgerQuery,
    StockInRequest, StockMovementResponse,
};
pub use ledger_entry::{LedgerEntry, LedgerReason};
