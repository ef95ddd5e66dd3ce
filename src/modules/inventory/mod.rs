// Inventory module (stock overview, stock movements, ledger)

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{LedgerEntry, LedgerReason};
pub use repositories::{InMemoryLedgerRepository, LedgerRepository};
pub use services::InventoryService;
