use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::Result;
use crate::modules::inventory::models::LedgerEntry;

/// Append-only inventory ledger
#[async_trait]
pub trait LedgerRepository: Send + Sync {
    async fn record(&self, entries: Vec<LedgerEntry>) -> Result<()>;

    /// Newest entries first, optionally for one product
    async fn list(&self, product_id: Option<&str>, limit: usize) -> Result<Vec<LedgerEntry>>;
}

#[derive(Debug, Default)]
pub struct InMemoryLedgerRepository {
    entries: RwLock<Vec<LedgerEntry>>,
}

impl InMemoryLedgerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LedgerRepository for InMemoryLedgerRepository {
    async fn record(&self, entries: Vec<LedgerEntry>) -> Result<()> {
        self.entries.write().await.extend(entries);
        Ok(())
    }

    async fn list(&self, product_id: Option<&str>, limit: usize) -> Result<Vec<LedgerEntry>> {
        let entries = self.entries.read().await;
        Ok(entries
            .iter()
            .rev()
            .filter(|entry| product_id.map_or(true, |id| entry.product_id == id))
            .take(limit)
            .cloned()
            .collect())
    }
}
