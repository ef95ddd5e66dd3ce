use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::core::{AppError, Result, ShopClock};
use crate::modules::sales::models::{Invoice, InvoiceDraft};
use crate::modules::sales::services::InvoiceNumberSequence;

#[async_trait]
pub trait SaleRepository: Send + Sync {
    /// Store a sale, assigning the next invoice number
    async fn create(&self, draft: InvoiceDraft) -> Result<Invoice>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Invoice>>;

    /// Newest first
    async fn list_recent(&self, limit: usize) -> Result<Vec<Invoice>>;

    /// Sales with `from <= created_at < to`
    async fn list_between(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Result<Vec<Invoice>>;
}

#[derive(Debug)]
struct SaleStore {
    sequence: InvoiceNumberSequence,
    invoices: Vec<Invoice>,
}

/// In-memory sale repository
#[derive(Debug)]
pub struct InMemorySaleRepository {
    clock: ShopClock,
    store: RwLock<SaleStore>,
}

impl InMemorySaleRepository {
    pub fn new(invoice_prefix: impl Into<String>, clock: ShopClock) -> Self {
        let sequence = InvoiceNumberSequence::new(invoice_prefix, clock.year(Utc::now()));
        Self {
            clock,
            store: RwLock::new(SaleStore {
                sequence,
                invoices: Vec::new(),
            }),
        }
    }
}

#[async_trait]
impl SaleRepository for InMemorySaleRepository {
    async fn create(&self, draft: InvoiceDraft) -> Result<Invoice> {
        let mut store = self.store.write().await;

        if store.invoices.iter().any(|i| i.id == draft.id) {
            return Err(AppError::conflict(format!(
                "Sale with id '{}' already exists",
                draft.id
            )));
        }

        let year = self.clock.year(draft.created_at);
        let number = store.sequence.next_for(year);
        let invoice = Invoice::from_draft(draft, number);
        store.invoices.push(invoice.clone());

        Ok(invoice)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Invoice>> {
        let store = self.store.read().await;
        Ok(store.invoices.iter().find(|i| i.id == id).cloned())
    }

    async fn list_recent(&self, limit: usize) -> Result<Vec<Invoice>> {
        let store = self.store.read().await;
        Ok(store.invoices.iter().rev().take(limit).cloned().collect())
    }

    async fn list_between(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Result<Vec<Invoice>> {
        let store = self.store.read().await;
        Ok(store
            .invoices
            .iter()
            .filter(|i| i.created_at >= from && i.created_at < to)
            .cloned()
            .collect())
    }
}
