use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::core::error::AppError;
use crate::core::money::line_amount;
use crate::modules::inventory::models::{LedgerEntry, LedgerReason};
use crate::modules::inventory::repositories::LedgerRepository;
use crate::modules::products::repositories::{ProductRepository, StockChange};
use crate::modules::products::Product;
use crate::modules::sales::models::{
    BillSummary, CreateSaleRequest, Invoice, InvoiceDraft, InvoiceLine, SaleItemRequest,
};
use crate::modules::sales::repositories::SaleRepository;
use crate::modules::sales::services::InvoicePrinter;
use crate::modules::taxes::{BillTotals, TaxCalculator};

const RECENT_BILLS: usize = 10;

/// Service for checkout and sale history
pub struct SalesService {
    product_repo: Arc<dyn ProductRepository>,
    sale_repo: Arc<dyn SaleRepository>,
    ledger_repo: Arc<dyn LedgerRepository>,
    calculator: TaxCalculator,
    printer: InvoicePrinter,
}

impl SalesService {
    pub fn new(
        product_repo: Arc<dyn ProductRepository>,
        sale_repo: Arc<dyn SaleRepository>,
        ledger_repo: Arc<dyn LedgerRepository>,
        calculator: TaxCalculator,
        printer: InvoicePrinter,
    ) -> Self {
        Self {
            product_repo,
            sale_repo,
            ledger_repo,
            calculator,
            printer,
        }
    }

    pub fn calculator(&self) -> &TaxCalculator {
        &self.calculator
    }

    /// Complete a sale.
    ///
    /// Validates the request, deducts stock for all lines at once, prices every
    /// line from the products as they stood at deduction and stores the invoice.
    /// Stock is put back if pricing or storing fails.
    pub async fn create_sale(&self, request: CreateSaleRequest) -> Result<Invoice, AppError> {
        if request.items.is_empty() {
            return Err(AppError::validation("Sale must contain at least one item"));
        }
        if let Some(item) = request.items.iter().find(|item| item.quantity == 0) {
            return Err(AppError::validation(format!(
                "Quantity for product {} must be positive",
                item.product_id
            )));
        }

        let items = request.merged_items();
        let changes: Vec<StockChange<'_>> = items
            .iter()
            .map(|item| StockChange {
                product_id: &item.product_id,
                delta: -i64::from(item.quantity),
            })
            .collect();
        let products = self.product_repo.apply_stock_changes(&changes).await?;

        let (lines, totals) = match self.price_lines(&items, &products) {
            Ok(priced) => priced,
            Err(e) => {
                self.restock(&items).await;
                return Err(e);
            }
        };

        let draft = InvoiceDraft {
            id: Uuid::new_v4().to_string(),
            items: lines,
            totals,
            payment_mode: request.payment_mode,
            created_at: Utc::now(),
        };

        let invoice = match self.sale_repo.create(draft).await {
            Ok(invoice) => invoice,
            Err(e) => {
                self.restock(&items).await;
                return Err(e);
            }
        };

        let notes = format!("Sale {}", invoice.invoice_number);
        let entries = invoice
            .items
            .iter()
            .map(|line| {
                LedgerEntry::new(
                    &line.product_id,
                    -i64::from(line.quantity),
                    LedgerReason::Sale,
                    Some(invoice.id.clone()),
                    Some(notes.clone()),
                )
            })
            .collect();
        if let Err(e) = self.ledger_repo.record(entries).await {
            tracing::error!(
                sale_id = %invoice.id,
                error = %e,
                "Failed to record ledger entries for sale"
            );
        }

        tracing::info!(
            sale_id = %invoice.id,
            invoice_number = %invoice.invoice_number,
            lines = invoice.items.len(),
            total = %invoice.total,
            payment_mode = %invoice.payment_mode,
            "Sale completed"
        );

        Ok(invoice)
    }

    pub async fn list_sales(&self, limit: usize) -> Result<Vec<Invoice>, AppError> {
        self.sale_repo.list_recent(limit).await
    }

    pub async fn get_sale(&self, id: &str) -> Result<Invoice, AppError> {
        self.sale_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Sale not found"))
    }

    /// Printable text invoice
    pub async fn print_sale(&self, id: &str) -> Result<String, AppError> {
        let invoice = self.get_sale(id).await?;
        Ok(self.printer.render(&invoice))
    }

    /// Latest bills in the compact legacy shape
    pub async fn recent_bills(&self) -> Result<Vec<BillSummary>, AppError> {
        let invoices = self.sale_repo.list_recent(RECENT_BILLS).await?;
        Ok(invoices.iter().map(BillSummary::from).collect())
    }

    /// Invoice lines and totals for `items`, priced from the matching `products`
    fn price_lines(
        &self,
        items: &[SaleItemRequest],
        products: &[Product],
    ) -> Result<(Vec<InvoiceLine>, BillTotals), AppError> {
        let mut lines = Vec::with_capacity(items.len());
        for (item, product) in items.iter().zip(products) {
            let line_total = line_amount(product.selling_price, item.quantity).ok_or_else(|| {
                AppError::validation(format!("Amount for {} is too large", product.name))
            })?;

            lines.push(InvoiceLine {
                product_id: product.id.clone(),
                product_name: product.name.clone(),
                unit_price: product.selling_price,
                quantity: item.quantity,
                tax_rate: self.calculator.policy().rate_for(product.tax_rate),
                line_total,
            });
        }

        let totals = self.calculator.calculate(lines.iter().map(InvoiceLine::taxable))?;
        Ok((lines, totals))
    }

    /// Put back stock taken for a sale that could not be stored
    async fn restock(&self, items: &[SaleItemRequest]) {
        let changes: Vec<StockChange<'_>> = items
            .iter()
            .map(|item| StockChange {
                product_id: &item.product_id,
                delta: i64::from(item.quantity),
            })
            .collect();

        if let Err(e) = self.product_repo.apply_stock_changes(&changes).await {
            tracing::error!(error = %e, "Failed to restock after aborted sale");
        }
    }
}
