// One terminal's billing state.
//
// The cart lives behind an async mutex that is never held across the sale
// submission. `submitting` is set for the whole checkout; while it is set every
// cart mutation and any second checkout fail with `CheckoutInProgress`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard, RwLock};

use crate::modules::billing::error::BillingError;
use crate::modules::billing::gateways::SalesGateway;
use crate::modules::billing::models::{Cart, ProductCatalog};
use crate::modules::products::Product;
use crate::modules::sales::models::{Invoice, PaymentMode};
use crate::modules::taxes::{BillTotals, TaxCalculator};

/// Clears the submission flag when checkout ends, however it ends
struct SubmissionGuard<'a>(&'a AtomicBool);

impl Drop for SubmissionGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct BillingSession {
    gateway: Arc<dyn SalesGateway>,
    cart: Mutex<Cart>,
    catalog: RwLock<ProductCatalog>,
    submitting: AtomicBool,
}

impl BillingSession {
    pub fn new(gateway: Arc<dyn SalesGateway>, calculator: TaxCalculator) -> Self {
        Self {
            gateway,
            cart: Mutex::new(Cart::new(calculator)),
            catalog: RwLock::new(ProductCatalog::default()),
            submitting: AtomicBool::new(false),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    /// Fetch the catalog through the gateway; returns the number of products
    pub async fn load_catalog(&self) -> Result<usize, BillingError> {
        let products = self.gateway.fetch_products().await?;
        let count = products.len();
        *self.catalog.write().await = ProductCatalog::new(products);

        tracing::debug!(gateway = self.gateway.name(), products = count, "Catalog loaded");
        Ok(count)
    }

    pub async fn search(&self, term: &str) -> Vec<Product> {
        self.catalog
            .read()
            .await
            .search(term)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Add a catalog product by id
    pub async fn add_by_id(&self, product_id: &str, quantity: u32) -> Result<BillTotals, BillingError> {
        let product = self
            .catalog
            .read()
            .await
            .find(product_id)
            .cloned()
            .ok_or_else(|| BillingError::UnknownProduct(product_id.to_string()))?;

        self.add(&product, quantity).await
    }

    /// Add a scanned product
    pub async fn add_by_barcode(
        &self,
        barcode: &str,
        quantity: u32,
    ) -> Result<BillTotals, BillingError> {
        let product = self
            .catalog
            .read()
            .await
            .find_by_barcode(barcode)
            .cloned()
            .ok_or_else(|| BillingError::UnknownProduct(barcode.to_string()))?;

        self.add(&product, quantity).await
    }

    pub async fn add(&self, product: &Product, quantity: u32) -> Result<BillTotals, BillingError> {
        let mut cart = self.unlocked_cart().await?;
        cart.add(product, quantity)?;
        Ok(cart.totals())
    }

    pub async fn update_quantity(
        &self,
        product_id: &str,
        quantity: i64,
    ) -> Result<BillTotals, BillingError> {
        let mut cart = self.unlocked_cart().await?;
        cart.update_quantity(product_id, quantity)?;
        Ok(cart.totals())
    }

    pub async fn remove(&self, product_id: &str) -> Result<BillTotals, BillingError> {
        let mut cart = self.unlocked_cart().await?;
        cart.remove(product_id);
        Ok(cart.totals())
    }

    pub async fn clear(&self) -> Result<(), BillingError> {
        self.unlocked_cart().await?.clear();
        Ok(())
    }

    /// Copy of the current cart
    pub async fn cart(&self) -> Cart {
        self.cart.lock().await.clone()
    }

    pub async fn totals(&self) -> BillTotals {
        self.cart.lock().await.totals()
    }

    /// Submit the cart as a sale.
    ///
    /// An empty cart fails without calling the gateway. On success the cart is
    /// cleared and the invoice returned; on failure the cart is left as it was.
    pub async fn checkout(&self, payment_mode: PaymentMode) -> Result<Invoice, BillingError> {
        if self
            .submitting
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(BillingError::CheckoutInProgress);
        }
        let _guard = SubmissionGuard(&self.submitting);

        let (request, expected) = {
            let cart = self.cart.lock().await;
            if cart.is_empty() {
                return Err(BillingError::EmptyCart);
            }
            (cart.to_sale_request(payment_mode), cart.totals())
        };

        let invoice = match self.gateway.submit_sale(&request).await {
            Ok(invoice) => invoice,
            Err(e) => {
                tracing::warn!(
                    gateway = self.gateway.name(),
                    error = %e,
                    "Checkout failed, cart kept"
                );
                return Err(BillingError::Submission(e));
            }
        };

        if invoice.totals() != expected {
            tracing::warn!(
                invoice_number = %invoice.invoice_number,
                cart_total = %expected.total,
                invoice_total = %invoice.total,
                "Cart total differs from invoice, using invoice"
            );
        }

        self.cart.lock().await.clear();
        {
            let mut catalog = self.catalog.write().await;
            for line in &invoice.items {
                catalog.deduct(&line.product_id, line.quantity);
            }
        }

        tracing::info!(
            invoice_number = %invoice.invoice_number,
            total = %invoice.total,
            payment_mode = %payment_mode,
            "Checkout completed"
        );

        Ok(invoice)
    }

    /// Lock the cart for a mutation, refusing while a checkout is pending
    async fn unlocked_cart(&self) -> Result<MutexGuard<'_, Cart>, BillingError> {
        let cart = self.cart.lock().await;
        if self.is_submitting() {
            return Err(BillingError::CheckoutInProgress);
        }
        Ok(cart)
    }
}
