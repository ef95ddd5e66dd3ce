// Product catalog storage.
//
// The store is in-memory: the shop runs without a database, so the catalog lives
// for the lifetime of the process. Stock changes for one sale are applied under a
// single write lock so that either every line is deducted or none is.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::{AppError, Result};
use crate::modules::products::models::{Product, MAX_STOCK};

/// A signed stock movement for one product
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockChange<'a> {
    pub product_id: &'a str,
    pub delta: i64,
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products ordered by name
    async fn list(&self) -> Result<Vec<Product>>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>>;

    async fn find_by_sku(&self, sku: &str) -> Result<Option<Product>>;

    async fn find_by_barcode(&self, barcode: &str) -> Result<Option<Product>>;

    async fn insert(&self, product: Product) -> Result<Product>;

    async fn update(&self, product: Product) -> Result<Product>;

    async fn delete(&self, id: &str) -> Result<()>;

    /// Apply stock movements atomically.
    ///
    /// Fails without changing anything if a product is missing or a tracked
    /// product would drop below zero. Untracked products ignore negative deltas
    /// and become tracked on their first positive delta.
    async fn apply_stock_changes(&self, changes: &[StockChange<'_>]) -> Result<Vec<Product>>;
}

/// In-memory product repository
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }
}

fn next_stock(product: &Product, delta: i64) -> Result<Option<u32>> {
    match product.qty_on_hand {
        None if delta <= 0 => Ok(None),
        current => {
            let on_hand = current.unwrap_or(0);
            let next = i64::from(on_hand) + delta;
            if next < 0 {
                return Err(AppError::InsufficientStock {
                    product: product.name.clone(),
                    available: on_hand,
                    requested: u32::try_from(delta.unsigned_abs()).unwrap_or(u32::MAX),
                });
            }
            match u32::try_from(next) {
                Ok(next) if next <= MAX_STOCK => Ok(Some(next)),
                _ => Err(AppError::validation(format!(
                    "Stock for {} cannot exceed {} units",
                    product.name, MAX_STOCK
                ))),
            }
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> Result<Vec<Product>> {
        let mut products = self.products.read().await.clone();
        products.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(products)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_sku(&self, sku: &str) -> Result<Option<Product>> {
        let products = self.products.read().await;
        Ok(products
            .iter()
            .find(|p| p.sku.eq_ignore_ascii_case(sku))
            .cloned())
    }

    async fn find_by_barcode(&self, barcode: &str) -> Result<Option<Product>> {
        let products = self.products.read().await;
        Ok(products
            .iter()
            .find(|p| p.barcode.as_deref() == Some(barcode))
            .cloned())
    }

    async fn insert(&self, product: Product) -> Result<Product> {
        let mut products = self.products.write().await;

        if products.iter().any(|p| p.id == product.id) {
            return Err(AppError::conflict(format!(
                "Product with id '{}' already exists",
                product.id
            )));
        }
        if products.iter().any(|p| p.sku.eq_ignore_ascii_case(&product.sku)) {
            return Err(AppError::conflict(format!(
                "SKU '{}' already exists",
                product.sku
            )));
        }
        if product.barcode.is_some() && products.iter().any(|p| p.barcode == product.barcode) {
            return Err(AppError::conflict("Barcode already exists"));
        }

        products.push(product.clone());
        Ok(product)
    }

    async fn update(&self, product: Product) -> Result<Product> {
        let mut products = self.products.write().await;

        if products
            .iter()
            .any(|p| p.id != product.id && p.sku.eq_ignore_ascii_case(&product.sku))
        {
            return Err(AppError::conflict(format!(
                "SKU '{}' already exists",
                product.sku
            )));
        }

        let slot = products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or_else(|| AppError::not_found("Product not found"))?;
        *slot = product.clone();

        Ok(product)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| p.id != id);

        if products.len() == before {
            return Err(AppError::not_found("Product not found"));
        }
        Ok(())
    }

    async fn apply_stock_changes(&self, changes: &[StockChange<'_>]) -> Result<Vec<Product>> {
        let mut products = self.products.write().await;

        // Validate everything first against a working copy of the affected stock
        let mut planned: Vec<(usize, Option<u32>)> = Vec::with_capacity(changes.len());
        for change in changes {
            let index = products
                .iter()
                .position(|p| p.id == change.product_id)
                .ok_or_else(|| AppError::not_found(format!("Product {} not found", change.product_id)))?;

            let mut working = products[index].clone();
            if let Some((_, stock)) = planned.iter().rev().find(|(i, _)| *i == index) {
                working.qty_on_hand = *stock;
            }

            planned.push((index, next_stock(&working, change.delta)?));
        }

        let mut updated = Vec::with_capacity(planned.len());
        for (index, stock) in planned {
            products[index].qty_on_hand = stock;
            updated.push(products[index].clone());
        }

        Ok(updated)
    }
}
