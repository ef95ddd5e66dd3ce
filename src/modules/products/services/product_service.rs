use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::AppError;
use crate::modules::products::models::{
    CreateProductRequest, CreateProductResponse, DeleteProductResponse, Product,
    ProductListResponse, UpdateProductRequest,
};
use crate::modules::products::repositories::ProductRepository;
use crate::modules::products::services::barcode::{generate_barcode, validate_barcode};

const BARCODE_ATTEMPTS: usize = 5;

/// Service for catalog business logic
pub struct ProductService {
    product_repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(product_repo: Arc<dyn ProductRepository>) -> Self {
        Self { product_repo }
    }

    pub fn repository(&self) -> Arc<dyn ProductRepository> {
        self.product_repo.clone()
    }

    /// All products ordered by name
    pub async fn list_products(&self) -> Result<ProductListResponse, AppError> {
        let products = self.product_repo.list().await?;
        Ok(ProductListResponse { products })
    }

    pub async fn get_product(&self, id: &str) -> Result<Product, AppError> {
        self.product_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
    }

    /// Create a catalog product.
    ///
    /// - SKU must be unique
    /// - Barcode is generated when absent, otherwise validated and checked for uniqueness
    /// - Stock starts at zero; use stock-in to receive goods
    pub async fn create_product(
        &self,
        request: CreateProductRequest,
    ) -> Result<CreateProductResponse, AppError> {
        if self.product_repo.find_by_sku(&request.sku).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "SKU '{}' already exists",
                request.sku
            )));
        }

        let barcode = match request.barcode {
            Some(barcode) => {
                if !validate_barcode(&barcode) {
                    return Err(AppError::Validation("Invalid barcode format".to_string()));
                }
                if self.product_repo.find_by_barcode(&barcode).await?.is_some() {
                    return Err(AppError::Conflict("Barcode already exists".to_string()));
                }
                barcode
            }
            None => self.unique_barcode().await?,
        };

        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: request.name.trim().to_string(),
            sku: request.sku.trim().to_string(),
            barcode: Some(barcode),
            unit: request.unit.trim().to_string(),
            category: request.category,
            mrp: request.mrp,
            selling_price: request.selling_price,
            tax_rate: request.tax_rate,
            qty_on_hand: Some(0),
            min_level: request.min_level.unwrap_or(0),
        };
        product.validate()?;

        let product = self.product_repo.insert(product).await?;
        tracing::info!(product_id = %product.id, sku = %product.sku, "Product created");

        Ok(CreateProductResponse {
            success: true,
            product,
        })
    }

    pub async fn update_product(
        &self,
        id: &str,
        request: UpdateProductRequest,
    ) -> Result<Product, AppError> {
        let mut product = self.get_product(id).await?;
        request.apply_to(&mut product);
        product.validate()?;

        let product = self.product_repo.update(product).await?;
        tracing::info!(product_id = %product.id, "Product updated");

        Ok(product)
    }

    pub async fn delete_product(&self, id: &str) -> Result<DeleteProductResponse, AppError> {
        self.product_repo.delete(id).await?;
        tracing::info!(product_id = %id, "Product deleted");

        Ok(DeleteProductResponse {
            success: true,
            message: "Product deleted".to_string(),
        })
    }

    async fn unique_barcode(&self) -> Result<String, AppError> {
        for _ in 0..BARCODE_ATTEMPTS {
            let barcode = generate_barcode();
            if self.product_repo.find_by_barcode(&barcode).await?.is_none() {
                return Ok(barcode);
            }
        }

        Err(AppError::Internal(
            "Failed to generate unique barcode".to_string(),
        ))
    }
}
