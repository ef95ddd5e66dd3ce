use async_trait::async_trait;

use crate::core::Result;
use crate::modules::products::Product;
use crate::modules::sales::models::{CreateSaleRequest, Invoice};

/// The two sales API calls a billing terminal depends on
#[async_trait]
pub trait SalesGateway: Send + Sync {
    /// Current catalog (`GET /products`)
    async fn fetch_products(&self) -> Result<Vec<Product>>;

    /// Submit a finished cart (`POST /sales`)
    async fn submit_sale(&self, request: &CreateSaleRequest) -> Result<Invoice>;

    fn name(&self) -> &str;
}
