use std::sync::Arc;

use async_trait::async_trait;

use super::sales_gateway::SalesGateway;
use crate::core::Result;
use crate::modules::products::{Product, ProductService};
use crate::modules::sales::models::{CreateSaleRequest, Invoice};
use crate::modules::sales::SalesService;

/// Gateway that calls the sales services in the same process
pub struct LocalSalesGateway {
    products: Arc<ProductService>,
    sales: Arc<SalesService>,
}

impl LocalSalesGateway {
    pub fn new(products: Arc<ProductService>, sales: Arc<SalesService>) -> Self {
        Self { products, sales }
    }
}

#[async_trait]
impl SalesGateway for LocalSalesGateway {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        Ok(self.products.list_products().await?.products)
    }

    async fn submit_sale(&self, request: &CreateSaleRequest) -> Result<Invoice> {
        self.sales.create_sale(request.clone()).await
    }

    fn name(&self) -> &str {
        "local"
    }
}
