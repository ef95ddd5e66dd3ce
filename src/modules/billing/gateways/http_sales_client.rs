use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::sales_gateway::SalesGateway;
use crate::core::error::{AppError, Result};
use crate::modules::products::models::ProductListResponse;
use crate::modules::products::Product;
use crate::modules::sales::models::{CreateSaleRequest, Invoice, SaleResponse};

/// Default request timeout; checkout is never retried automatically
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Sales API client used by remote billing terminals
pub struct HttpSalesClient {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl HttpSalesClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Turn a non-2xx response into a gateway error carrying the server's message
    async fn error_from(response: reqwest::Response) -> AppError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(envelope) => AppError::Gateway(envelope.error.message),
            Err(_) => AppError::Gateway(format!("Sales API error {}: {}", status, body)),
        }
    }
}

#[async_trait]
impl SalesGateway for HttpSalesClient {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        let url = format!("{}/products", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Gateway(format!("Sales API unreachable: {}", e)))?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }

        let list: ProductListResponse = response
            .json()
            .await
            .map_err(|e| AppError::Gateway(format!("Failed to parse product list: {}", e)))?;

        Ok(list.products)
    }

    async fn submit_sale(&self, request: &CreateSaleRequest) -> Result<Invoice> {
        let url = format!("{}/sales", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::Gateway(format!("Sales API unreachable: {}", e)))?;

        if !response.status().is_success() {
            let err = Self::error_from(response).await;
            tracing::warn!(url = %url, error = %err, "Sale rejected by sales API");
            return Err(err);
        }

        let sale: SaleResponse = response
            .json()
            .await
            .map_err(|e| AppError::Gateway(format!("Failed to parse sale response: {}", e)))?;

        Ok(sale.invoice)
    }

    fn name(&self) -> &str {
        "http"
    }
}
