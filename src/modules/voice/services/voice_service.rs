// Keyword matching over English and Hinglish commands ("kitna stock hai",
// "aaj ki sales batao"). Stock questions are answered from the live catalog;
// the other intents return canned responses.

use std::sync::Arc;

use serde_json::json;

use crate::core::error::AppError;
use crate::modules::products::repositories::ProductRepository;
use crate::modules::products::{Product, StockStatus};
use crate::modules::voice::models::{VoiceAction, VoiceCommand, VoiceResponse};

const DEFAULT_PRODUCT: &str = "MAG001";

pub struct VoiceService {
    product_repo: Arc<dyn ProductRepository>,
}

impl VoiceService {
    pub fn new(product_repo: Arc<dyn ProductRepository>) -> Self {
        Self { product_repo }
    }

    pub async fn process(&self, command: VoiceCommand) -> Result<VoiceResponse, AppError> {
        let text = command.command.to_lowercase();
        let has = |words: &[&str]| words.iter().any(|w| text.contains(w));

        let response = if has(&["stock", "kitna"]) {
            self.stock_answer(&text).await?
        } else if has(&["sales", "batao"]) {
            answer(
                VoiceAction::SalesQuery,
                "Today's total sales: ₹45,280. Up 12.5% from yesterday.",
                json!({ "today": 45280, "trend": 12.5 }),
            )
        } else if has(&["udhar", "credit"]) {
            answer(
                VoiceAction::CreditAdd,
                "Credit of ₹200 added to Ravi Kumar's account. Total due: ₹1,200.",
                json!({ "customer": "Ravi Kumar", "amount": 200, "totalDue": 1200 }),
            )
        } else if has(&["bill", "banao"]) {
            answer(
                VoiceAction::BillCreate,
                "Bill created for ₹500. Ready to print.",
                json!({ "amount": 500 }),
            )
        } else {
            VoiceResponse {
                success: true,
                message: "Command processed".to_string(),
                action: None,
                data: None,
            }
        };

        tracing::debug!(
            language = %command.language,
            action = ?response.action,
            "Voice command processed"
        );
        Ok(response)
    }

    async fn stock_answer(&self, text: &str) -> Result<VoiceResponse, AppError> {
        let products = self.product_repo.list().await?;
        let product = products
            .iter()
            .find(|p| mentions(text, p))
            .or_else(|| products.iter().find(|p| p.id == DEFAULT_PRODUCT))
            .or_else(|| products.first());

        let Some(product) = product else {
            return Ok(VoiceResponse {
                success: false,
                message: "No products in the catalog yet.".to_string(),
                action: Some(VoiceAction::StockQuery),
                data: None,
            });
        };

        let message = match product.qty_on_hand {
            Some(stock) => format!(
                "{}: {} units in stock. {}.",
                product.name,
                stock,
                level_phrase(product.stock_status())
            ),
            None => format!("{}: stock is not tracked.", product.name),
        };

        Ok(answer(
            VoiceAction::StockQuery,
            message,
            json!({ "product": product.name, "stock": product.qty_on_hand }),
        ))
    }
}

/// Whether the command names the product by the first word of its name
fn mentions(text: &str, product: &Product) -> bool {
    product
        .name
        .split_whitespace()
        .next()
        .map(|word| text.contains(&word.to_lowercase()))
        .unwrap_or(false)
}

fn level_phrase(status: StockStatus) -> &'static str {
    match status {
        StockStatus::Good => "Good stock level",
        StockStatus::Low => "Low stock, reorder soon",
        StockStatus::Critical => "Critical stock level, reorder now",
    }
}

fn answer(action: VoiceAction, message: impl Into<String>, data: serde_json::Value) -> VoiceResponse {
    VoiceResponse {
        success: true,
        message: message.into(),
        action: Some(action),
        data: Some(data),
    }
}
