use serde::{Deserialize, Serialize};

use super::invoice::Invoice;

/// How the customer paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum PaymentMode {
    Cash,
    Upi,
    Card,
}

impl Default for PaymentMode {
    fn default() -> Self {
        PaymentMode::Cash
    }
}

impl std::fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMode::Cash => write!(f, "cash"),
            PaymentMode::Upi => write!(f, "upi"),
            PaymentMode::Card => write!(f, "card"),
        }
    }
}

impl std::str::FromStr for PaymentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cash" => Ok(PaymentMode::Cash),
            "upi" => Ok(PaymentMode::Upi),
            "card" => Ok(PaymentMode::Card),
            _ => Err(format!(
                "Invalid payment mode: {}. Expected cash, upi or card",
                s
            )),
        }
    }
}

impl TryFrom<String> for PaymentMode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl PaymentMode {
    /// Label printed on invoices
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMode::Cash => "Cash",
            PaymentMode::Upi => "UPI",
            PaymentMode::Card => "Card",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleItemRequest {
    pub product_id: String,
    pub quantity: u32,
}

/// Body of `POST /sales`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSaleRequest {
    pub items: Vec<SaleItemRequest>,
    #[serde(default, alias = "paymentMethod", alias = "payment_method")]
    pub payment_mode: PaymentMode,
}

impl CreateSaleRequest {
    /// Items with repeated product ids folded into one, in first-seen order
    pub fn merged_items(&self) -> Vec<SaleItemRequest> {
        let mut merged: Vec<SaleItemRequest> = Vec::with_capacity(self.items.len());
        for item in &self.items {
            match merged.iter_mut().find(|m| m.product_id == item.product_id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(item.quantity)
                }
                None => merged.push(item.clone()),
            }
        }
        merged
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleResponse {
    pub success: bool,
    pub invoice: Invoice,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesListResponse {
    pub sales: Vec<Invoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListSalesQuery {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    100
}
