use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub sales: SalesKpi,
    pub products: ProductKpi,
    pub customers: CustomerKpi,
    pub revenue: RevenueKpi,
    pub sales_trend: ChartSeries,
    pub categories: ChartSeries,
    pub insights: Vec<Insight>,
}

/// Takings for the current and previous shop-local day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesKpi {
    #[serde(with = "rust_decimal::serde::float")]
    pub today: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub yesterday: Decimal,
    /// Percent change from yesterday, 0 when yesterday had no sales
    #[serde(with = "rust_decimal::serde::float")]
    pub trend: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductKpi {
    pub total: usize,
    pub low_stock: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerKpi {
    pub active: u32,
    pub new_this_week: u32,
    pub trend: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueKpi {
    #[serde(with = "rust_decimal::serde::float")]
    pub monthly: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub target: Decimal,
    pub trend: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub data: Vec<u64>,
}

impl ChartSeries {
    pub fn new(labels: &[&str], data: &[u64]) -> Self {
        Self {
            labels: labels.iter().map(|l| l.to_string()).collect(),
            data: data.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub message: String,
    pub action: String,
}

impl Insight {
    pub fn new(kind: &str, title: &str, message: impl Into<String>, action: &str) -> Self {
        Self {
            kind: kind.to_string(),
            title: title.to_string(),
            message: message.into(),
            action: action.to_string(),
        }
    }
}
