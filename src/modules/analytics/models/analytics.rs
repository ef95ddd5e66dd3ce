use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub forecast: Forecast,
    pub customers: Vec<TopCustomer>,
    pub peak_hours: PeakHours,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Model accuracy in percent
    pub accuracy: u8,
    pub data: ForecastSeries,
    pub insights: Vec<String>,
}

/// Seven-day demand series; `actual` is `null` for days not yet reached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSeries {
    pub labels: Vec<String>,
    pub actual: Vec<Option<u64>>,
    pub predicted: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopCustomer {
    pub name: String,
    pub purchases: u32,
    pub total: u64,
    pub badge: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeakHours {
    pub labels: Vec<String>,
    pub data: Vec<u64>,
    pub insights: Vec<PeakPeriod>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeakPeriod {
    pub period: String,
    pub average: u64,
}
