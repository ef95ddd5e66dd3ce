use crate::modules::analytics::models::{
    AnalyticsResponse, Forecast, ForecastSeries, PeakHours, PeakPeriod, TopCustomer,
};

const FORECAST_DAYS: [&str; 7] = ["Today", "Day 2", "Day 3", "Day 4", "Day 5", "Day 6", "Day 7"];
const PREDICTED: [u64; 7] = [45000, 47000, 49000, 48000, 52000, 58000, 55000];

const PEAK_SLOTS: [&str; 8] = [
    "6-8 AM", "8-10 AM", "10-12 PM", "12-2 PM", "2-4 PM", "4-6 PM", "6-8 PM", "8-10 PM",
];
const PEAK_SALES: [u64; 8] = [3500, 8500, 6000, 7500, 5000, 9000, 15200, 8000];

/// Simulated analytics; there is no forecasting model behind it
#[derive(Debug, Clone, Default)]
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn new() -> Self {
        Self
    }

    pub fn get_analytics(&self) -> AnalyticsResponse {
        let mut actual = vec![None; FORECAST_DAYS.len()];
        actual[0] = Some(PREDICTED[0]);

        AnalyticsResponse {
            forecast: Forecast {
                accuracy: 92,
                data: ForecastSeries {
                    labels: to_strings(&FORECAST_DAYS),
                    actual,
                    predicted: PREDICTED.to_vec(),
                },
                insights: vec![
                    "Expected 18% increase on Saturday (weekend rush)".to_string(),
                    "Stock up 30% more for upcoming festival week".to_string(),
                ],
            },
            customers: vec![
                customer("Ravi Kumar", 42, 12450, "VIP"),
                customer("Priya Sharma", 38, 10200, "Regular"),
                customer("Amit Patel", 35, 9800, "Regular"),
            ],
            peak_hours: PeakHours {
                labels: to_strings(&PEAK_SLOTS),
                data: PEAK_SALES.to_vec(),
                insights: vec![
                    PeakPeriod {
                        period: "Morning: 8-10 AM".to_string(),
                        average: 8500,
                    },
                    PeakPeriod {
                        period: "Evening: 6-8 PM".to_string(),
                        average: 15200,
                    },
                ],
            },
        }
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn customer(name: &str, purchases: u32, total: u64, badge: &str) -> TopCustomer {
    TopCustomer {
        name: name.to_string(),
        purchases,
        total,
        badge: badge.to_string(),
    }
}
