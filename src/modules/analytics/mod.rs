// Analytics module (forecast, top customers, peak hours)

pub mod controllers;
pub mod models;
pub mod services;

pub use models::AnalyticsResponse;
pub use services::AnalyticsService;
