// Dashboard module (shop KPIs)

pub mod controllers;
pub mod models;
pub mod services;

pub use models::DashboardResponse;
pub use services::DashboardService;
