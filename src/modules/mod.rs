pub mod analytics;
pub mod billing;
pub mod dashboard;
pub mod health;
pub mod inventory;
pub mod notifications;
pub mod products;
pub mod sales;
pub mod taxes;
pub mod voice;
