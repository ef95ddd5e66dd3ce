//! Retail Boss point-of-sale backend
//!
//! An actix-web API for a small shop (catalog, checkout, inventory, dashboard)
//! plus the billing engine a POS terminal embeds to run checkout against it.

pub mod app;
pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use app::AppServices;
pub use modules::billing;
pub use modules::products;
pub use modules::sales;
pub use modules::taxes;
