// Products module (catalog)

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Product, StockStatus};
pub use repositories::{InMemoryProductRepository, ProductRepository, StockChange};
pub use services::ProductService;
