pub mod barcode;
pub mod catalog_seed;
pub mod product_service;

pub use product_service::ProductService;
