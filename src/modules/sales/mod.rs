// Sales module (checkout submissions, invoices, printable bills)

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{CreateSaleRequest, Invoice, InvoiceLine, PaymentMode, SaleItemRequest};
pub use repositories::{InMemorySaleRepository, SaleRepository};
pub use services::SalesService;
