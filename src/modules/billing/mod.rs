// Point-of-sale billing engine.
//
// A `BillingSession` owns one terminal's cart and drives checkout against the
// sales API through a `SalesGateway`, either in-process or over HTTP.

pub mod error;
pub mod gateways;
pub mod models;
pub mod services;

pub use error::BillingError;
pub use gateways::{HttpSalesClient, LocalSalesGateway, SalesGateway};
pub use models::{Cart, CartLine, ProductCatalog};
pub use services::BillingSession;
