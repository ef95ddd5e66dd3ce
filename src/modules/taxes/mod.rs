// Taxes module

pub mod models;
pub mod services;

pub use models::{BillTotals, TaxMode, TaxPolicy, TaxableLine};
pub use services::TaxCalculator;
