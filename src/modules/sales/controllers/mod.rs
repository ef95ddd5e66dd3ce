pub mod billing_controller;
pub mod sales_controller;

pub use sales_controller::configure;
