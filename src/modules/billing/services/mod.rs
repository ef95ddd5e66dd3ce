pub mod billing_session;

pub use billing_session::BillingSession;
