use crate::core::AppError;

/// Errors raised by the cart and checkout flow
#[derive(thiserror::Error, Debug)]
pub enum BillingError {
    #[error("Cart is empty")]
    EmptyCart,

    #[error("Insufficient stock for {product}. Available: {available}, Requested: {requested}")]
    InsufficientStock {
        product: String,
        available: u32,
        requested: u32,
    },

    #[error("Quantity must be at least 1")]
    InvalidQuantity,

    #[error("Product {0} is not in the cart")]
    NotInCart(String),

    #[error("Bill amount is too large")]
    AmountTooLarge,

    #[error("Product {0} is not in the catalog")]
    UnknownProduct(String),

    /// A checkout from this session is still pending
    #[error("Checkout already in progress")]
    CheckoutInProgress,

    /// The sales API rejected or failed the request
    #[error("Checkout failed: {0}")]
    Submission(#[from] AppError),
}
