mod cart;
mod catalog;

pub use cart::{Cart, CartLine};
pub use catalog::ProductCatalog;
