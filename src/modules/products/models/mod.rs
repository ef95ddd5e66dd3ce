mod product;

pub use product::{
    CreateProductRequest, CreateProductResponse, DeleteProductResponse, Product,
    ProductListResponse, StockStatus, UpdateProductRequest, MAX_STOCK,
};
