// Seed catalog facts and request payload builders

use serde_json::{json, Value};

pub const MAGGI: &str = "MAG001";
pub const PARLE_G: &str = "PAR002";
pub const TATA_TEA: &str = "TEA003";
pub const AMUL_BUTTER: &str = "AMU004";
pub const BREAD: &str = "BRI005";
pub const ATTA: &str = "ATT006";

/// `POST /sales` body from `(product_id, quantity)` pairs
pub fn sale_payload(items: &[(&str, u32)], payment_mode: &str) -> Value {
    json!({
        "items": items
            .iter()
            .map(|(id, qty)| json!({ "product_id": id, "quantity": qty }))
            .collect::<Vec<_>>(),
        "payment_mode": payment_mode,
    })
}

/// `POST /products` body with a unique SKU
pub fn product_payload(sku: &str) -> Value {
    json!({
        "name": "Fortune Sunflower Oil 1L",
        "sku": sku,
        "unit": "bottle",
        "selling_price": 150.0,
        "category": "Groceries",
        "mrp": 165.0,
        "min_level": 5,
    })
}
