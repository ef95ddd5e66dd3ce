use rust_decimal::Decimal;

use crate::modules::products::models::Product;

struct SeedProduct {
    id: &'static str,
    name: &'static str,
    sku: &'static str,
    unit: &'static str,
    category: &'static str,
    mrp: i64,
    price: i64,
    stock: u32,
    min_level: u32,
}

#[rustfmt::skip]
const SEED: &[SeedProduct] = &[
    SeedProduct { id: "MAG001", name: "Maggi Noodles 2-Min", sku: "MAG-2MIN-70G", unit: "pcs", category: "Instant Food", mrp: 14, price: 12, stock: 45, min_level: 20 },
    SeedProduct { id: "PAR002", name: "Parle-G Biscuits", sku: "PAR-G-100G", unit: "pack", category: "Biscuits", mrp: 10, price: 10, stock: 8, min_level: 15 },
    SeedProduct { id: "TEA003", name: "Tata Tea Gold", sku: "TATA-GOLD-500G", unit: "pack", category: "Beverages", mrp: 275, price: 250, stock: 32, min_level: 25 },
    SeedProduct { id: "AMU004", name: "Amul Butter 500g", sku: "AMUL-BTR-500G", unit: "pcs", category: "Dairy", mrp: 56, price: 55, stock: 3, min_level: 10 },
    SeedProduct { id: "BRI005", name: "Britannia Bread", sku: "BRIT-BRD-400G", unit: "pcs", category: "Bakery", mrp: 45, price: 40, stock: 20, min_level: 10 },
    SeedProduct { id: "ATT006", name: "Aashirvaad Atta 5kg", sku: "AASH-ATTA-5KG", unit: "bag", category: "Groceries", mrp: 265, price: 245, stock: 15, min_level: 8 },
];

/// Demo catalog loaded at start-up when `SEED_CATALOG` is enabled
pub fn default_catalog() -> Vec<Product> {
    SEED.iter()
        .map(|seed| Product {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            sku: seed.sku.to_string(),
            barcode: Some(format!("BAR-{}", seed.id)),
            unit: seed.unit.to_string(),
            category: Some(seed.category.to_string()),
            mrp: Some(Decimal::from(seed.mrp)),
            selling_price: Decimal::from(seed.price),
            tax_rate: Some(Decimal::new(5, 2)),
            qty_on_hand: Some(seed.stock),
            min_level: seed.min_level,
        })
        .collect()
}
