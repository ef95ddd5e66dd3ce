use uuid::Uuid;

pub const BARCODE_PREFIX: &str = "BAR-";

/// Generate a shop-internal barcode, e.g. `BAR-3F2A9C1D04B7`
pub fn generate_barcode() -> String {
    let raw = Uuid::new_v4().simple().to_string().to_uppercase();
    format!("{}{}", BARCODE_PREFIX, &raw[..12])
}

/// Barcodes are `BAR-` followed by 4-32 ASCII letters or digits
pub fn validate_barcode(barcode: &str) -> bool {
    barcode
        .strip_prefix(BARCODE_PREFIX)
        .map(|body| {
            (4..=32).contains(&body.len()) && body.chars().all(|c| c.is_ascii_alphanumeric())
        })
        .unwrap_or(false)
}
