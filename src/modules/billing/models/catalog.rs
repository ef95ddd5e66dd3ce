use crate::modules::products::Product;

/// Products a billing terminal can sell, as loaded from the sales API
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn find(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    /// Look up a scanned barcode
    pub fn find_by_barcode(&self, barcode: &str) -> Option<&Product> {
        self.products
            .iter()
            .find(|p| p.barcode.as_deref() == Some(barcode))
    }

    /// Reflect units sold locally until the catalog is reloaded
    pub fn deduct(&mut self, product_id: &str, quantity: u32) {
        if let Some(stock) = self
            .products
            .iter_mut()
            .find(|p| p.id == product_id)
            .and_then(|p| p.qty_on_hand.as_mut())
        {
            *stock = stock.saturating_sub(quantity);
        }
    }

    /// Case-insensitive name search; an empty term matches everything
    pub fn search(&self, term: &str) -> Vec<&Product> {
        let term = term.trim().to_lowercase();
        self.products
            .iter()
            .filter(|p| term.is_empty() || p.name.to_lowercase().contains(&term))
            .collect()
    }
}
