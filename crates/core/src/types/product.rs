//! Catalog product record.

use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// A product as supplied by the catalog.
///
/// The cart treats this record as opaque, already-validated input: it never
/// mutates a product and never revalidates name, price, or category. The
/// only field it interprets is [`Product::id`], which is the line identity
/// key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub category: String,
    /// URL of the cover image.
    pub image: String,
    pub description: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::CurrencyCode;

    #[test]
    fn test_product_serde_round_trip() {
        let product = Product {
            id: ProductId::new("game-hades"),
            name: "Hades".to_owned(),
            price: Price::from_cents(2499, CurrencyCode::USD),
            category: "Indie".to_owned(),
            image: "https://example.com/hades.jpg".to_owned(),
            description: "A fast-paced roguelike.".to_owned(),
        };

        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }
}
