//! Product value object.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::{DomainError, Result};

/// A product that can be ordered.
///
/// Equality and hashing are field-wise over `(name, price)`. Prices are
/// stored with `-0.0` normalized to `0.0` and compared by bit pattern, so
/// `Eq`, `Hash` and price ordering all agree and products work as map and
/// set keys. Deserialization goes through [`Product::try_new`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord")]
pub struct Product {
    name: String,
    price: f64,
}

/// Unvalidated wire form of a [`Product`].
#[derive(Deserialize)]
struct ProductRecord {
    name: String,
    price: f64,
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(record: ProductRecord) -> Result<Self> {
        Product::try_new(record.name, record.price)
    }
}

impl Product {
    /// Creates a product from an already valid name and price.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price: normalize_zero(price),
        }
    }

    /// Creates a product, rejecting negative or non-finite prices.
    pub fn try_new(name: impl Into<String>, price: f64) -> Result<Self> {
        let name = name.into();
        if !price.is_finite() || price < 0.0 {
            return Err(DomainError::InvalidPrice { name, price });
        }
        Ok(Self {
            name,
            price: normalize_zero(price),
        })
    }

    /// Returns the product name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price.
    pub fn price(&self) -> f64 {
        self.price
    }
}

/// Maps `-0.0` to `0.0`; every other value is unchanged.
fn normalize_zero(price: f64) -> f64 {
    price + 0.0
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.price.to_bits() == other.price.to_bits()
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.price.to_bits().hash(state);
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (${:.2})", self.name, self.price)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_product_equality_is_structural() {
        assert_eq!(Product::new("ReSharper", 149.0), Product::new("ReSharper", 149.0));
        assert_ne!(Product::new("ReSharper", 149.0), Product::new("ReSharper", 99.0));
        assert_ne!(Product::new("ReSharper", 149.0), Product::new("DotTrace", 149.0));
    }

    #[test]
    fn test_equal_products_collapse_in_a_set() {
        let set: HashSet<Product> = [
            Product::new("PyCharm", 99.0),
            Product::new("PyCharm", 99.0),
            Product::new("WebStorm", 49.0),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_signed_zero_prices_are_equal_and_hash_alike() {
        let set: HashSet<Product> = [Product::new("Free", 0.0), Product::new("Free", -0.0)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_negative_zero_price_is_stored_as_zero() {
        let product = Product::try_new("Free", -0.0).unwrap();
        assert!(product.price().is_sign_positive());
        assert_eq!(
            product.price().total_cmp(&Product::new("Gratis", 0.0).price()),
            std::cmp::Ordering::Equal
        );
    }

    #[test]
    fn test_try_new_validates_price() {
        assert!(Product::try_new("Widget", 10.0).is_ok());
        assert!(matches!(
            Product::try_new("Widget", -1.0),
            Err(DomainError::InvalidPrice { .. })
        ));
        assert!(Product::try_new("Widget", f64::NAN).is_err());
        assert!(Product::try_new("Widget", f64::INFINITY).is_err());
    }

    #[test]
    fn test_product_display() {
        assert_eq!(Product::new("YouTrack", 500.0).to_string(), "YouTrack ($500.00)");
    }

    #[test]
    fn test_product_serialization() {
        let product = Product::new("TeamCity", 299.0);
        let json = serde_json::to_string(&product).unwrap();
        let deserialized: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(product, deserialized);
    }

    #[test]
    fn test_deserialization_validates_price() {
        let negative = serde_json::from_str::<Product>(r#"{"name":"Widget","price":-5.0}"#);
        assert!(negative.is_err());

        let free: Product = serde_json::from_str(r#"{"name":"Free","price":-0.0}"#).unwrap();
        assert!(free.price().is_sign_positive());
    }
}
