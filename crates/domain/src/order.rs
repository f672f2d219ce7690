//! Order value object.

use serde::{Deserialize, Serialize};

use crate::Product;

/// A customer order: the products bought, in order, and whether it arrived.
///
/// The same product may appear more than once.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Order {
    products: Vec<Product>,
    is_delivered: bool,
}

impl Order {
    /// Creates an order.
    pub fn new(products: impl IntoIterator<Item = Product>, is_delivered: bool) -> Self {
        Self {
            products: products.into_iter().collect(),
            is_delivered,
        }
    }

    /// Creates a delivered order.
    pub fn delivered(products: impl IntoIterator<Item = Product>) -> Self {
        Self::new(products, true)
    }

    /// Creates an order that has not been delivered yet.
    pub fn pending(products: impl IntoIterator<Item = Product>) -> Self {
        Self::new(products, false)
    }

    /// Returns the ordered products.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Returns true if the order was delivered.
    pub fn is_delivered(&self) -> bool {
        self.is_delivered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_keeps_duplicates_in_order() {
        let php = Product::new("PhpStorm", 99.0);
        let idea = Product::new("IntelliJ IDEA Ultimate", 199.0);
        let order = Order::delivered([php.clone(), idea.clone(), php.clone()]);
        assert_eq!(order.products(), &[php.clone(), idea, php]);
        assert!(order.is_delivered());
    }

    #[test]
    fn test_order_equality_includes_delivery_flag() {
        let product = Product::new("WebStorm", 49.0);
        assert_eq!(
            Order::pending([product.clone()]),
            Order::new([product.clone()], false)
        );
        assert_ne!(Order::pending([product.clone()]), Order::delivered([product]));
    }

    #[test]
    fn test_order_equality_is_order_sensitive() {
        let a = Product::new("A", 1.0);
        let b = Product::new("B", 2.0);
        assert_ne!(
            Order::delivered([a.clone(), b.clone()]),
            Order::delivered([b, a])
        );
    }
}
