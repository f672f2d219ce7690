//! Shop value object.

use serde::{Deserialize, Serialize};

use crate::Customer;

/// A shop and its customers, in registration order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shop {
    name: String,
    customers: Vec<Customer>,
}

impl Shop {
    /// Creates a shop.
    pub fn new(name: impl Into<String>, customers: impl IntoIterator<Item = Customer>) -> Self {
        Self {
            name: name.into(),
            customers: customers.into_iter().collect(),
        }
    }

    /// Returns the shop name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the customers.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Order, Product};

    #[test]
    fn test_shop_roundtrips_through_json() {
        let shop = Shop::new(
            "test shop",
            [Customer::new(
                "Bajram",
                "Ankara",
                [Order::pending([Product::new("ReSharper", 149.0)])],
            )],
        );
        let json = serde_json::to_string(&shop).unwrap();
        let deserialized: Shop = serde_json::from_str(&json).unwrap();
        assert_eq!(shop, deserialized);
        assert_eq!(deserialized.customers()[0].orders().len(), 1);
    }
}
