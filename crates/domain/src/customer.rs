//! Customer value object.

use serde::{Deserialize, Serialize};

use crate::{City, Order};

/// A shop customer.
///
/// Two customers with identical name, city and orders are equal and hash
/// alike, so they are interchangeable as map keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Customer {
    name: String,
    city: City,
    orders: Vec<Order>,
}

impl Customer {
    /// Creates a customer.
    pub fn new(
        name: impl Into<String>,
        city: impl Into<City>,
        orders: impl IntoIterator<Item = Order>,
    ) -> Self {
        Self {
            name: name.into(),
            city: city.into(),
            orders: orders.into_iter().collect(),
        }
    }

    /// Returns the customer name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the city the customer lives in.
    pub fn city(&self) -> &City {
        &self.city
    }

    /// Returns the customer's orders, oldest first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }
}

impl std::fmt::Display for Customer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} from {}", self.name, self.city)
    }
}
