//! Sample shop fixture.

use domain::{City, Customer, Order, Product, Shop};

/// Products sold by the sample shop.
pub mod catalog {
    use domain::Product;

    pub fn compiler() -> Product {
        Product::new("Compiler Pro", 199.0)
    }

    pub fn debugger() -> Product {
        Product::new("Debugger", 149.0)
    }

    pub fn profiler() -> Product {
        Product::new("Profiler", 159.0)
    }

    pub fn memory_profiler() -> Product {
        Product::new("Profiler", 129.0)
    }

    pub fn coverage() -> Product {
        Product::new("Coverage", 99.0)
    }

    pub fn linter() -> Product {
        Product::new("Linter", 49.0)
    }

    pub fn formatter() -> Product {
        Product::new("Formatter", 99.0)
    }

    pub fn ci_server() -> Product {
        Product::new("CI Server", 299.0)
    }

    pub fn tracker() -> Product {
        Product::new("Issue Tracker", 500.0)
    }
}

/// Cities the sample customers live in.
pub mod cities {
    use domain::City;

    pub fn canberra() -> City {
        City::new("Canberra")
    }

    pub fn vancouver() -> City {
        City::new("Vancouver")
    }

    pub fn budapest() -> City {
        City::new("Budapest")
    }

    pub fn ankara() -> City {
        City::new("Ankara")
    }

    pub fn tokyo() -> City {
        City::new("Tokyo")
    }
}

fn customer(name: &str, city: City, orders: Vec<Order>) -> Customer {
    Customer::new(name, city, orders)
}

fn delivered(products: Vec<Product>) -> Order {
    Order::delivered(products)
}

fn pending(products: Vec<Product>) -> Order {
    Order::pending(products)
}

/// Builds the sample shop.
///
/// Seven customers across five cities, with customers who never ordered,
/// undelivered orders, repeated products and two products sharing a name
/// at different prices.
pub fn sample_shop() -> Shop {
    use catalog::*;
    use cities::*;

    Shop::new(
        "sample shop",
        [
            customer(
                "Lucas",
                canberra(),
                vec![
                    delivered(vec![debugger()]),
                    delivered(vec![debugger(), memory_profiler(), profiler()]),
                ],
            ),
            customer("Cooper", canberra(), vec![]),
            customer(
                "Nathan",
                vancouver(),
                vec![delivered(vec![formatter(), linter()])],
            ),
            customer(
                "Reka",
                budapest(),
                vec![
                    pending(vec![compiler()]),
                    pending(vec![compiler()]),
                    delivered(vec![compiler()]),
                ],
            ),
            customer("Bajram", ankara(), vec![pending(vec![debugger()])]),
            customer(
                "Asuka",
                tokyo(),
                vec![delivered(vec![compiler(), ci_server()])],
            ),
            customer(
                "Riku",
                tokyo(),
                vec![
                    delivered(vec![coverage(), coverage()]),
                    pending(vec![tracker()]),
                ],
            ),
        ],
    )
}

/// Looks up a sample customer by name.
pub fn sample_customer<'s>(shop: &'s Shop, name: &str) -> Option<&'s Customer> {
    pipeline::find(shop.customers(), |c| c.name() == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_shop_shape() {
        let shop = sample_shop();
        assert_eq!(shop.customers().len(), 7);
        assert_eq!(shop.name(), "sample shop");
        assert!(sample_customer(&shop, "Cooper").unwrap().orders().is_empty());
        assert!(sample_customer(&shop, "Nobody").is_none());
    }

    #[test]
    fn test_profilers_are_distinct_products() {
        assert_ne!(catalog::profiler(), catalog::memory_profiler());
    }
}
