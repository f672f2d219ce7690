//! Integration tests for shop queries.
//!
//! These tests run the queries end to end over small shops and check that
//! both evaluation strategies agree on every answer.

use domain::{City, Customer, Order, Product, Shop};
use engine::Strategy;
use queries::sample::{cities, sample_customer, sample_shop};
use queries::{QueryError, ShopQueries};

/// Alice in X with one delivered order, Bob in Y with one pending order.
fn two_customer_shop() -> Shop {
    Shop::new(
        "two customers",
        [
            Customer::new(
                "Alice",
                "X",
                [Order::delivered([
                    Product::new("P1", 5.0),
                    Product::new("P2", 10.0),
                ])],
            ),
            Customer::new("Bob", "Y", [Order::pending([Product::new("P3", 20.0)])]),
        ],
    )
}

mod end_to_end {
    use super::*;

    #[test]
    fn money_spent_by_alice() {
        let shop = two_customer_shop();
        let alice = sample_customer(&shop, "Alice").unwrap();
        for strategy in Strategy::ALL {
            let queries = ShopQueries::new(&shop).with_strategy(strategy);
            assert_eq!(queries.money_spent_by(alice), 15.0);
        }
    }

    #[test]
    fn customers_grouped_by_city_in_key_order() {
        let shop = two_customer_shop();
        for strategy in Strategy::ALL {
            let groups = ShopQueries::new(&shop)
                .with_strategy(strategy)
                .group_customers_by_city();

            let layout: Vec<(&str, Vec<&str>)> = groups
                .iter()
                .map(|(city, members)| (city.name(), members.iter().map(|c| c.name()).collect()))
                .collect();
            assert_eq!(layout, vec![("X", vec!["Alice"]), ("Y", vec!["Bob"])]);
        }
    }

    #[test]
    fn most_expensive_delivered_product_of_alice() {
        let shop = two_customer_shop();
        let alice = sample_customer(&shop, "Alice").unwrap();
        for strategy in Strategy::ALL {
            let queries = ShopQueries::new(&shop).with_strategy(strategy);
            let product = queries.most_expensive_delivered_product(alice).unwrap();
            assert_eq!(product.name(), "P2");
            assert_eq!(product.price(), 10.0);
        }
    }

    #[test]
    fn bob_has_nothing_delivered() {
        let shop = two_customer_shop();
        let bob = sample_customer(&shop, "Bob").unwrap();
        let queries = ShopQueries::new(&shop);
        assert_eq!(queries.most_expensive_delivered_product(bob), None);
        assert_eq!(queries.money_spent_by(bob), 20.0);
        let backlog: Vec<_> = queries
            .customers_with_more_undelivered_orders()
            .iter()
            .map(|c| c.name())
            .collect();
        assert_eq!(backlog, vec!["Bob"]);
    }
}

mod strategy_agreement {
    use super::*;

    #[test]
    fn every_query_agrees_on_the_sample_shop() {
        let shop = sample_shop();
        let eager = ShopQueries::new(&shop).with_strategy(Strategy::Eager);
        let lazy = ShopQueries::new(&shop).with_strategy(Strategy::Lazy);
        let tokyo = cities::tokyo();

        assert_eq!(eager.cities_customers_are_from(), lazy.cities_customers_are_from());
        assert_eq!(eager.customers_from(&tokyo), lazy.customers_from(&tokyo));
        assert_eq!(
            eager.all_customers_are_from(&tokyo),
            lazy.all_customers_are_from(&tokyo)
        );
        assert_eq!(eager.has_customer_from(&tokyo), lazy.has_customer_from(&tokyo));
        assert_eq!(
            eager.count_customers_from(&tokyo),
            lazy.count_customers_from(&tokyo)
        );
        assert_eq!(
            eager.find_customer_from(&tokyo),
            lazy.find_customer_from(&tokyo)
        );
        assert_eq!(eager.all_ordered_products(), lazy.all_ordered_products());
        assert_eq!(
            eager.customer_with_max_orders(),
            lazy.customer_with_max_orders()
        );
        assert_eq!(
            eager.customers_sorted_by_number_of_orders(),
            lazy.customers_sorted_by_number_of_orders()
        );
        assert_eq!(
            eager.group_customers_by_city(),
            lazy.group_customers_by_city()
        );
        assert_eq!(
            eager.customers_with_more_undelivered_orders(),
            lazy.customers_with_more_undelivered_orders()
        );
        assert_eq!(eager.customers_by_name(), lazy.customers_by_name());
        assert_eq!(eager.customer_cities(), lazy.customer_cities());
        assert_eq!(eager.city_by_customer_name(), lazy.city_by_customer_name());
        assert_eq!(
            eager.products_ordered_by_all(),
            lazy.products_ordered_by_all()
        );

        for customer in shop.customers() {
            assert_eq!(
                eager.money_spent_by(customer),
                lazy.money_spent_by(customer)
            );
            assert_eq!(
                eager.most_expensive_product_by(customer),
                lazy.most_expensive_product_by(customer)
            );
            assert_eq!(
                eager.most_expensive_delivered_product(customer),
                lazy.most_expensive_delivered_product(customer)
            );
            assert_eq!(
                eager.delivered_products_of(customer),
                lazy.delivered_products_of(customer)
            );
        }
    }
}

mod edge_cases {
    use super::*;

    #[test]
    fn empty_shop() {
        let shop = Shop::new("empty", []);
        for strategy in Strategy::ALL {
            let queries = ShopQueries::new(&shop).with_strategy(strategy);
            assert!(queries.cities_customers_are_from().is_empty());
            assert!(queries.all_ordered_products().is_empty());
            assert_eq!(queries.count_customers_from(&City::new("X")), 0);
            assert!(matches!(
                queries.products_ordered_by_all(),
                Err(QueryError::Pipeline(_))
            ));
        }
    }

    #[test]
    fn same_name_different_cities() {
        let shop = Shop::new(
            "namesakes",
            [
                Customer::new("Kim", "Seoul", []),
                Customer::new("Lee", "Busan", []),
                Customer::new("Kim", "Daegu", []),
            ],
        );
        let queries = ShopQueries::new(&shop);

        let by_name = queries.city_by_customer_name();
        let keys: Vec<_> = by_name.keys().copied().collect();
        assert_eq!(keys, vec!["Kim", "Lee"]);
        assert_eq!(by_name.get(&"Kim").map(|c| c.name()), Some("Daegu"));
        assert_eq!(queries.customer_cities().len(), 3);
    }
}
