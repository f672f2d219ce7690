//! Spending and delivery queries.

use domain::{Customer, Order, Product};
use pipeline::OrderedSet;

use crate::{ShopQueries, chain_of};

impl<'s> ShopQueries<'s> {
    /// Total price of every product `customer` ordered, delivered or not.
    ///
    /// Prices are added left to right in order of appearance.
    #[tracing::instrument(skip(self, customer), fields(customer = customer.name()))]
    pub fn money_spent_by(&self, customer: &Customer) -> f64 {
        chain_of::<&Order>()
            .flat_map(|o| o.products())
            .evaluate(customer.orders(), self.strategy)
            .sum_of(|p| p.price())
            .output
    }

    /// Products from `customer`'s delivered orders, without duplicates.
    #[tracing::instrument(skip(self, customer), fields(customer = customer.name()))]
    pub fn delivered_products_of<'c>(&self, customer: &'c Customer) -> OrderedSet<&'c Product> {
        chain_of::<&'c Order>()
            .filter(|o| o.is_delivered())
            .flat_map(|o| o.products())
            .evaluate(customer.orders(), self.strategy)
            .to_set()
            .output
    }

    /// Customers with more undelivered than delivered orders.
    #[tracing::instrument(skip(self))]
    pub fn customers_with_more_undelivered_orders(&self) -> OrderedSet<&'s Customer> {
        chain_of::<&'s Customer>()
            .filter(|c| {
                let (delivered, pending) = pipeline::partition(c.orders(), |o| o.is_delivered());
                pending.len() > delivered.len()
            })
            .evaluate(self.shop.customers(), self.strategy)
            .to_set()
            .output
    }
}
