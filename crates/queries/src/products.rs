//! Product queries: what was ordered, by whom and how often.

use domain::{Customer, Order, Product};
use pipeline::OrderedSet;

use crate::{Result, ShopQueries, chain_of};

impl<'s> ShopQueries<'s> {
    /// Every product ordered by anyone, without duplicates.
    #[tracing::instrument(skip(self))]
    pub fn all_ordered_products(&self) -> OrderedSet<&'s Product> {
        chain_of::<&'s Customer>()
            .flat_map(|c| c.orders())
            .flat_map(|o| o.products())
            .evaluate(self.shop.customers(), self.strategy)
            .to_set()
            .output
    }

    /// Every product `customer` ordered, without duplicates.
    #[tracing::instrument(skip(self, customer), fields(customer = customer.name()))]
    pub fn ordered_products_of<'c>(&self, customer: &'c Customer) -> OrderedSet<&'c Product> {
        chain_of::<&'c Order>()
            .flat_map(|o| o.products())
            .evaluate(customer.orders(), self.strategy)
            .to_set()
            .output
    }

    /// The most expensive product `customer` ordered; the first one on ties.
    #[tracing::instrument(skip(self, customer), fields(customer = customer.name()))]
    pub fn most_expensive_product_by<'c>(&self, customer: &'c Customer) -> Option<&'c Product> {
        chain_of::<&'c Order>()
            .flat_map(|o| o.products())
            .evaluate(customer.orders(), self.strategy)
            .max_by(|p| p.price(), f64::total_cmp)
            .output
    }

    /// The most expensive product among `customer`'s delivered orders.
    #[tracing::instrument(skip(self, customer), fields(customer = customer.name()))]
    pub fn most_expensive_delivered_product<'c>(
        &self,
        customer: &'c Customer,
    ) -> Option<&'c Product> {
        chain_of::<&'c Order>()
            .filter(|o| o.is_delivered())
            .flat_map(|o| o.products())
            .evaluate(customer.orders(), self.strategy)
            .max_by(|p| p.price(), f64::total_cmp)
            .output
    }

    /// How many times `product` appears across all orders, repeats included.
    #[tracing::instrument(skip(self))]
    pub fn number_of_times_ordered(&self, product: &Product) -> usize {
        chain_of::<&'s Customer>()
            .flat_map(|c| c.orders())
            .flat_map(|o| o.products())
            .evaluate(self.shop.customers(), self.strategy)
            .count_where(|p| *p == product)
            .output
    }

    /// Products that every customer has ordered at least once.
    ///
    /// Fails with [`PipelineError::EmptyInput`](pipeline::PipelineError::EmptyInput)
    /// when the shop has no customers.
    #[tracing::instrument(skip(self))]
    pub fn products_ordered_by_all(&self) -> Result<OrderedSet<&'s Product>> {
        let queries = *self;
        let per_customer = chain_of::<&'s Customer>()
            .map(move |c| queries.ordered_products_of(c))
            .evaluate(self.shop.customers(), self.strategy)
            .collect()
            .output;
        Ok(pipeline::intersect_all(per_customer)?)
    }
}
