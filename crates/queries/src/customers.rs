//! Customer queries: where customers live and how they are indexed.

use domain::{City, Customer};
use pipeline::{OrderedMap, OrderedSet};

use crate::{ShopQueries, chain_of};

impl<'s> ShopQueries<'s> {
    /// Distinct cities customers live in, in order of first appearance.
    #[tracing::instrument(skip(self))]
    pub fn cities_customers_are_from(&self) -> OrderedSet<&'s City> {
        chain_of::<&'s Customer>()
            .map(|c| c.city())
            .evaluate(self.shop.customers(), self.strategy)
            .to_set()
            .output
    }

    /// Customers living in `city`, in shop order.
    #[tracing::instrument(skip(self))]
    pub fn customers_from(&self, city: &City) -> Vec<&'s Customer> {
        chain_of::<&'s Customer>()
            .filter(move |c| c.city() == city)
            .evaluate(self.shop.customers(), self.strategy)
            .collect()
            .output
    }

    /// True if every customer lives in `city`. True for a shop without customers.
    #[tracing::instrument(skip(self))]
    pub fn all_customers_are_from(&self, city: &City) -> bool {
        chain_of::<&'s Customer>()
            .evaluate(self.shop.customers(), self.strategy)
            .all(|c| c.city() == city)
            .output
    }

    /// True if at least one customer lives in `city`.
    #[tracing::instrument(skip(self))]
    pub fn has_customer_from(&self, city: &City) -> bool {
        chain_of::<&'s Customer>()
            .evaluate(self.shop.customers(), self.strategy)
            .any(|c| c.city() == city)
            .output
    }

    /// Number of customers living in `city`.
    #[tracing::instrument(skip(self))]
    pub fn count_customers_from(&self, city: &City) -> usize {
        chain_of::<&'s Customer>()
            .evaluate(self.shop.customers(), self.strategy)
            .count_where(|c| c.city() == city)
            .output
    }

    /// The first customer living in `city`, if any.
    #[tracing::instrument(skip(self))]
    pub fn find_customer_from(&self, city: &City) -> Option<&'s Customer> {
        chain_of::<&'s Customer>()
            .evaluate(self.shop.customers(), self.strategy)
            .find(|c| c.city() == city)
            .output
    }

    /// Customers ordered by how many orders they placed, fewest first.
    /// Customers with equal counts keep shop order.
    #[tracing::instrument(skip(self))]
    pub fn customers_sorted_by_number_of_orders(&self) -> Vec<&'s Customer> {
        chain_of::<&'s Customer>()
            .evaluate(self.shop.customers(), self.strategy)
            .sorted_by(|a, b| a.orders().len().cmp(&b.orders().len()))
            .output
    }

    /// The customer with the most orders; the earliest one on ties.
    #[tracing::instrument(skip(self))]
    pub fn customer_with_max_orders(&self) -> Option<&'s Customer> {
        chain_of::<&'s Customer>()
            .evaluate(self.shop.customers(), self.strategy)
            .max_by(|c| c.orders().len(), |a, b| a.cmp(b))
            .output
    }

    /// Customers grouped by city; cities in order of first appearance.
    #[tracing::instrument(skip(self))]
    pub fn group_customers_by_city(&self) -> OrderedMap<&'s City, Vec<&'s Customer>> {
        chain_of::<&'s Customer>()
            .evaluate(self.shop.customers(), self.strategy)
            .group_by(|c| c.city())
            .output
    }

    /// Customers indexed by name. Customers sharing a name collapse to the
    /// last one in shop order.
    #[tracing::instrument(skip(self))]
    pub fn customers_by_name(&self) -> OrderedMap<&'s str, &'s Customer> {
        chain_of::<&'s Customer>()
            .evaluate(self.shop.customers(), self.strategy)
            .associate_by(|c| c.name())
            .output
    }

    /// Each distinct customer mapped to their city.
    #[tracing::instrument(skip(self))]
    pub fn customer_cities(&self) -> OrderedMap<&'s Customer, &'s City> {
        chain_of::<&'s Customer>()
            .evaluate(self.shop.customers(), self.strategy)
            .associate_with(|c| c.city())
            .output
    }

    /// Customer names mapped to cities; the last customer per name wins.
    #[tracing::instrument(skip(self))]
    pub fn city_by_customer_name(&self) -> OrderedMap<&'s str, &'s City> {
        chain_of::<&'s Customer>()
            .evaluate(self.shop.customers(), self.strategy)
            .associate(|c| (c.name(), c.city()))
            .output
    }
}
