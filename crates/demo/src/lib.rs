//! Shop report: every query answered under each configured strategy.
//!
//! The report is plain data so it can be printed as JSON. Each strategy's
//! answers are kept apart from its work accounting, which lets the report
//! check that the strategies agree while still showing that the lazy one
//! pulled fewer customers for its city lookup.

pub mod config;
pub mod error;

pub use config::{Config, LogFormat, StrategySelection};
pub use error::{DemoError, Result};

use domain::{City, Customer, Product, Shop};
use engine::{Chain, Strategy, Traversal};
use queries::ShopQueries;
use serde::Serialize;

/// Report for one shop across the configured strategies.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub shop: String,
    pub city: String,
    pub runs: Vec<StrategyRun>,
    pub strategies_agree: bool,
}

/// Answers and work accounting for one strategy.
#[derive(Debug, Clone, Serialize)]
pub struct StrategyRun {
    pub strategy: String,
    pub city_lookup: Work,
    pub answers: Answers,
}

/// Work done by a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Work {
    pub source_pulls: usize,
    pub stage_calls: usize,
}

impl From<Traversal> for Work {
    fn from(traversal: Traversal) -> Self {
        Self {
            source_pulls: traversal.source_pulls,
            stage_calls: traversal.stage_calls,
        }
    }
}

/// Every query answer, rendered as strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answers {
    pub cities: Vec<String>,
    pub customers_from_city: Vec<String>,
    pub all_customers_from_city: bool,
    pub has_customer_from_city: bool,
    pub customers_in_city: usize,
    pub first_customer_from_city: Option<String>,
    pub customer_with_most_orders: Option<String>,
    pub customers_by_order_count: Vec<String>,
    pub customers_by_city: Vec<CityGroup>,
    pub ordered_products: Vec<String>,
    pub products_ordered_by_everyone: Vec<String>,
    pub delivery_backlog: Vec<String>,
    pub customers: Vec<CustomerSummary>,
}

/// Customers living in one city.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityGroup {
    pub city: String,
    pub customers: Vec<String>,
}

/// Per-customer answers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerSummary {
    pub name: String,
    pub money_spent: f64,
    pub most_expensive_product: Option<String>,
    pub most_expensive_delivered_product: Option<String>,
    pub delivered_products: Vec<String>,
}

/// Runs every query over `shop` with each strategy `config` selects.
#[tracing::instrument(skip_all, fields(shop = shop.name(), city = %config.city))]
pub fn build_report(shop: &Shop, config: &Config) -> Result<Report> {
    let runs = config
        .strategies
        .strategies()
        .into_iter()
        .map(|strategy| run_strategy(shop, &config.city, strategy))
        .collect::<Result<Vec<_>>>()?;

    let strategies_agree = runs.windows(2).all(|pair| pair[0].answers == pair[1].answers);
    if strategies_agree {
        tracing::info!(runs = runs.len(), "strategies agree");
    } else {
        tracing::warn!(runs = runs.len(), "strategies disagree");
    }

    Ok(Report {
        shop: shop.name().to_string(),
        city: config.city.to_string(),
        runs,
        strategies_agree,
    })
}

fn run_strategy(shop: &Shop, city: &City, strategy: Strategy) -> Result<StrategyRun> {
    let queries = ShopQueries::new(shop).with_strategy(strategy);

    let lookup = Chain::<&Customer, &Customer>::new()
        .map(|c| c.city())
        .evaluate(shop.customers(), strategy)
        .find(|c| *c == city);
    tracing::info!(%strategy, traversal = %lookup.traversal, "city lookup");

    let answers = Answers {
        cities: render(queries.cities_customers_are_from().iter()),
        customers_from_city: names(queries.customers_from(city)),
        all_customers_from_city: queries.all_customers_are_from(city),
        has_customer_from_city: queries.has_customer_from(city),
        customers_in_city: queries.count_customers_from(city),
        first_customer_from_city: queries.find_customer_from(city).map(name),
        customer_with_most_orders: queries.customer_with_max_orders().map(name),
        customers_by_order_count: names(queries.customers_sorted_by_number_of_orders()),
        customers_by_city: queries
            .group_customers_by_city()
            .into_iter()
            .map(|(city, members)| CityGroup {
                city: city.to_string(),
                customers: names(members),
            })
            .collect(),
        ordered_products: render(queries.all_ordered_products().iter()),
        products_ordered_by_everyone: render(queries.products_ordered_by_all()?.iter()),
        delivery_backlog: names(queries.customers_with_more_undelivered_orders()),
        customers: shop
            .customers()
            .iter()
            .map(|customer| summarize(&queries, customer))
            .collect(),
    };

    Ok(StrategyRun {
        strategy: queries.strategy().to_string(),
        city_lookup: lookup.traversal.into(),
        answers,
    })
}

fn summarize(queries: &ShopQueries<'_>, customer: &Customer) -> CustomerSummary {
    CustomerSummary {
        name: customer.name().to_string(),
        money_spent: queries.money_spent_by(customer),
        most_expensive_product: queries
            .most_expensive_product_by(customer)
            .map(Product::to_string),
        most_expensive_delivered_product: queries
            .most_expensive_delivered_product(customer)
            .map(Product::to_string),
        delivered_products: render(queries.delivered_products_of(customer).iter()),
    }
}

fn name(customer: &Customer) -> String {
    customer.name().to_string()
}

fn names<'c>(customers: impl IntoIterator<Item = &'c Customer>) -> Vec<String> {
    customers.into_iter().map(name).collect()
}

fn render<T: std::fmt::Display>(items: impl Iterator<Item = T>) -> Vec<String> {
    items.map(|item| item.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use queries::sample::sample_shop;

    use super::*;

    #[test]
    fn test_report_covers_both_strategies() {
        let shop = sample_shop();
        let report = build_report(&shop, &Config::default()).unwrap();

        assert_eq!(report.shop, "sample shop");
        assert_eq!(report.city, "Tokyo");
        assert!(report.strategies_agree);
        let strategies: Vec<_> = report.runs.iter().map(|r| r.strategy.as_str()).collect();
        assert_eq!(strategies, vec!["eager", "lazy"]);

        let answers = &report.runs[0].answers;
        assert_eq!(answers.customers_from_city, vec!["Asuka", "Riku"]);
        assert_eq!(answers.first_customer_from_city.as_deref(), Some("Asuka"));
        assert_eq!(answers.customers_by_city.len(), 5);
        assert_eq!(answers.delivery_backlog, vec!["Reka", "Bajram"]);
        assert_eq!(answers.customers.len(), 7);
    }

    #[test]
    fn test_lazy_city_lookup_pulls_fewer_customers() {
        let shop = sample_shop();
        let report = build_report(&shop, &Config::default()).unwrap();

        let eager = report.runs[0].city_lookup;
        let lazy = report.runs[1].city_lookup;
        assert_eq!(eager.source_pulls, 7);
        assert_eq!(lazy.source_pulls, 6);
        assert!(lazy.stage_calls < eager.stage_calls);
    }

    #[test]
    fn test_single_strategy_report() {
        let shop = sample_shop();
        let config = Config {
            strategies: StrategySelection::Only(Strategy::Lazy),
            city: City::new("Canberra"),
            ..Config::default()
        };
        let report = build_report(&shop, &config).unwrap();

        assert_eq!(report.runs.len(), 1);
        assert!(report.strategies_agree);
        let answers = &report.runs[0].answers;
        assert_eq!(answers.customers_in_city, 2);
        assert_eq!(answers.customer_with_most_orders.as_deref(), Some("Reka"));
    }

    #[test]
    fn test_report_serializes_to_json() {
        let shop = sample_shop();
        let report = build_report(&shop, &Config::default()).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["runs"][1]["strategy"], "lazy");
        assert_eq!(json["runs"][0]["answers"]["customers"][0]["money_spent"], 586.0);
        assert_eq!(
            json["runs"][0]["answers"]["customers"][0]["most_expensive_product"],
            "Profiler ($159.00)"
        );
    }
}
