//! Shop report entry point.

use demo::{Config, DemoError, LogFormat};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs the tracing subscriber. Logs go to stderr so stdout stays JSON.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let (pretty, json) = match config.log_format {
        LogFormat::Pretty => (
            Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
            None,
        ),
        LogFormat::Json => (
            None,
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            ),
        ),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(pretty)
        .with(json)
        .init();
}

fn main() -> Result<(), DemoError> {
    // 1. Load configuration
    let config = Config::from_env()?;

    // 2. Initialize tracing
    init_tracing(&config);

    // 3. Run every query over the sample shop
    let shop = queries::sample::sample_shop();
    tracing::info!(
        shop = shop.name(),
        customers = shop.customers().len(),
        "building report"
    );
    let report = demo::build_report(&shop, &config)?;

    // 4. Print the report
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
