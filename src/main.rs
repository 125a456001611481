use anyhow::Result;
use storefront_api::config::Config;
use storefront_api::server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    init_tracing(&config);

    server::run(config).await
}

/// Initializes the global tracing subscriber from config.
///
/// `LOG_FORMAT=json` switches to structured JSON output; anything else uses
/// the human-readable text format.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
