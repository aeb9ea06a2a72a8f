use anyhow::Context as _;
use config::Config;
use lolxd_aggregation::MatchAggregator;
use lolxd_api::{ChampionGgClient, JsonClient, RiotClient};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod handler;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine, everything can come from the environment
    dotenvy::dotenv().ok();
    setup_tracing_subscriber();

    info!("Loading configuration");
    let config = Config::load(std::env::args().nth(1)).await?;

    info!("Setting up API clients");
    let http = JsonClient::new(Duration::from_secs(config.request_timeout_secs))?;
    let riot = RiotClient::new(config.riot, http.clone()).context("Failed to set up Riot client")?;
    let champion_gg = ChampionGgClient::new(config.champion_gg, http)
        .context("Failed to set up Champion.gg client")?;
    let aggregator = Arc::new(MatchAggregator::new(Arc::new(riot), Arc::new(champion_gg)));

    let listener = TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address))?;
    info!("Listening on {}", config.bind_address);
    axum::serve(listener, handler::router(aggregator))
        .await
        .context("Server exited unexpectedly")?;

    Ok(())
}

fn setup_tracing_subscriber() {
    let layer = fmt::layer()
        .pretty()
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_thread_names(true)
        .with_thread_ids(false)
        .with_target(false);
    tracing_subscriber::registry()
        .with(layer)
        .with(EnvFilter::from_default_env())
        .init();
}
