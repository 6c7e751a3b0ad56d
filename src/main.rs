use std::sync::Arc;
use std::time::Duration;

use lastmatch::{
    AppError, ChampionCache, Config, MatchEnricher, logging,
    riot::{RequestMetrics, RiotClient},
    server::{self, AppState},
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    logging::init();

    info!("🐙 Starting...");

    let config = Config::from_env()?;

    let cache = ChampionCache::load(
        &config.champion_cache_path,
        Duration::from_secs(config.champion_cache_ttl_secs),
    )
    .await;
    info!(
        "📜 Champion cache ready with {} entries ({:?})",
        cache.len().await,
        cache.path()
    );

    let metrics = RequestMetrics::new();
    tokio::spawn(metrics.clone().log_loop());

    let api = RiotClient::from_config(&config, metrics);
    let enricher = MatchEnricher::new(Arc::new(api), Arc::new(cache))
        .with_concurrency(config.participant_concurrency);

    let state = Arc::new(AppState::new(enricher));
    let app = server::create_router(state, &config.static_dir);

    server::start_server(&config.bind_addr(), app).await
}
