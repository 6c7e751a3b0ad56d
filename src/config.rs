use std::env;
use std::path::PathBuf;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub riot_api_key: String,
    pub riot_api_base_url: String,
    pub host: String,
    pub port: u16,
    pub champion_cache_path: PathBuf,
    pub champion_cache_ttl_secs: u64,
    pub participant_concurrency: usize,
    pub static_dir: PathBuf,
}

impl Config {
    pub const DEFAULT_RIOT_API_BASE_URL: &'static str = "https://{platform}.api.riotgames.com";

    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(var: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        const DEFAULT_HOST: &str = "0.0.0.0";
        const DEFAULT_PORT: u16 = 4555;
        const DEFAULT_CHAMPION_CACHE_PATH: &str = "cache/champions.json";
        const DEFAULT_CHAMPION_CACHE_TTL_SECS: u64 = 604_800;
        const DEFAULT_PARTICIPANT_CONCURRENCY: usize = 10;
        const DEFAULT_STATIC_DIR: &str = "static";

        // `API_KEY` is the name older deployments use.
        let riot_api_key = ["RIOT_API_KEY", "API_KEY"]
            .into_iter()
            .find_map(|key| var(key).filter(|v| !v.is_empty()))
            .ok_or_else(|| AppError::Config("RIOT_API_KEY must be set".into()))?;

        let riot_api_base_url = var("RIOT_API_BASE_URL")
            .unwrap_or_else(|| Self::DEFAULT_RIOT_API_BASE_URL.into());

        let host = var("HOST").unwrap_or_else(|| DEFAULT_HOST.into());

        let port = var("PORT")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let champion_cache_path = var("CHAMPION_CACHE_PATH")
            .unwrap_or_else(|| DEFAULT_CHAMPION_CACHE_PATH.into())
            .into();

        let champion_cache_ttl_secs = var("CHAMPION_CACHE_TTL_SECS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_CHAMPION_CACHE_TTL_SECS);

        let participant_concurrency = var("PARTICIPANT_CONCURRENCY")
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_PARTICIPANT_CONCURRENCY);

        let static_dir = var("STATIC_DIR")
            .unwrap_or_else(|| DEFAULT_STATIC_DIR.into())
            .into();

        Ok(Self {
            riot_api_key,
            riot_api_base_url,
            host,
            port,
            champion_cache_path,
            champion_cache_ttl_secs,
            participant_concurrency,
            static_dir,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
