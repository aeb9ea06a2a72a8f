use lolxd_api::{ChampionGgConfig, RiotConfig};
use serde::Deserialize;
use std::path::Path;
use tokio::fs::read_to_string;

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub bind_address: String,
    pub request_timeout_secs: u64,
    pub riot: RiotConfig,
    pub champion_gg: ChampionGgConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.into(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            riot: RiotConfig::default(),
            champion_gg: ChampionGgConfig::default(),
        }
    }
}

impl Config {
    /// Load from the TOML file at `path` (if any), then apply environment
    /// overrides.
    pub async fn load(path: Option<impl AsRef<Path>>) -> anyhow::Result<Self> {
        let config = match path {
            Some(path) => Self::load_file(path).await?,
            None => Default::default(),
        };
        config.with_overrides(|key| std::env::var(key).ok())
    }

    async fn load_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let contents = read_to_string(path).await?;
        Ok(toml::from_str(&contents)?)
    }

    fn with_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        self.bind_address = var("BIND_ADDRESS").unwrap_or(self.bind_address);
        self.riot.api_key = var("RGAPI_KEY").unwrap_or(self.riot.api_key);
        self.champion_gg.api_key = var("CHAMPION_GG_API_KEY").unwrap_or(self.champion_gg.api_key);
        if let Some(secs) = var("REQUEST_TIMEOUT_SECS") {
            self.request_timeout_secs = secs
                .parse()
                .map_err(|e| anyhow::anyhow!("REQUEST_TIMEOUT_SECS must be numeric: {e}"))?;
        }
        if self.request_timeout_secs == 0 {
            anyhow::bail!("request_timeout_secs must be at least 1");
        }
        Ok(self)
    }
}
