use crate::error::{Call, Error};
use crate::http::JsonClient;
use async_trait::async_trait;
use model::{Baseline, BaselineTable, ChampionStats, ItemSet, SkillOrder};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, info};

pub mod model;

const DEFAULT_BASE_URL: &str = "http://api.champion.gg";

/// Read-only queries against the community statistics service.
#[async_trait]
pub trait CommunityStats: Send + Sync {
    /// Aggregate stats for every champion, keyed by champion name.
    async fn baseline_table(&self) -> Result<Arc<BaselineTable>, Error>;

    /// Most winning finished item set.
    async fn item_set(&self, champion_key: &str) -> Result<Vec<u32>, Error>;

    /// Most winning starting items.
    async fn starting_items(&self, champion_key: &str) -> Result<Vec<u32>, Error>;

    /// Most winning skill levelling order.
    async fn skill_order(&self, champion_key: &str) -> Result<Vec<String>, Error>;

    async fn baseline(&self, champion_name: &str) -> Result<Option<Baseline>, Error> {
        Ok(self.baseline_table().await?.get(champion_name).copied())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChampionGgConfig {
    pub api_key: String,
    pub base_url: String,
}

impl Default for ChampionGgConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.into(),
        }
    }
}

/// [`CommunityStats`] backed by the Champion.gg API.
///
/// The baseline table is fetched once and kept for the lifetime of the
/// client. Concurrent callers wait on the single in-flight request; a failed
/// request leaves the cache empty so the next caller tries again.
pub struct ChampionGgClient {
    http: JsonClient,
    api_key: String,
    base_url: String,
    table: OnceCell<Arc<BaselineTable>>,
}

impl std::fmt::Debug for ChampionGgClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChampionGgClient")
            .field("base_url", &self.base_url)
            .field("table_loaded", &self.table.initialized())
            .finish()
    }
}

impl ChampionGgClient {
    pub fn new(config: ChampionGgConfig, http: JsonClient) -> Result<Self, Error> {
        if config.api_key.is_empty() {
            return Err(Error::Configuration("missing Champion.gg API key".into()));
        }
        Ok(Self {
            http,
            api_key: config.api_key,
            base_url: config.base_url,
            table: OnceCell::new(),
        })
    }

    async fn request<T: serde::de::DeserializeOwned>(
        &self,
        call: Call,
        segments: &[&str],
    ) -> Result<T, Error> {
        self.http
            .get(
                call,
                &self.base_url,
                segments,
                &[("api_key", self.api_key.as_str())],
            )
            .await
    }

    async fn fetch_table(&self) -> Result<Arc<BaselineTable>, Error> {
        let champions: Vec<ChampionStats> = self.request(Call::ChampionStats, &["stats"]).await?;
        let table: BaselineTable = champions
            .into_iter()
            .map(|champion| (champion.name, Baseline::from(champion.general)))
            .collect();
        info!("Loaded community baseline for {} champions", table.len());
        Ok(Arc::new(table))
    }

    /// First entry of a "most wins" list endpoint, if any.
    async fn first<T: serde::de::DeserializeOwned>(
        &self,
        call: Call,
        segments: &[&str],
    ) -> Result<Option<T>, Error> {
        let entries: Vec<T> = self.request(call, segments).await?;
        if entries.is_empty() {
            debug!("{call}: empty response");
        }
        Ok(entries.into_iter().next())
    }
}

#[async_trait]
impl CommunityStats for ChampionGgClient {
    async fn baseline_table(&self) -> Result<Arc<BaselineTable>, Error> {
        self.table
            .get_or_try_init(|| self.fetch_table())
            .await
            .cloned()
    }

    async fn item_set(&self, champion_key: &str) -> Result<Vec<u32>, Error> {
        let set: Option<ItemSet> = self
            .first(
                Call::ItemSet,
                &["champion", champion_key, "items", "finished", "mostWins"],
            )
            .await?;
        Ok(set.map(|set| set.items).unwrap_or_default())
    }

    async fn starting_items(&self, champion_key: &str) -> Result<Vec<u32>, Error> {
        let set: Option<ItemSet> = self
            .first(
                Call::StartingItems,
                &["champion", champion_key, "items", "starters", "mostWins"],
            )
            .await?;
        Ok(set.map(|set| set.items).unwrap_or_default())
    }

    async fn skill_order(&self, champion_key: &str) -> Result<Vec<String>, Error> {
        let order: Option<SkillOrder> = self
            .first(
                Call::SkillOrder,
                &["champion", champion_key, "skills", "mostWins"],
            )
            .await?;
        Ok(order.map(|order| order.order).unwrap_or_default())
    }
}
