use crate::error::{Call, Error};
use crate::http::JsonClient;
use serde::Deserialize;
use std::{collections::HashMap, fmt::Display};
use tokio::sync::OnceCell;
use tracing::{debug, info};

pub const DEFAULT_BASE_URL: &str = "https://ddragon.leagueoflegends.com";

#[derive(Debug, Deserialize)]
struct SpellMap {
    pub data: HashMap<String, Spell>,
}

#[derive(Debug, Deserialize)]
struct Spell {
    /// e.g. `SummonerFlash`
    id: String,
    /// Numeric spell id, as a string
    key: String,
}

#[derive(Debug, Deserialize)]
struct ItemMap {
    pub data: HashMap<String, Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    name: String,
}

/// Static lookups built from one Data Dragon version.
#[derive(Debug, Default)]
pub struct DataDragonBlob {
    /// Map of summoner spell ID to spell key
    pub spells: HashMap<u32, String>,
    /// Map of item ID to item name
    pub items: HashMap<u32, String>,
}

#[derive(Debug, Hash, PartialEq, Eq, Clone)]
pub struct DataDragonVersion(pub String);

impl Display for DataDragonVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Static game data, fetched from Data Dragon the first time it is needed and
/// kept for the lifetime of the process.
#[derive(Debug)]
pub struct DataDragon {
    http: JsonClient,
    base_url: String,
    version: OnceCell<DataDragonVersion>,
    blob: OnceCell<DataDragonBlob>,
}

impl DataDragon {
    pub fn new(http: JsonClient, base_url: String, version: Option<String>) -> Self {
        let version = match version {
            Some(version) => OnceCell::new_with(Some(DataDragonVersion(version))),
            None => OnceCell::new(),
        };
        Self {
            http,
            base_url,
            version,
            blob: OnceCell::new(),
        }
    }

    pub async fn summoner_spell_key(&self, spell_id: u32) -> Result<Option<String>, Error> {
        Ok(self.blob().await?.spells.get(&spell_id).cloned())
    }

    pub async fn item_name(&self, item_id: u32) -> Result<Option<String>, Error> {
        Ok(self.blob().await?.items.get(&item_id).cloned())
    }

    async fn blob(&self) -> Result<&DataDragonBlob, Error> {
        self.blob
            .get_or_try_init(|| async {
                let version = self.version().await?;
                let (spells, items) =
                    tokio::try_join!(self.fetch_spells(version), self.fetch_items(version))?;
                let blob = build_blob(spells, items)?;
                info!(
                    "Loaded Data Dragon {version}: {} spells, {} items",
                    blob.spells.len(),
                    blob.items.len()
                );
                Ok(blob)
            })
            .await
    }

    async fn version(&self) -> Result<&DataDragonVersion, Error> {
        self.version
            .get_or_try_init(|| async {
                let versions: Vec<String> = self
                    .http
                    .get(Call::StaticData, &self.base_url, &["api", "versions.json"], &[])
                    .await?;
                let latest = versions.into_iter().next().ok_or_else(|| Error::Malformed {
                    call: Call::StaticData,
                    reason: "empty version list".into(),
                })?;
                debug!("Latest Data Dragon version is {latest}");
                Ok(DataDragonVersion(latest))
            })
            .await
    }

    async fn fetch_spells(&self, version: &DataDragonVersion) -> Result<SpellMap, Error> {
        let version = version.to_string();
        self.http
            .get(
                Call::StaticData,
                &self.base_url,
                &["cdn", version.as_str(), "data", "en_US", "summoner.json"],
                &[],
            )
            .await
    }

    async fn fetch_items(&self, version: &DataDragonVersion) -> Result<ItemMap, Error> {
        let version = version.to_string();
        self.http
            .get(
                Call::StaticData,
                &self.base_url,
                &["cdn", version.as_str(), "data", "en_US", "item.json"],
                &[],
            )
            .await
    }
}

fn build_blob(spells: SpellMap, items: ItemMap) -> Result<DataDragonBlob, Error> {
    let mut blob = DataDragonBlob::default();
    for spell in spells.data.into_values() {
        let id = spell.key.parse().map_err(|_| Error::Malformed {
            call: Call::StaticData,
            reason: format!("spell {} has non-numeric key {:?}", spell.id, spell.key),
        })?;
        blob.spells.insert(id, spell.id);
    }
    for (id, item) in items.data {
        let id = id.parse().map_err(|_| Error::Malformed {
            call: Call::StaticData,
            reason: format!("non-numeric item id {id:?}"),
        })?;
        blob.items.insert(id, item.name);
    }
    Ok(blob)
}
