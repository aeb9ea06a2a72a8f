use crate::ddragon::DataDragon;
use crate::error::{Call, Error};
use crate::http::JsonClient;
use async_trait::async_trait;
use model::{ChampionRanked, CurrentGame, League, RankedStats, Standing, Summoner, SummonerId};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

pub mod model;

const DEFAULT_BASE_URL: &str = "https://{region}.api.pvp.net";
const SOLO_QUEUE: &str = "RANKED_SOLO_5x5";

/// Read-only queries against the game-data service.
#[async_trait]
pub trait GameData: Send + Sync {
    /// Resolve a (normalised) summoner name to its id.
    async fn summoner_id(&self, region: &str, name: &str) -> Result<SummonerId, Error>;

    /// Live game the summoner is in. Fails with [`Error::NotFound`] when they
    /// are not in one.
    async fn current_game(
        &self,
        region: &str,
        summoner_id: SummonerId,
    ) -> Result<CurrentGame, Error>;

    /// Per-champion ranked rows, empty when the summoner has no ranked history.
    async fn ranked_stats(
        &self,
        region: &str,
        summoner_id: SummonerId,
    ) -> Result<Vec<ChampionRanked>, Error>;

    /// League standing of every id in a single request. Ids without an entry
    /// are reported as [`Standing::unranked`].
    async fn standings(
        &self,
        region: &str,
        summoner_ids: &[SummonerId],
    ) -> Result<HashMap<SummonerId, Standing>, Error>;

    async fn summoner_spell_key(&self, spell_id: u32) -> Result<Option<String>, Error>;

    async fn item_name(&self, item_id: u32) -> Result<Option<String>, Error>;
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RiotConfig {
    pub api_key: String,
    /// `{region}` is replaced with the request's region code.
    pub base_url: String,
    pub ddragon_base_url: String,
    /// Pin a Data Dragon version instead of resolving the latest one.
    pub ddragon_version: Option<String>,
    /// Region code to platform id, e.g. `euw` to `EUW1`.
    pub platforms: BTreeMap<String, String>,
}

impl Default for RiotConfig {
    fn default() -> Self {
        let platforms = [
            ("br", "BR1"),
            ("eune", "EUN1"),
            ("euw", "EUW1"),
            ("kr", "KR"),
            ("lan", "LA1"),
            ("las", "LA2"),
            ("na", "NA1"),
            ("oce", "OC1"),
            ("ru", "RU"),
            ("tr", "TR1"),
            ("jp", "JP1"),
        ]
        .into_iter()
        .map(|(region, platform)| (region.to_string(), platform.to_string()))
        .collect();

        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.into(),
            ddragon_base_url: crate::ddragon::DEFAULT_BASE_URL.into(),
            ddragon_version: None,
            platforms,
        }
    }
}

/// [`GameData`] backed by the Riot API.
pub struct RiotClient {
    http: JsonClient,
    api_key: String,
    base_url: String,
    platforms: BTreeMap<String, String>,
    data_dragon: DataDragon,
}

impl std::fmt::Debug for RiotClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RiotClient")
            .field("base_url", &self.base_url)
            .field("platforms", &self.platforms)
            .finish()
    }
}

impl RiotClient {
    pub fn new(config: RiotConfig, http: JsonClient) -> Result<Self, Error> {
        if config.api_key.is_empty() {
            return Err(Error::Configuration("missing Riot API key".into()));
        }
        let data_dragon = DataDragon::new(
            http.clone(),
            config.ddragon_base_url,
            config.ddragon_version,
        );
        Ok(Self {
            http,
            api_key: config.api_key,
            base_url: config.base_url,
            platforms: config.platforms,
            data_dragon,
        })
    }

    fn platform(&self, region: &str) -> Result<&str, Error> {
        self.platforms
            .get(region)
            .map(String::as_str)
            .ok_or_else(|| Error::UnknownRegion(region.to_string()))
    }

    fn host(&self, region: &str) -> Result<String, Error> {
        // Only known regions are ever substituted into the host name
        self.platform(region)?;
        Ok(self.base_url.replace("{region}", region))
    }

    async fn request<T: serde::de::DeserializeOwned>(
        &self,
        call: Call,
        region: &str,
        segments: &[&str],
    ) -> Result<T, Error> {
        let host = self.host(region)?;
        self.http
            .get(call, &host, segments, &[("api_key", self.api_key.as_str())])
            .await
    }
}

#[async_trait]
impl GameData for RiotClient {
    async fn summoner_id(&self, region: &str, name: &str) -> Result<SummonerId, Error> {
        let mut summoners: HashMap<String, Summoner> = self
            .request(
                Call::SummonerLookup,
                region,
                &["api", "lol", region, "v1.4", "summoner", "by-name", name],
            )
            .await?;
        // Keyed by the standardised name, which is what callers pass in
        let Some(summoner) = summoners.remove(name) else {
            if !summoners.is_empty() {
                warn!("Summoner lookup for {name:?} answered for other names only");
            }
            return Err(Error::NotFound(Call::SummonerLookup));
        };
        debug!("Resolved {name:?} to summoner {} ({})", summoner.id, summoner.name);
        Ok(summoner.id)
    }

    async fn current_game(
        &self,
        region: &str,
        summoner_id: SummonerId,
    ) -> Result<CurrentGame, Error> {
        let platform = self.platform(region)?;
        let summoner_id = summoner_id.to_string();
        self.request(
            Call::CurrentGame,
            region,
            &[
                "observer-mode",
                "rest",
                "consumer",
                "getSpectatorGameInfo",
                platform,
                summoner_id.as_str(),
            ],
        )
        .await
    }

    async fn ranked_stats(
        &self,
        region: &str,
        summoner_id: SummonerId,
    ) -> Result<Vec<ChampionRanked>, Error> {
        let id = summoner_id.to_string();
        let result: Result<RankedStats, Error> = self
            .request(
                Call::RankedStats,
                region,
                &["api", "lol", region, "v1.3", "stats", "by-summoner", id.as_str(), "ranked"],
            )
            .await;
        match result {
            Ok(stats) => Ok(stats.champions),
            Err(Error::NotFound(_)) => {
                debug!("No ranked stats for summoner {summoner_id}");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    async fn standings(
        &self,
        region: &str,
        summoner_ids: &[SummonerId],
    ) -> Result<HashMap<SummonerId, Standing>, Error> {
        if summoner_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let ids = summoner_ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let result: Result<HashMap<String, Vec<League>>, Error> = self
            .request(
                Call::LeagueStandings,
                region,
                &["api", "lol", region, "v2.5", "league", "by-summoner", ids.as_str(), "entry"],
            )
            .await;
        let leagues = match result {
            Ok(leagues) => leagues,
            // Nobody in the batch has a league entry
            Err(Error::NotFound(_)) => HashMap::new(),
            Err(e) => return Err(e),
        };

        Ok(resolve_standings(summoner_ids, leagues))
    }

    async fn summoner_spell_key(&self, spell_id: u32) -> Result<Option<String>, Error> {
        self.data_dragon.summoner_spell_key(spell_id).await
    }

    async fn item_name(&self, item_id: u32) -> Result<Option<String>, Error> {
        self.data_dragon.item_name(item_id).await
    }
}

/// Pick a standing for every requested id, falling back to the unranked
/// sentinel for ids missing from the response.
fn resolve_standings(
    summoner_ids: &[SummonerId],
    mut leagues: HashMap<String, Vec<League>>,
) -> HashMap<SummonerId, Standing> {
    summoner_ids
        .iter()
        .map(|&id| {
            let standing = leagues
                .remove(&id.to_string())
                .and_then(|leagues| {
                    let preferred = leagues.iter().position(|league| league.queue == SOLO_QUEUE);
                    leagues.into_iter().nth(preferred.unwrap_or(0))
                })
                .and_then(|league| {
                    let Some(entry) = league.entries.into_iter().next() else {
                        warn!("League for summoner {id} has no entries");
                        return None;
                    };
                    Some(Standing {
                        tier: league.tier,
                        division: entry.division,
                    })
                })
                .unwrap_or_else(Standing::unranked);
            (id, standing)
        })
        .collect()
}
