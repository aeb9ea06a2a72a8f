use crate::champion::ChampionIdentity;
use crate::error::LookupError;
use crate::keystone::keystone;
use crate::stats::{season_win_rate, ChampionPerformance, Deviation};
use crate::team::Team;
use lolxd_api::champion_gg::model::Baseline;
use lolxd_api::riot::model::{CurrentGameParticipant, Standing, SummonerId};
use lolxd_api::{Call, CommunityStats, Error, GameData};
use serde::Serialize;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// A participant of the live game with their history and how it compares to
/// the community.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedPlayer {
    pub summoner_id: SummonerId,
    pub summoner_name: String,
    pub team: Team,
    pub champion: ChampionIdentity,
    /// Summoner spell keys, e.g. `SummonerFlash`
    pub spells: [String; 2],
    pub keystone: Option<u32>,
    pub standing: Standing,
    pub season_win_rate: f64,
    pub performance: ChampionPerformance,
    /// Absent when the community has no stats for the champion.
    pub community: Option<CommunityComparison>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CommunityComparison {
    pub baseline: Baseline,
    pub deviation: Deviation,
}

/// Most winning build for the requester's champion.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendations {
    pub champion: ChampionIdentity,
    pub item_set: Vec<String>,
    pub starting_items: Vec<String>,
    pub skill_order: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchLookup {
    pub region: String,
    pub summoner_id: SummonerId,
    pub game_id: i64,
    pub game_mode: Option<String>,
    /// Team id 100
    pub team_a: Vec<EnrichedPlayer>,
    /// Team id 200
    pub team_b: Vec<EnrichedPlayer>,
    pub recommendations: Option<Recommendations>,
}

impl MatchLookup {
    pub fn players(&self) -> impl Iterator<Item = &EnrichedPlayer> {
        self.team_a.iter().chain(self.team_b.iter())
    }

    pub fn player(&self, summoner_id: SummonerId) -> Option<&EnrichedPlayer> {
        self.players().find(|player| player.summoner_id == summoner_id)
    }
}

/// Builds the two enriched rosters of the game a summoner is currently in.
#[derive(Debug)]
pub struct MatchAggregator<G, C> {
    game_data: Arc<G>,
    community: Arc<C>,
}

impl<G, C> MatchAggregator<G, C>
where
    G: GameData + 'static,
    C: CommunityStats + 'static,
{
    pub fn new(game_data: Arc<G>, community: Arc<C>) -> Self {
        Self {
            game_data,
            community,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn lookup(&self, region: &str, summoner_name: &str) -> Result<MatchLookup, LookupError> {
        let region = normalize_region(region);
        let name = normalize_name(summoner_name);

        let summoner_id = self.game_data.summoner_id(&region, &name).await?;
        let game = self.game_data.current_game(&region, summoner_id).await?;
        info!(
            "Summoner {summoner_id} is in game {} with {} participants",
            game.game_id,
            game.participants.len()
        );

        // One request for everyone's standing
        let ids: Vec<SummonerId> = game
            .participants
            .iter()
            .map(|participant| participant.summoner_id)
            .collect();
        let mut standings = self.game_data.standings(&region, &ids).await?;

        let participant_count = game.participants.len();
        let mut tasks = JoinSet::new();
        for (index, participant) in game.participants.into_iter().enumerate() {
            let team = Team::try_from(participant.team_id).map_err(|team_id| Error::Malformed {
                call: Call::CurrentGame,
                reason: format!(
                    "participant {} has unknown team id {team_id}",
                    participant.summoner_id
                ),
            })?;
            let standing = standings
                .remove(&participant.summoner_id)
                .unwrap_or_else(Standing::unranked);
            let game_data = self.game_data.clone();
            let community = self.community.clone();
            let region = region.clone();
            tasks.spawn(async move {
                let player = enrich(
                    game_data.as_ref(),
                    community.as_ref(),
                    &region,
                    participant,
                    team,
                    standing,
                )
                .await;
                (index, player)
            });
        }

        let mut players = Vec::with_capacity(participant_count);
        while let Some(joined) = tasks.join_next().await {
            let (index, player) = joined?;
            players.push((index, player?));
        }
        // Keep the order the match service listed participants in
        players.sort_by_key(|(index, _)| *index);
        let (team_a, team_b): (Vec<_>, Vec<_>) = players
            .into_iter()
            .map(|(_, player)| player)
            .partition(|player| player.team == Team::Blue);

        let requester = team_a
            .iter()
            .chain(team_b.iter())
            .find(|player| normalize_name(&player.summoner_name) == name);
        let recommendations = match requester {
            Some(player) => match self.recommendations(&player.champion).await {
                Ok(recommendations) => Some(recommendations),
                Err(e) => {
                    warn!("Failed to get recommendations for {}: {e}", player.champion.name);
                    None
                }
            },
            None => {
                warn!("Summoner {name:?} not found among participants of game {}", game.game_id);
                None
            }
        };

        Ok(MatchLookup {
            region,
            summoner_id,
            game_id: game.game_id,
            game_mode: game.game_mode,
            team_a,
            team_b,
            recommendations,
        })
    }

    async fn recommendations(&self, champion: &ChampionIdentity) -> Result<Recommendations, Error> {
        let key = champion.key.as_str();
        let (item_set, starting_items, skill_order) = tokio::try_join!(
            self.community.item_set(key),
            self.community.starting_items(key),
            self.community.skill_order(key),
        )?;
        Ok(Recommendations {
            champion: champion.clone(),
            item_set: self.item_names(&item_set).await?,
            starting_items: self.item_names(&starting_items).await?,
            skill_order,
        })
    }

    async fn item_names(&self, item_ids: &[u32]) -> Result<Vec<String>, Error> {
        let mut names = Vec::with_capacity(item_ids.len());
        for &item_id in item_ids {
            let name = self.game_data.item_name(item_id).await?;
            names.push(name.unwrap_or_else(|| item_id.to_string()));
        }
        Ok(names)
    }
}

async fn enrich<G: GameData, C: CommunityStats>(
    game_data: &G,
    community: &C,
    region: &str,
    participant: CurrentGameParticipant,
    team: Team,
    standing: Standing,
) -> Result<EnrichedPlayer, Error> {
    let champion = ChampionIdentity::from_id(participant.champion_id);
    let spells = [
        spell_key(game_data, participant.spell1_id).await?,
        spell_key(game_data, participant.spell2_id).await?,
    ];

    let records = game_data
        .ranked_stats(region, participant.summoner_id)
        .await?;
    let season_win_rate = season_win_rate(&records);
    let performance = ChampionPerformance::from_records(&records, participant.champion_id);
    debug!(
        "{} on {}: {} games, {}% win rate",
        participant.summoner_name, champion.name, performance.games, performance.win_rate
    );

    let community = match community.baseline(&champion.name).await? {
        Some(baseline) => Some(CommunityComparison {
            deviation: Deviation::between(&performance, &baseline),
            baseline,
        }),
        None => {
            warn!("No community baseline for {}", champion.name);
            None
        }
    };

    Ok(EnrichedPlayer {
        summoner_id: participant.summoner_id,
        summoner_name: participant.summoner_name,
        team,
        champion,
        spells,
        keystone: keystone(&participant.masteries),
        standing,
        season_win_rate,
        performance,
        community,
    })
}

async fn spell_key<G: GameData>(game_data: &G, spell_id: u32) -> Result<String, Error> {
    Ok(game_data
        .summoner_spell_key(spell_id)
        .await?
        .unwrap_or_else(|| spell_id.to_string()))
}

/// Summoner names compare without case or whitespace.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

pub fn normalize_region(region: &str) -> String {
    region.trim().to_lowercase()
}
