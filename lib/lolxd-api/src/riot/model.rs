use serde::{Deserialize, Serialize};

pub type SummonerId = i64;

/// Champion id of the "all champions" row in a ranked stats response.
pub const AGGREGATE_CHAMPION_ID: i32 = 0;

#[derive(Debug, Clone, Deserialize)]
pub struct Summoner {
    pub id: SummonerId,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentGame {
    pub game_id: i64,
    #[serde(default)]
    pub game_mode: Option<String>,
    pub participants: Vec<CurrentGameParticipant>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentGameParticipant {
    pub summoner_id: SummonerId,
    pub summoner_name: String,
    pub champion_id: i32,
    pub team_id: u16,
    pub spell1_id: u32,
    pub spell2_id: u32,
    #[serde(default)]
    pub masteries: Vec<Mastery>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mastery {
    pub mastery_id: u32,
    pub rank: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RankedStats {
    #[serde(default)]
    pub champions: Vec<ChampionRanked>,
}

/// One row of a player's ranked history; `id` 0 is the aggregate over all
/// champions.
#[derive(Debug, Clone, Deserialize)]
pub struct ChampionRanked {
    pub id: i32,
    pub stats: RankedTotals,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RankedTotals {
    pub total_sessions_won: u32,
    pub total_sessions_lost: u32,
    pub total_champion_kills: u32,
    pub total_deaths_per_session: u32,
    pub total_assists: u32,
}

impl RankedTotals {
    pub fn games(&self) -> u32 {
        self.total_sessions_won + self.total_sessions_lost
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct League {
    pub tier: String,
    #[serde(default)]
    pub queue: String,
    #[serde(default)]
    pub entries: Vec<LeagueEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct LeagueEntry {
    pub division: String,
}

/// League standing of a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub tier: String,
    pub division: String,
}

impl Standing {
    pub const UNRANKED_TIER: &'static str = "PROVISIONAL";
    pub const UNRANKED_DIVISION: &'static str = "I";

    /// Sentinel reported for players with no league entry.
    pub fn unranked() -> Self {
        Self {
            tier: Self::UNRANKED_TIER.into(),
            division: Self::UNRANKED_DIVISION.into(),
        }
    }

    pub fn is_unranked(&self) -> bool {
        self.tier == Self::UNRANKED_TIER && self.division == Self::UNRANKED_DIVISION
    }
}
