use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per champion name.
pub type BaselineTable = HashMap<String, Baseline>;

/// Aggregate performance of a champion across the whole player base.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Baseline {
    pub kills: f64,
    pub deaths: f64,
    pub assists: f64,
    pub win_rate: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChampionStats {
    pub name: String,
    pub general: GeneralStats,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeneralStats {
    pub win_percent: f64,
    pub kills: f64,
    pub deaths: f64,
    pub assists: f64,
}

impl From<GeneralStats> for Baseline {
    fn from(stats: GeneralStats) -> Self {
        Self {
            kills: stats.kills,
            deaths: stats.deaths,
            assists: stats.assists,
            win_rate: stats.win_percent,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ItemSet {
    #[serde(default)]
    pub items: Vec<u32>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SkillOrder {
    #[serde(default)]
    pub order: Vec<String>,
}
