use lolxd_api::champion_gg::model::Baseline;
use lolxd_api::riot::model::{ChampionRanked, RankedTotals, AGGREGATE_CHAMPION_ID};
use serde::Serialize;

/// Champion win rate reported when there is no history to compute one from.
pub const NEUTRAL_WIN_RATE: f64 = 50.0;

/// Round to one decimal place, halves away from zero.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `part / whole` as a percentage with one decimal, or [`None`] when `whole`
/// is zero.
pub fn percentage(part: u32, whole: u32) -> Option<f64> {
    if whole == 0 {
        return None;
    }
    Some(round1(f64::from(part) / f64::from(whole) * 100.0))
}

fn per_game(total: u32, games: u32) -> f64 {
    if games == 0 {
        return 0.0;
    }
    round1(f64::from(total) / f64::from(games))
}

/// Win rate over every ranked game of the season, from the aggregate row.
/// Zero wins (or no aggregate row) reads as 0%.
pub fn season_win_rate(records: &[ChampionRanked]) -> f64 {
    let Some(totals) = find_row(records, AGGREGATE_CHAMPION_ID) else {
        return 0.0;
    };
    if totals.total_sessions_won == 0 {
        return 0.0;
    }
    percentage(totals.total_sessions_won, totals.games()).unwrap_or(0.0)
}

pub fn find_row(records: &[ChampionRanked], champion_id: i32) -> Option<&RankedTotals> {
    records
        .iter()
        .find(|record| record.id == champion_id)
        .map(|record| &record.stats)
}

/// Ranked performance on a single champion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChampionPerformance {
    pub games: u32,
    pub win_rate: f64,
    pub kills: f64,
    pub deaths: f64,
    pub assists: f64,
    pub kda: f64,
}

impl Default for ChampionPerformance {
    /// No games on the champion: neutral win rate, every average zero.
    fn default() -> Self {
        Self {
            games: 0,
            win_rate: NEUTRAL_WIN_RATE,
            kills: 0.0,
            deaths: 0.0,
            assists: 0.0,
            kda: 0.0,
        }
    }
}

impl ChampionPerformance {
    pub fn from_records(records: &[ChampionRanked], champion_id: i32) -> Self {
        find_row(records, champion_id)
            .map(Self::from_totals)
            .unwrap_or_default()
    }

    pub fn from_totals(totals: &RankedTotals) -> Self {
        let games = totals.games();
        let Some(win_rate) = percentage(totals.total_sessions_won, games) else {
            return Self::default();
        };
        let kills = totals.total_champion_kills;
        let deaths = totals.total_deaths_per_session;
        let assists = totals.total_assists;
        // Deathless records count as a single death
        let kda = round1(f64::from(kills + assists) / f64::from(deaths.max(1)));

        Self {
            games,
            win_rate,
            kills: per_game(kills, games),
            deaths: per_game(deaths, games),
            assists: per_game(assists, games),
            kda,
        }
    }
}

/// Player average minus community average, per stat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Deviation {
    pub kills: f64,
    pub deaths: f64,
    pub assists: f64,
}

impl Deviation {
    pub fn between(performance: &ChampionPerformance, baseline: &Baseline) -> Self {
        Self {
            kills: round1(performance.kills - baseline.kills),
            deaths: round1(performance.deaths - baseline.deaths),
            assists: round1(performance.assists - baseline.assists),
        }
    }
}
