use std::fmt::Display;
use thiserror::Error;

/// Upstream operation that produced an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Call {
    SummonerLookup,
    CurrentGame,
    RankedStats,
    LeagueStandings,
    ChampionStats,
    ItemSet,
    StartingItems,
    SkillOrder,
    StaticData,
}

impl Display for Call {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Call::SummonerLookup => "summoner lookup",
            Call::CurrentGame => "current game",
            Call::RankedStats => "ranked stats",
            Call::LeagueStandings => "league standings",
            Call::ChampionStats => "champion stats",
            Call::ItemSet => "item set",
            Call::StartingItems => "starting items",
            Call::SkillOrder => "skill order",
            Call::StaticData => "static data",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}: not found")]
    NotFound(Call),
    #[error("{call}: upstream unavailable: {source}")]
    UpstreamUnavailable {
        call: Call,
        #[source]
        source: reqwest::Error,
    },
    #[error("{call}: malformed response: {reason}")]
    Malformed { call: Call, reason: String },
    #[error("unknown region: {0}")]
    UnknownRegion(String),
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// The upstream call that failed, if the error came from one.
    pub fn call(&self) -> Option<Call> {
        match self {
            Error::NotFound(call)
            | Error::UpstreamUnavailable { call, .. }
            | Error::Malformed { call, .. } => Some(*call),
            Error::UnknownRegion(_) | Error::Configuration(_) => None,
        }
    }

    /// HTTP status of a non-success upstream response.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Error::UpstreamUnavailable { source, .. } => source.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}
