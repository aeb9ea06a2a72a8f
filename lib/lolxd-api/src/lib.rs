//! Clients for the services a live match lookup depends on: the Riot API
//! (summoners, live games, ranked history, league standings, static data) and
//! Champion.gg (community-wide champion statistics).

pub mod champion_gg;
pub mod ddragon;
pub mod error;
pub mod http;
pub mod riot;

pub use champion_gg::{ChampionGgClient, ChampionGgConfig, CommunityStats};
pub use error::{Call, Error};
pub use http::JsonClient;
pub use riot::{GameData, RiotClient, RiotConfig};
