//! Combines a live game, each participant's ranked history and the
//! community baseline into two comparable rosters.

pub mod aggregator;
pub mod champion;
pub mod error;
pub mod keystone;
pub mod stats;
pub mod team;

pub use aggregator::{
    normalize_name, CommunityComparison, EnrichedPlayer, MatchAggregator, MatchLookup,
    Recommendations,
};
pub use error::LookupError;
pub use team::Team;
