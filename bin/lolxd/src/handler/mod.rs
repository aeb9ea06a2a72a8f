use axum::routing::get;
use axum::Router;
use lolxd_aggregation::MatchAggregator;
use lolxd_api::{CommunityStats, GameData};
use std::sync::Arc;

pub mod lookup;

const USAGE: &str = "lolxd: live match lookup. Try /<region>/<summoner name>, e.g. /euw/faker";

pub fn router<G, C>(aggregator: Arc<MatchAggregator<G, C>>) -> Router
where
    G: GameData + 'static,
    C: CommunityStats + 'static,
{
    Router::new()
        .route("/", get(|| async { USAGE }))
        .route("/:region/:summoner_name", get(lookup::look_up::<G, C>))
        .with_state(aggregator)
}
