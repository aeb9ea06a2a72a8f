use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use lolxd_aggregation::{LookupError, MatchAggregator, MatchLookup};
use lolxd_api::{CommunityStats, Error, GameData};
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

/// `GET /:region/:summoner_name`
pub async fn look_up<G, C>(
    State(aggregator): State<Arc<MatchAggregator<G, C>>>,
    Path((region, summoner_name)): Path<(String, String)>,
) -> Result<Json<MatchLookup>, LookupFailure>
where
    G: GameData + 'static,
    C: CommunityStats + 'static,
{
    let lookup = aggregator.lookup(&region, &summoner_name).await?;
    info!(
        "Looked up {summoner_name:?} in {region}: game {} ({} vs {})",
        lookup.game_id,
        lookup.team_a.len(),
        lookup.team_b.len()
    );
    Ok(Json(lookup))
}

/// Maps a [`LookupError`] onto an HTTP response.
#[derive(Debug)]
pub struct LookupFailure(LookupError);

impl From<LookupError> for LookupFailure {
    fn from(error: LookupError) -> Self {
        Self(error)
    }
}

impl IntoResponse for LookupFailure {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            e if e.is_not_found() => (
                StatusCode::NOT_FOUND,
                "Couldn't find that match. Is the summoner in a game right now?",
            ),
            LookupError::Api(Error::Configuration(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Server misconfigured")
            }
            LookupError::Api(_) => (
                StatusCode::BAD_GATEWAY,
                "Couldn't find that match. An upstream service failed.",
            ),
            LookupError::Task(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Lookup failed"),
        };
        if status.is_server_error() {
            error!("Lookup failed: {:?}", self.0);
        } else {
            info!("Lookup failed: {}", self.0);
        }
        (status, Json(json!({ "error": message, "cause": self.0.to_string() }))).into_response()
    }
}
