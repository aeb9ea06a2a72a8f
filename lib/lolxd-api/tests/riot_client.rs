mod common;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use common::{serve, Hits};
use lolxd_api::riot::model::Standing;
use lolxd_api::{Call, Error, GameData, JsonClient, RiotClient, RiotConfig};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::time::Duration;

async fn client_for(router: Router) -> RiotClient {
    client_with(router, Duration::from_secs(5), Some("7.1.1")).await
}

async fn client_with(
    router: Router,
    timeout: Duration,
    ddragon_version: Option<&str>,
) -> RiotClient {
    let base_url = serve(router).await;
    let config = RiotConfig {
        api_key: "RGAPI-test".into(),
        base_url: base_url.clone(),
        ddragon_base_url: base_url,
        ddragon_version: ddragon_version.map(str::to_string),
        ..Default::default()
    };
    RiotClient::new(config, JsonClient::new(timeout).unwrap()).unwrap()
}

#[tokio::test]
async fn summoner_id_sends_api_key_and_reads_keyed_response() {
    let router = Router::new().route(
        "/api/lol/:region/v1.4/summoner/by-name/:name",
        get(
            |Path((region, name)): Path<(String, String)>,
             Query(query): Query<HashMap<String, String>>| async move {
                assert_eq!(region, "euw");
                assert_eq!(query["api_key"], "RGAPI-test");
                Json(HashMap::from([(name, json!({ "id": 42, "name": "Some Name" }))]))
            },
        ),
    );
    let client = client_for(router).await;

    assert_eq!(client.summoner_id("euw", "somename").await.unwrap(), 42);
}

#[tokio::test]
async fn unknown_summoner_is_not_found() {
    let router = Router::new().route(
        "/api/lol/:region/v1.4/summoner/by-name/:name",
        get(|| async { StatusCode::NOT_FOUND }),
    );
    let client = client_for(router).await;

    let err = client.summoner_id("euw", "nobody").await.unwrap_err();
    assert!(matches!(err, Error::NotFound(Call::SummonerLookup)));
}

#[tokio::test]
async fn summoner_keyed_under_another_name_is_not_found() {
    let router = Router::new().route(
        "/api/lol/:region/v1.4/summoner/by-name/:name",
        get(|| async { Json(json!({ "someoneelse": { "id": 7, "name": "Someone Else" } })) }),
    );
    let client = client_for(router).await;

    let err = client.summoner_id("euw", "somename").await.unwrap_err();
    assert!(matches!(err, Error::NotFound(Call::SummonerLookup)));
}

#[tokio::test]
async fn unknown_region_makes_no_request() {
    let hits = Hits::default();
    let router = Router::new()
        .fallback(|State(hits): State<Hits>| async move {
            hits.hit();
            StatusCode::IM_A_TEAPOT
        })
        .with_state(hits.clone());
    let client = client_for(router).await;

    let err = client.current_game("atlantis", 1).await.unwrap_err();
    assert!(matches!(err, Error::UnknownRegion(region) if region == "atlantis"));
    assert_eq!(hits.count(), 0);
}

#[tokio::test]
async fn current_game_uses_platform_id() {
    let router = Router::new().route(
        "/observer-mode/rest/consumer/getSpectatorGameInfo/:platform/:id",
        get(|Path((platform, id)): Path<(String, i64)>| async move {
            if platform != "EUW1" || id != 7 {
                return Err(StatusCode::NOT_FOUND);
            }
            Ok(Json(json!({
                "gameId": 3000,
                "gameMode": "CLASSIC",
                "participants": [{
                    "summonerId": 7,
                    "summonerName": "Seven",
                    "championId": 1,
                    "teamId": 100,
                    "spell1Id": 4,
                    "spell2Id": 14,
                    "masteries": [{ "masteryId": 6111, "rank": 5 }, { "masteryId": 6362, "rank": 1 }],
                }],
            })))
        }),
    );
    let client = client_for(router).await;

    let game = client.current_game("euw", 7).await.unwrap();
    assert_eq!(game.game_id, 3000);
    assert_eq!(game.participants.len(), 1);
    assert_eq!(game.participants[0].masteries[1].mastery_id, 6362);

    let err = client.current_game("euw", 8).await.unwrap_err();
    assert!(matches!(err, Error::NotFound(Call::CurrentGame)));
}

#[tokio::test]
async fn ranked_stats_404_is_empty_history() {
    let router = Router::new().route(
        "/api/lol/:region/v1.3/stats/by-summoner/:id/ranked",
        get(|Path((_, id)): Path<(String, i64)>| async move {
            if id == 1 {
                return Err(StatusCode::NOT_FOUND);
            }
            Ok(Json(json!({
                "summonerId": id,
                "champions": [
                    { "id": 0, "stats": { "totalSessionsWon": 10, "totalSessionsLost": 5 } },
                    { "id": 1, "stats": { "totalSessionsWon": 3, "totalSessionsLost": 7, "totalChampionKills": 60 } },
                ],
            })))
        }),
    );
    let client = client_for(router).await;

    assert!(client.ranked_stats("na", 1).await.unwrap().is_empty());

    let rows = client.ranked_stats("na", 2).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].stats.games(), 10);
    assert_eq!(rows[1].stats.total_champion_kills, 60);
    assert_eq!(rows[1].stats.total_assists, 0);
}

#[tokio::test]
async fn server_errors_surface_with_status() {
    let router = Router::new().route(
        "/api/lol/:region/v1.3/stats/by-summoner/:id/ranked",
        get(|| async { StatusCode::TOO_MANY_REQUESTS }),
    );
    let client = client_for(router).await;

    let err = client.ranked_stats("na", 1).await.unwrap_err();
    assert_eq!(err.call(), Some(Call::RankedStats));
    assert_eq!(err.status(), Some(StatusCode::TOO_MANY_REQUESTS));
}

#[tokio::test]
async fn upstream_errors_do_not_carry_the_api_key() {
    let router = Router::new().fallback(|| async { StatusCode::INTERNAL_SERVER_ERROR });
    let client = client_for(router).await;

    let err = client.summoner_id("euw", "faker").await.unwrap_err();
    assert!(matches!(
        err,
        Error::UpstreamUnavailable {
            call: Call::SummonerLookup,
            ..
        }
    ));
    assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    assert!(!err.to_string().contains("RGAPI-test"));
    assert!(!format!("{err:?}").contains("RGAPI-test"));
}

#[tokio::test]
async fn slow_upstream_times_out_as_unavailable() {
    let router = Router::new().route(
        "/api/lol/:region/v1.4/summoner/by-name/:name",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(3)).await;
            Json(json!({}))
        }),
    );
    let client = client_with(router, Duration::from_millis(200), Some("7.1.1")).await;

    let err = client.summoner_id("euw", "faker").await.unwrap_err();
    match err {
        Error::UpstreamUnavailable {
            call: Call::SummonerLookup,
            source,
        } => assert!(source.is_timeout()),
        other => panic!("expected a timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn standings_fill_unranked_sentinel_in_one_request() {
    let hits = Hits::default();
    let router = Router::new()
        .route(
            "/api/lol/:region/v2.5/league/by-summoner/:ids/entry",
            get(
                |State(hits): State<Hits>, Path((_, ids)): Path<(String, String)>| async move {
                    hits.hit();
                    assert_eq!(ids, "1,2,3");
                    Json(json!({
                        "1": [{ "tier": "DIAMOND", "queue": "RANKED_SOLO_5x5", "entries": [{ "division": "III" }] }],
                        "3": [{ "tier": "GOLD", "queue": "RANKED_SOLO_5x5", "entries": [{ "division": "I" }] }],
                    }))
                },
            ),
        )
        .with_state(hits.clone());
    let client = client_for(router).await;

    let standings = client.standings("euw", &[1, 2, 3]).await.unwrap();
    assert_eq!(standings.len(), 3);
    assert_eq!(standings[&1].tier, "DIAMOND");
    assert_eq!(standings[&1].division, "III");
    assert_eq!(standings[&2], Standing::unranked());
    assert_eq!(standings[&2].tier, "PROVISIONAL");
    assert_eq!(standings[&2].division, "I");
    assert_eq!(standings[&3].tier, "GOLD");
    assert_eq!(hits.count(), 1);

    assert!(client.standings("euw", &[]).await.unwrap().is_empty());
    assert_eq!(hits.count(), 1);
}

#[tokio::test]
async fn standings_404_means_nobody_is_ranked() {
    let router = Router::new().route(
        "/api/lol/:region/v2.5/league/by-summoner/:ids/entry",
        get(|| async { StatusCode::NOT_FOUND }),
    );
    let client = client_for(router).await;

    let standings = client.standings("kr", &[5, 6]).await.unwrap();
    assert!(standings.values().all(Standing::is_unranked));
}

fn summoner_json() -> Value {
    json!({
        "type": "summoner",
        "version": "7.1.1",
        "data": {
            "SummonerFlash": { "id": "SummonerFlash", "name": "Flash", "key": "4" },
            "SummonerDot": { "id": "SummonerDot", "name": "Ignite", "key": "14" },
        },
    })
}

#[tokio::test]
async fn static_data_is_loaded_once() {
    let hits = Hits::default();
    let router = Router::new()
        .route(
            "/cdn/7.1.1/data/en_US/summoner.json",
            get(|State(hits): State<Hits>| async move {
                hits.hit();
                Json(summoner_json())
            }),
        )
        .route(
            "/cdn/7.1.1/data/en_US/item.json",
            get(|| async { Json(json!({ "data": { "3020": { "name": "Sorcerer's Shoes" } } })) }),
        )
        .with_state(hits.clone());
    let client = client_for(router).await;

    assert_eq!(
        client.summoner_spell_key(4).await.unwrap().as_deref(),
        Some("SummonerFlash")
    );
    assert_eq!(client.summoner_spell_key(99).await.unwrap(), None);
    assert_eq!(
        client.item_name(3020).await.unwrap().as_deref(),
        Some("Sorcerer's Shoes")
    );
    assert_eq!(hits.count(), 1);
}

#[tokio::test]
async fn latest_static_data_version_is_used_and_failures_are_retried() {
    let hits = Hits::default();
    let router = Router::new()
        .route(
            "/api/versions.json",
            get(|| async { Json(json!(["7.2.1", "7.1.1"])) }),
        )
        .route(
            "/cdn/7.2.1/data/en_US/summoner.json",
            get(|State(hits): State<Hits>| async move {
                match hits.hit() {
                    1 => Err(StatusCode::BAD_GATEWAY),
                    _ => Ok(Json(summoner_json())),
                }
            }),
        )
        .route(
            "/cdn/7.2.1/data/en_US/item.json",
            get(|| async { Json(json!({ "data": {} })) }),
        )
        .with_state(hits.clone());
    let client = client_with(router, Duration::from_secs(5), None).await;

    let err = client.summoner_spell_key(4).await.unwrap_err();
    assert_eq!(err.call(), Some(Call::StaticData));
    assert_eq!(
        client.summoner_spell_key(4).await.unwrap().as_deref(),
        Some("SummonerFlash")
    );
    assert_eq!(hits.count(), 2);
}
