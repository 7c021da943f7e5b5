use crate::common;
use httpmock::Method::GET;
use messari_rs::{Asset, Envelope};
use serde_json::json;

#[tokio::test]
async fn get_asset_returns_data_envelope() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/assets/btc");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::data_body(json!({
                "id": "1e31218a-e44e-4285-820c-8282ee222035",
                "symbol": "BTC",
                "name": "Bitcoin",
                "slug": "bitcoin"
            })));
    });

    let client = common::client_for(&server);
    let body = client.get_asset("btc", None).await.unwrap();
    mock.assert();

    assert_eq!(body["data"]["symbol"], "BTC");
    let env = Envelope::from(body);
    assert_eq!(env.data().unwrap()["slug"], "bitcoin");
}

#[tokio::test]
async fn unknown_asset_is_a_body_not_an_error() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/assets/btc1111");
        then.status(404)
            .header("content-type", "application/json")
            .body(common::not_found_body("btc1111"));
    });

    let client = common::client_for(&server);
    let body = client.get_asset("btc1111", None).await.unwrap();
    mock.assert();

    assert!(body.get("data").is_none());
    assert_eq!(body["status"]["error_code"], 404);
    let err = Envelope::classify(&body).error().cloned().unwrap();
    assert_eq!(err.code, 404);
}

#[tokio::test]
async fn profile_fields_are_passed_through_verbatim() {
    let server = common::setup_server();
    let fields = "symbol,name,profile/general/overview/project_details";

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v2/assets/btc/profile")
            .query_param("fields", fields);
        then.status(200)
            .header("content-type", "application/json")
            .body(common::data_body(json!({
                "symbol": "BTC",
                "name": "Bitcoin",
                "profile": {"general": {"overview": {"project_details": "Bitcoin is ..."}}}
            })));
    });

    let client = common::client_for(&server);
    let body = client.get_asset_profile("btc", Some(fields)).await.unwrap();
    mock.assert();

    let data = body["data"].as_object().unwrap();
    let mut keys: Vec<_> = data.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["name", "profile", "symbol"]);
    assert!(data["profile"]["general"]["overview"]["project_details"].is_string());
    assert!(data["profile"]["general"].get("contributors").is_none());
}

#[tokio::test]
async fn metrics_and_market_data_paths() {
    let server = common::setup_server();

    let metrics = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/assets/eth/metrics")
            .query_param("fields", "market_data/price_usd");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::data_body(json!({"market_data": {"price_usd": 3000.5}})));
    });
    let market = server.mock(|when, then| {
        when.method(GET).path("/api/v1/assets/eth/metrics/market-data");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::data_body(json!({"market_data": {"price_usd": 3001.0}})));
    });

    let client = common::client_for(&server);
    let eth = Asset::new(&client, "eth");

    let m = eth.metrics(Some("market_data/price_usd")).await.unwrap();
    let md = eth.market_data(None).await.unwrap();

    metrics.assert();
    market.assert();
    assert_eq!(m["data"]["market_data"]["price_usd"], 3000.5);
    assert_eq!(md["data"]["market_data"]["price_usd"], 3001.0);
}

#[tokio::test]
async fn metric_ids_listing() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/assets/metrics");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::data_body(json!({
                "metrics": [{"metric_id": "price", "name": "Price"}]
            })));
    });

    let client = common::client_for(&server);
    let body = client.list_asset_timeseries_metric_ids().await.unwrap();
    mock.assert();

    assert_eq!(body["data"]["metrics"][0]["metric_id"], "price");
}

#[tokio::test]
async fn asset_handle_info_uses_v1_path() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/assets/bitcoin")
            .query_param("fields", "id,symbol");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::data_body(json!({"id": "x", "symbol": "BTC"})));
    });

    let client = common::client_for(&server);
    let btc = Asset::new(&client, "bitcoin");
    assert_eq!(btc.key(), "bitcoin");
    let body = btc.info(Some("id,symbol")).await.unwrap();
    mock.assert();
    assert_eq!(body["data"]["symbol"], "BTC");
}

#[tokio::test]
async fn recorded_asset_bodies_replay() {
    let server = common::setup_server();

    let found = server.mock(|when, then| {
        when.method(GET).path("/api/v1/assets/btc");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("api_v1_assets_btc"));
    });
    let missing = server.mock(|when, then| {
        when.method(GET).path("/api/v1/assets/btc1111");
        then.status(404)
            .header("content-type", "application/json")
            .body(common::fixture("api_v1_assets_btc1111"));
    });

    let client = common::client_for(&server);
    let btc = Envelope::from(client.get_asset("btc", None).await.unwrap());
    let bad = Envelope::from(client.get_asset("btc1111", None).await.unwrap());
    found.assert();
    missing.assert();

    assert_eq!(btc.data().unwrap()["symbol"], "BTC");
    assert_eq!(bad.error().unwrap().code, 404);
}
