use crate::common;
use chrono::NaiveDate;
use httpmock::Method::GET;
use messari_rs::{Interval, QueryParams, SortOrder};
use serde_json::json;

fn price_series_body() -> String {
    common::data_body(json!({
        "symbol": "BTC",
        "parameters": {
            "asset_key": "btc",
            "start": "2021-01-01T00:00:00Z",
            "end": "2021-01-02T00:00:00Z",
            "interval": "1d",
            "order": "ascending",
            "format": "json",
            "timestamp_format": "unix-milliseconds",
            "columns": ["timestamp", "open", "high", "low", "close", "volume"]
        },
        "schema": {"metric_id": "price", "name": "Price"},
        "values": [
            [1_609_459_200_000_i64, 28_923.6, 29_600.6, 28_624.5, 29_331.7, 1_314_356_541.2],
            [1_609_545_600_000_i64, 29_331.6, 33_300.0, 28_946.5, 32_178.3, 3_188_230_264.5]
        ]
    }))
}

#[tokio::test]
async fn asset_timeseries_passes_params_unmodified() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/assets/btc/metrics/price/time-series")
            .query_param("start", "2021-01-01")
            .query_param("end", "2021-01-02")
            .query_param("interval", "1d")
            .query_param("timestamp-format", "unix-milliseconds");
        then.status(200)
            .header("content-type", "application/json")
            .body(price_series_body());
    });

    let params: QueryParams = [
        ("start", "2021-01-01"),
        ("end", "2021-01-02"),
        ("interval", "1d"),
        ("timestamp-format", "unix-milliseconds"),
    ]
    .into_iter()
    .collect();

    let client = common::client_for(&server);
    let body = client
        .get_asset_timeseries("btc", "price", params)
        .await
        .unwrap();
    mock.assert();

    assert_eq!(body["data"]["values"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn builder_reads_series_table() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/assets/btc/metrics/price/time-series")
            .query_param("start", "2021-01-01")
            .query_param("interval", "1d")
            .query_param("order", "ascending");
        then.status(200)
            .header("content-type", "application/json")
            .body(price_series_body());
    });

    let client = common::client_for(&server);
    let series = client
        .asset_timeseries("btc", "price")
        .start(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap())
        .interval(Interval::D1)
        .order(SortOrder::Ascending)
        .fetch_series()
        .await
        .unwrap()
        .unwrap();
    mock.assert();

    assert_eq!(series.metric_id.as_deref(), Some("price"));
    assert_eq!(series.columns.len(), 5);
    assert_eq!(series.len(), 2);
    assert_eq!(series.column("close").unwrap()[1], Some(32_178.3));
    assert!(series.points[0].timestamp.unwrap() < series.points[1].timestamp.unwrap());
}

#[tokio::test]
async fn market_timeseries_path_and_extras() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/markets/binance-btc-usdt/metrics/price/time-series")
            .query_param("after", "2021-06-01")
            .query_param("columns", "close");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::data_body(json!({"values": []})));
    });

    let client = common::client_for(&server);
    let body = client
        .market_timeseries("binance-btc-usdt", "price")
        .param("after", "2021-06-01")
        .columns("close")
        .fetch()
        .await
        .unwrap();
    mock.assert();

    assert_eq!(body["data"]["values"], json!([]));
}

#[tokio::test]
async fn series_is_none_for_error_envelope() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/assets/nope/metrics/price/time-series");
        then.status(404)
            .header("content-type", "application/json")
            .body(common::not_found_body("nope"));
    });

    let client = common::client_for(&server);
    let series = client
        .asset_timeseries("nope", "price")
        .fetch_series()
        .await
        .unwrap();
    mock.assert();

    assert!(series.is_none());
}

#[tokio::test]
async fn market_timeseries_free_form_params() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/markets/kraken-btc-usd/metrics/price/time-series")
            .query_param("interval", "1h")
            .query_param("format", "json");
        then.status(200)
            .header("content-type", "application/json")
            .body(price_series_body());
    });

    let mut params = QueryParams::new();
    params.set("interval", "1h").set("format", "json");

    let client = common::client_for(&server);
    let body = client
        .get_market_timeseries("kraken-btc-usd", "price", params)
        .await
        .unwrap();
    mock.assert();

    assert_eq!(body["data"]["schema"]["metric_id"], "price");
}

#[tokio::test]
async fn recorded_daily_series_replays() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/assets/btc/metrics/price/time-series")
            .query_param("interval", "1d");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture(
                "api_v1_assets_btc_metrics_price_time-series__interval_1d",
            ));
    });

    let client = common::client_for(&server);
    let series = client
        .asset_timeseries("btc", "price")
        .interval(Interval::D1)
        .fetch_series()
        .await
        .unwrap()
        .unwrap();
    mock.assert();

    assert_eq!(series.metric_id.as_deref(), Some("price"));
    assert_eq!(series.columns, vec!["open", "high", "low", "close", "volume"]);
    assert_eq!(series.len(), 3);
    assert!(series.points.iter().all(|p| p.timestamp.is_some()));
    assert!(series.points.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
}
