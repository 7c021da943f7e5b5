use crate::common;
use httpmock::Method::GET;
use messari_rs::{MessariClient, MessariError, QueryParams};
use std::time::Duration;
use url::Url;

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/assets/btc");
        then.status(502).body("<html>bad gateway</html>");
    });

    let client = common::client_for(&server);
    let err = client.get_asset("btc", None).await.unwrap_err();
    mock.assert();

    assert!(matches!(err, MessariError::Json(_)), "got {err:?}");
}

#[tokio::test]
async fn server_error_status_with_json_body_is_returned() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/markets");
        then.status(500)
            .header("content-type", "application/json")
            .body(r#"{"status":{"error_code":500,"error_message":"internal"}}"#);
    });

    let client = common::client_for(&server);
    let body = client.list_all_markets(None).await.unwrap();
    mock.assert();

    assert_eq!(body["status"]["error_code"], 500);
}

#[tokio::test]
async fn timeout_surfaces_as_transport_error() {
    let server = common::setup_server();

    let _mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/news");
        then.status(200)
            .delay(Duration::from_millis(500))
            .body("{}");
    });

    let client = MessariClient::builder()
        .base_url(Url::parse(&server.base_url()).unwrap())
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let err = client.list_news(None, None).await.unwrap_err();
    assert!(err.is_timeout(), "got {err:?}");
}

#[tokio::test]
async fn connection_failure_surfaces_as_transport_error() {
    // Nothing listens on the discard port.
    let client = MessariClient::builder()
        .base_url(Url::parse("http://127.0.0.1:9").unwrap())
        .connect_timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let err = client
        .get("/api/v1/assets/metrics", &QueryParams::new())
        .await
        .unwrap_err();
    assert!(matches!(err, MessariError::Http(_)), "got {err:?}");
}
