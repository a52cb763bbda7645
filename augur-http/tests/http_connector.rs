use augur_core::{AugurConnector, AugurError, InflectionKind, Ticker};
use augur_http::HttpConnector;
use httpmock::prelude::*;
use serde_json::json;

fn connector(server: &MockServer) -> HttpConnector {
    HttpConnector::from_base_str(&server.base_url()).expect("valid base url")
}

fn t(s: &str) -> Ticker {
    Ticker::new(s).unwrap()
}

#[tokio::test]
async fn forecast_decodes_payload() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/predict/AAPL");
            then.status(200).json_body(json!({
                "ticker": "AAPL",
                "metrics": { "mse": 1.5, "mape": 0.8 },
                "backtest": { "actual": [10.0, 11.0, 12.0], "predicted": [10.2, 10.9, null] },
                "forecast": [13.0, 14.0],
                "technicals": {
                    "trend_points": [{ "index": 1, "value": 11.0, "type": "peark" }]
                }
            }));
        })
        .await;

    let c = connector(&server);
    let payload = c
        .as_forecast_provider()
        .unwrap()
        .forecast(&t("aapl"))
        .await
        .unwrap();
    mock.assert_async().await;
    assert_eq!(payload.ticker, "AAPL");
    assert_eq!(payload.backtest.predicted[2], None);
    let points = payload.technicals.unwrap().trend_points;
    assert_eq!(points[0].kind, InflectionKind::Peak);
}

#[tokio::test]
async fn not_found_maps_to_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/predict/ZZZZ");
            then.status(404).json_body(json!({ "error": "No data found" }));
        })
        .await;

    let err = connector(&server)
        .as_forecast_provider()
        .unwrap()
        .forecast(&t("ZZZZ"))
        .await
        .unwrap_err();
    assert!(matches!(err, AugurError::NotFound { .. }), "got {err:?}");
}

#[tokio::test]
async fn backend_error_message_is_carried() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/predict/TINY");
            then.status(400)
                .json_body(json!({ "error": "Insufficient data after processing" }));
        })
        .await;

    let err = connector(&server)
        .as_forecast_provider()
        .unwrap()
        .forecast(&t("TINY"))
        .await
        .unwrap_err();
    match err {
        AugurError::Connector { connector, msg } => {
            assert_eq!(connector, "augur-http");
            assert!(msg.contains("Insufficient data"), "msg: {msg}");
            assert!(msg.contains("400"), "msg: {msg}");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn server_error_without_body_still_maps_to_connector() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/top10");
            then.status(500).body("boom");
        })
        .await;

    let err = connector(&server)
        .as_watchlist_provider()
        .unwrap()
        .watchlist()
        .await
        .unwrap_err();
    assert!(matches!(err, AugurError::Connector { .. }));
}

#[tokio::test]
async fn malformed_body_is_a_data_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/predict/AAPL");
            then.status(200).body("{\"ticker\": \"AAPL\"");
        })
        .await;

    let err = connector(&server)
        .as_forecast_provider()
        .unwrap()
        .forecast(&t("AAPL"))
        .await
        .unwrap_err();
    assert!(matches!(err, AugurError::Data(_)));
}

#[tokio::test]
async fn watchlist_normalizes_tickers() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/top10");
            then.status(200).json_body(json!(["aapl", "MSFT", " nvda "]));
        })
        .await;

    let list = connector(&server)
        .as_watchlist_provider()
        .unwrap()
        .watchlist()
        .await
        .unwrap();
    let names: Vec<&str> = list.iter().map(Ticker::as_str).collect();
    assert_eq!(names, ["AAPL", "MSFT", "NVDA"]);
}

#[tokio::test]
async fn dotted_symbol_stays_one_path_segment() {
    let server = MockServer::start_async().await;
    let bare = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/predict");
            then.status(500);
        })
        .await;
    let dotted = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/predict/BRK.B");
            then.status(404).json_body(json!({ "error": "No data found" }));
        })
        .await;

    let err = connector(&server)
        .as_forecast_provider()
        .unwrap()
        .forecast(&t("brk.b"))
        .await
        .unwrap_err();
    assert_eq!(err, AugurError::not_found("forecast for BRK.B"));
    dotted.assert_async().await;
    bare.assert_hits_async(0).await;
}

#[tokio::test]
async fn watchlist_rejects_dot_only_symbols() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/top10");
            then.status(200).json_body(json!(["AAPL", ".."]));
        })
        .await;

    let err = connector(&server)
        .as_watchlist_provider()
        .unwrap()
        .watchlist()
        .await
        .unwrap_err();
    assert!(matches!(err, AugurError::InvalidArg(_)));
}

#[tokio::test]
async fn base_path_prefix_is_kept() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/dash/api/top10");
            then.status(200).json_body(json!(["AAPL"]));
        })
        .await;

    let c = HttpConnector::from_base_str(&server.url("/dash/")).unwrap();
    let list = c.as_watchlist_provider().unwrap().watchlist().await.unwrap();
    mock.assert_async().await;
    assert_eq!(list.len(), 1);
}

#[test]
fn rejects_unusable_base() {
    assert!(matches!(
        HttpConnector::from_base_str("not a url"),
        Err(AugurError::InvalidArg(_))
    ));
    assert!(matches!(
        HttpConnector::from_base_str("mailto:ops@example.com"),
        Err(AugurError::InvalidArg(_))
    ));
}

#[tokio::test]
async fn cached_builder_serves_repeat_requests_from_memory() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/predict/MSFT");
            then.status(200).json_body(json!({
                "ticker": "MSFT",
                "backtest": { "actual": [1.0], "predicted": [1.0] },
                "forecast": [2.0]
            }));
        })
        .await;

    let c = HttpConnector::cached(server.base_url().parse().unwrap()).build();
    let fp = c.as_forecast_provider().unwrap();
    fp.forecast(&t("MSFT")).await.unwrap();
    fp.forecast(&t("MSFT")).await.unwrap();
    mock.assert_hits_async(1).await;
    assert_eq!(c.name(), "augur-http");
}
