mod helpers;

use std::sync::Arc;
use std::time::Duration;

use augur::{Augur, AugurError, FetchStrategy};
use augur_core::AugurConnector;
use augur_mock::{DynamicMockConnector, MockBehavior, MockConnector};
use helpers::{Inert, payload, t};

#[tokio::test]
async fn falls_back_past_a_failing_connector() {
    let (bad, bad_ctl) = DynamicMockConnector::new_with_controller("bad");
    bad_ctl
        .set_forecast_behavior(t("AAPL"), MockBehavior::Fail(AugurError::Other("boom".into())))
        .await;
    let (good, good_ctl) = DynamicMockConnector::new_with_controller("good");
    good_ctl
        .set_forecast_behavior(t("AAPL"), MockBehavior::Return(payload("AAPL")))
        .await;

    let augur = Augur::builder()
        .with_connector(bad)
        .with_connector(good)
        .build()
        .unwrap();
    let p = augur.forecast(&t("AAPL")).await.unwrap();
    assert_eq!(p.ticker, "AAPL");
    assert_eq!(bad_ctl.forecast_requests().await.len(), 1);
}

#[tokio::test]
async fn preference_reorders_connectors() {
    let (first, first_ctl) = DynamicMockConnector::new_with_controller("first");
    let (second, second_ctl) = DynamicMockConnector::new_with_controller("second");
    second_ctl
        .set_forecast_behavior(t("MSFT"), MockBehavior::Return(payload("MSFT")))
        .await;

    let augur = Augur::builder()
        .with_connector(Arc::clone(&first))
        .with_connector(Arc::clone(&second))
        .prefer(&[second])
        .build()
        .unwrap();
    augur.forecast(&t("MSFT")).await.unwrap();
    assert!(first_ctl.forecast_requests().await.is_empty());
}

#[tokio::test]
async fn all_not_found_collapses_to_not_found() {
    let augur = Augur::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .with_connector(DynamicMockConnector::new_with_controller("empty").0)
        .build()
        .unwrap();
    match augur.forecast(&t("ZZZZ")).await {
        Err(AugurError::NotFound { what }) => assert_eq!(what, "forecast for ZZZZ"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn hanging_connectors_time_out() {
    let (a, a_ctl) = DynamicMockConnector::new_with_controller("a");
    let (b, b_ctl) = DynamicMockConnector::new_with_controller("b");
    a_ctl.set_forecast_behavior(t("NVDA"), MockBehavior::Hang).await;
    b_ctl.set_forecast_behavior(t("NVDA"), MockBehavior::Hang).await;

    let augur = Augur::builder()
        .with_connector(a)
        .with_connector(b)
        .provider_timeout(Duration::from_millis(30))
        .build()
        .unwrap();
    match augur.forecast(&t("NVDA")).await {
        Err(AugurError::AllProvidersTimedOut { capability }) => assert_eq!(capability, "forecast"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn mixed_failures_are_aggregated_and_tagged() {
    let (a, a_ctl) = DynamicMockConnector::new_with_controller("a");
    a_ctl
        .set_forecast_behavior(t("TSLA"), MockBehavior::Fail(AugurError::Data("bad json".into())))
        .await;

    let augur = Augur::builder()
        .with_connector(a)
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .unwrap();
    let err = augur.forecast(&t("FAIL")).await.unwrap_err();
    assert!(matches!(err, AugurError::AllProvidersFailed(_)));

    let err = augur.forecast(&t("TSLA")).await;
    assert!(err.is_ok(), "mock serves TSLA after the first connector fails");
}

#[tokio::test]
async fn non_connector_errors_are_tagged_with_the_connector() {
    let (a, a_ctl) = DynamicMockConnector::new_with_controller("a");
    a_ctl
        .set_forecast_behavior(t("TSLA"), MockBehavior::Fail(AugurError::Data("bad json".into())))
        .await;
    let augur = Augur::builder().with_connector(a).build().unwrap();
    match augur.forecast(&t("TSLA")).await {
        Err(AugurError::AllProvidersFailed(errs)) => match &errs[..] {
            [AugurError::Connector { connector, msg }] => {
                assert_eq!(connector, "a");
                assert!(msg.contains("bad json"));
            }
            other => panic!("unexpected: {other:?}"),
        },
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn no_capable_connector_is_unsupported() {
    let inert: Arc<dyn AugurConnector> = Arc::new(Inert);
    let augur = Augur::builder().with_connector(inert).build().unwrap();
    assert!(matches!(
        augur.forecast(&t("AAPL")).await,
        Err(AugurError::Unsupported { .. })
    ));
    assert!(matches!(
        augur.watchlist().await,
        Err(AugurError::Unsupported { .. })
    ));
}

#[tokio::test]
async fn latency_strategy_returns_first_success() {
    let (slow, slow_ctl) = DynamicMockConnector::new_with_controller("slow");
    slow_ctl.set_forecast_behavior(t("AAPL"), MockBehavior::Hang).await;
    let augur = Augur::builder()
        .with_connector(slow)
        .with_connector(Arc::new(MockConnector::new()))
        .fetch_strategy(FetchStrategy::Latency)
        .provider_timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    let started = std::time::Instant::now();
    let p = augur.forecast(&t("AAPL")).await.unwrap();
    assert_eq!(p.ticker, "AAPL");
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn malformed_symbol_is_rejected_before_routing() {
    let augur = Augur::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .unwrap();
    assert!(matches!(
        augur.forecast_symbol("AA PL").await,
        Err(AugurError::InvalidArg(_))
    ));
    assert!(augur.forecast_symbol(" msft ").await.is_ok());
}
