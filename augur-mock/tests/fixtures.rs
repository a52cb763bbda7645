use augur_core::{AugurConnector, AugurError, InflectionKind, Ticker, detail_view, sparkline_frame};
use augur_mock::MockConnector;

fn t(s: &str) -> Ticker {
    Ticker::new(s).unwrap()
}

#[tokio::test]
async fn every_watchlist_ticker_has_a_renderable_forecast() {
    let mock = MockConnector::new();
    let tickers = mock.as_watchlist_provider().unwrap().watchlist().await.unwrap();
    assert_eq!(tickers.len(), 4);

    let fp = mock.as_forecast_provider().unwrap();
    for ticker in &tickers {
        let payload = fp.forecast(ticker).await.unwrap();
        assert_eq!(payload.ticker, ticker.as_str());
        let spark = sparkline_frame(&payload).unwrap();
        assert_eq!(spark.len(), payload.backtest.actual.len() + payload.forecast.len());
        detail_view(&payload).unwrap();
    }
}

#[tokio::test]
async fn aapl_carries_full_technicals() {
    let payload = MockConnector::new()
        .as_forecast_provider()
        .unwrap()
        .forecast(&t("aapl"))
        .await
        .unwrap();
    let technicals = payload.technicals.as_ref().unwrap();
    assert_eq!(technicals.mas.len(), 4);
    assert!(!technicals.trend_points.is_empty());
    assert!(payload.metrics.is_some());
    assert!(payload.intraday.is_some());
    assert_eq!(payload.dates.as_ref().unwrap().len(), payload.full_history.as_ref().unwrap().len());
}

#[tokio::test]
async fn nvda_misspelled_peaks_are_normalized() {
    let payload = MockConnector::new()
        .as_forecast_provider()
        .unwrap()
        .forecast(&t("NVDA"))
        .await
        .unwrap();
    let view = detail_view(&payload).unwrap();
    assert_eq!(view.peaks.len(), 2);
    assert!(view.peaks.iter().all(|p| p.kind == InflectionKind::Peak));
}

#[tokio::test]
async fn special_tickers() {
    let fp = MockConnector::new();
    let fp = fp.as_forecast_provider().unwrap();
    assert!(matches!(
        fp.forecast(&t("FAIL")).await,
        Err(AugurError::Connector { .. })
    ));
    assert!(matches!(
        fp.forecast(&t("ZZZZ")).await,
        Err(AugurError::NotFound { .. })
    ));
    let started = std::time::Instant::now();
    let _ = fp.forecast(&t("TIMEOUT")).await;
    assert!(started.elapsed() >= augur_mock::TIMEOUT_DELAY);
}
