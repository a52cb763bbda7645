use std::collections::BTreeMap;

use augur_core::technicals::{MOVING_AVERAGE_WINDOWS, moving_average_name};
use augur_core::{
    Backtest, ForecastPayload, InflectionKind, InflectionPoint, IntradaySeries, Technicals,
    backtest_metrics, simple_moving_average,
};
use chrono::{Datelike, Days, NaiveDate, Weekday};

const HISTORY_LEN: usize = 240;
const BACKTEST_LEN: usize = 30;
const HORIZON: usize = 10;
const EXTREMA_RADIUS: usize = 5;

pub fn by_ticker(s: &str) -> Option<ForecastPayload> {
    match s {
        // Everything the backend can send.
        "AAPL" => {
            let shape = Shape { base: 180.0, drift: 0.08, amp: 6.0 };
            let mut p = build("AAPL", &shape, HISTORY_LEN)?;
            let history = p.full_history.clone()?;
            p.metrics = backtest_metrics(&p.backtest.actual, &p.backtest.predicted).ok();
            p.technicals = Some(Technicals {
                mas: moving_averages(&history)?,
                trend_points: extrema(&history),
            });
            p.intraday = Some(intraday(&shape));
            Some(p)
        }
        // No technicals or metrics; consumers derive them.
        "MSFT" => build("MSFT", &Shape { base: 410.0, drift: -0.05, amp: 9.0 }, HISTORY_LEN),
        // Small payload as produced by older backends.
        "NVDA" => ForecastPayload::from_json_str(NVDA_JSON).ok(),
        // Backtest only; no full history or dates.
        "TSLA" => {
            let mut p = build("TSLA", &Shape { base: 240.0, drift: 0.2, amp: 15.0 }, 60)?;
            p.full_history = None;
            p.dates = None;
            Some(p)
        }
        _ => None,
    }
}

struct Shape {
    base: f64,
    drift: f64,
    amp: f64,
}

impl Shape {
    #[allow(clippy::cast_precision_loss)]
    fn at(&self, i: usize) -> f64 {
        let t = i as f64;
        let v = self.base + self.drift * t + self.amp * (t / 7.0).sin();
        (v * 100.0).round() / 100.0
    }
}

fn build(ticker: &str, shape: &Shape, len: usize) -> Option<ForecastPayload> {
    let history: Vec<Option<f64>> = (0..len).map(|i| Some(shape.at(i))).collect();
    let start = len - BACKTEST_LEN;
    let actual = history[start..].to_vec();
    // Naive one-step-lag model.
    let predicted = history[start - 1..len - 1].to_vec();
    let forecast = (len..len + HORIZON).map(|i| Some(shape.at(i))).collect();
    Some(ForecastPayload {
        ticker: ticker.to_string(),
        metrics: None,
        backtest: Backtest { actual, predicted },
        forecast,
        full_history: Some(history),
        dates: Some(trading_days(NaiveDate::from_ymd_opt(2024, 1, 2)?, len)?),
        technicals: None,
        intraday: None,
    })
}

fn trading_days(start: NaiveDate, n: usize) -> Option<Vec<NaiveDate>> {
    let mut out = Vec::with_capacity(n);
    let mut d = start;
    while out.len() < n {
        if !matches!(d.weekday(), Weekday::Sat | Weekday::Sun) {
            out.push(d);
        }
        d = d.checked_add_days(Days::new(1))?;
    }
    Some(out)
}

fn moving_averages(history: &[Option<f64>]) -> Option<BTreeMap<String, Vec<Option<f64>>>> {
    MOVING_AVERAGE_WINDOWS
        .into_iter()
        .filter(|w| *w <= history.len())
        .map(|w| {
            let values = simple_moving_average(history, w).ok()?;
            // Served without the warm-up prefix.
            Some((moving_average_name(w), values[w - 1..].to_vec()))
        })
        .collect()
}

fn extrema(history: &[Option<f64>]) -> Vec<InflectionPoint> {
    let values: Vec<f64> = history.iter().flatten().copied().collect();
    let mut out = Vec::new();
    for i in EXTREMA_RADIUS..values.len().saturating_sub(EXTREMA_RADIUS) {
        let v = values[i];
        let around = values[i - EXTREMA_RADIUS..=i + EXTREMA_RADIUS]
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != EXTREMA_RADIUS);
        let (mut higher, mut lower) = (true, true);
        for (_, w) in around {
            higher &= v > *w;
            lower &= v < *w;
        }
        if higher {
            out.push(InflectionPoint { index: i, value: v, kind: InflectionKind::Peak });
        } else if lower {
            out.push(InflectionPoint { index: i, value: v, kind: InflectionKind::Valley });
        }
    }
    out
}

fn intraday(shape: &Shape) -> IntradaySeries {
    // 09:30 to 15:55 in five-minute bars.
    let bars = 78;
    let values = (0..bars).map(|i| Some(shape.at(HISTORY_LEN + i) - 1.0)).collect();
    let labels = (0..bars)
        .map(|i| {
            let minutes = 9 * 60 + 30 + 5 * i;
            format!("{:02}:{:02}", minutes / 60, minutes % 60)
        })
        .collect();
    IntradaySeries { values, labels: Some(labels) }
}

const NVDA_JSON: &str = r#"{
  "ticker": "NVDA",
  "metrics": { "mse": 4.12, "mape": 1.37 },
  "backtest": {
    "actual": [118.2, 119.9, 121.4, 120.8, 123.1, 125.6],
    "predicted": [117.5, 118.9, 120.2, 121.7, 122.0, 124.3]
  },
  "forecast": [126.4, 127.9, 128.3, 129.8, 131.0],
  "full_history": [112.0, 114.3, 116.8, 115.1, 117.6, 118.2, 119.9, 121.4, 120.8, 123.1, 125.6],
  "technicals": {
    "trend_points": [
      { "index": 2, "value": 116.8, "type": "peark" },
      { "index": 3, "value": 115.1, "type": "valley" },
      { "index": 7, "value": 121.4, "type": "peark" },
      { "index": 8, "value": 120.8, "type": "valley" }
    ]
  }
}"#;
