mod common;

use augur::{Augur, Theme};
use common::{get_connector, init_tracing};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // 1. Register the connector (mock when AUGUR_EXAMPLES_USE_MOCK is set).
    let augur = Augur::builder().with_connector(get_connector()?).build()?;

    // 2. Load the card grid for the default watchlist.
    let report = augur.load_default_dashboard().await?;
    for card in &report.cards {
        let last = card
            .payload
            .forecast
            .iter()
            .rev()
            .flatten()
            .next()
            .copied()
            .unwrap_or(f64::NAN);
        println!(
            "{:<6} mse={:>8.3} mape={:>5.2}%  horizon end {:>8.2}  ({} points)",
            card.ticker,
            card.metrics.mse,
            card.metrics.mape,
            last,
            card.sparkline.len()
        );
    }
    for w in &report.warnings {
        println!("skipped {}: {}", w.ticker, w.error);
    }

    // 3. Open the first card and zoom to the last week.
    let Some(first) = report.cards.first() else {
        return Ok(());
    };
    let view = augur_core::detail_view(&first.payload)?;
    let week = view.zoom(augur::RangePreset::SevenDays)?;
    let labels: Vec<String> = week.labels().iter().map(|l| l.display()).collect();
    println!(
        "{} 7d window: {} .. {} ({} peaks, {} valleys overall)",
        first.ticker,
        labels.first().map_or("-", String::as_str),
        labels.last().map_or("-", String::as_str),
        view.peaks.len(),
        view.valleys.len()
    );

    // 4. The renderer gets the palette explicitly.
    let theme = Theme::default();
    for t in [theme, theme.toggle()] {
        let p = t.palette();
        println!("{t:?}: actual={} grid={} text={}", p.actual, p.grid, p.text);
    }
    Ok(())
}
