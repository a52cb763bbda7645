mod common;

use augur::Augur;
use common::{get_connector, init_tracing};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let augur = Augur::builder().with_connector(get_connector()?).build()?;

    let symbol = std::env::args().nth(1).unwrap_or_else(|| "AAPL".to_string());
    let range = std::env::args().nth(2).unwrap_or_else(|| "1m".to_string());
    let ticker = augur::Ticker::new(&symbol)?;

    println!("Fetching forecast for {ticker} (backend may train on demand)...");
    let frame = augur.zoom(&ticker, &range).await?;
    for (i, label) in frame.labels().iter().enumerate() {
        let row: Vec<String> = frame
            .series()
            .iter()
            .map(|s| s.values[i].map_or_else(|| "-".to_string(), |v| format!("{v:.2}")))
            .collect();
        println!("{:>12} {}", label.display(), row.join(" "));
    }
    Ok(())
}
