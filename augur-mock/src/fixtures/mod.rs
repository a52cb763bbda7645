pub mod forecast;

/// Tickers served by the mock watchlist, in display order.
pub const WATCHLIST: [&str; 4] = ["AAPL", "MSFT", "NVDA", "TSLA"];
