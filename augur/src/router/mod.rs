pub mod dashboard;
pub mod detail;
pub mod forecast;
pub mod util;
pub mod watchlist;
