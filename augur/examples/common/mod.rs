use std::sync::Arc;

use augur_core::AugurConnector;
use augur_types::CacheConfig;

/// Mock connector when `AUGUR_EXAMPLES_USE_MOCK` is set, otherwise the HTTP
/// backend at `AUGUR_BACKEND_URL` (default `http://127.0.0.1:5000`).
pub fn get_connector() -> Result<Arc<dyn AugurConnector>, Box<dyn std::error::Error>> {
    if std::env::var("AUGUR_EXAMPLES_USE_MOCK").is_ok() {
        println!("--- (Using Mock Connector) ---");
        return Ok(Arc::new(augur_mock::MockConnector::new()));
    }
    let base = std::env::var("AUGUR_BACKEND_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:5000".to_string());
    Ok(augur_http::HttpConnector::builder(base.parse()?)
        .with_cache(&CacheConfig::default())
        .build())
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,augur=debug")),
        )
        .try_init();
}
