//! augur-http
//!
//! Connector that implements `AugurConnector` on top of the forecast backend's
//! HTTP API using `reqwest`. Serves forecasts and the default watchlist.
#![warn(missing_docs)]

mod builder;

pub use builder::HttpConnectorBuilder;

use async_trait::async_trait;
use augur_core::connector::{AugurConnector, ConnectorKey, ForecastProvider, WatchlistProvider};
use augur_core::{AugurError, ErrorBody, ForecastPayload, Ticker};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

/// Public connector type. Construct with [`HttpConnector::new_raw`] or one of
/// the builder entry points.
pub struct HttpConnector {
    base: Url,
    client: reqwest::Client,
}

impl HttpConnector {
    /// Static connector key for orchestrator priority configuration.
    pub const KEY: ConnectorKey = ConnectorKey::new("augur-http");

    /// Connector against `base` with a fresh `reqwest::Client`.
    #[must_use]
    pub fn new_raw(base: Url) -> Self {
        Self::with_client(base, reqwest::Client::new())
    }

    /// Connector against `base` reusing an existing client.
    #[must_use]
    pub const fn with_client(base: Url, client: reqwest::Client) -> Self {
        Self { base, client }
    }

    /// Parse `base` and build a raw connector.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `base` is not an absolute URL usable as a base.
    pub fn from_base_str(base: &str) -> Result<Self, AugurError> {
        let url = Url::parse(base)
            .map_err(|e| AugurError::InvalidArg(format!("invalid base url '{base}': {e}")))?;
        if url.cannot_be_a_base() {
            return Err(AugurError::InvalidArg(format!(
                "base url '{base}' cannot carry a path"
            )));
        }
        Ok(Self::new_raw(url))
    }

    /// Base URL requests are resolved against.
    #[must_use]
    pub const fn base(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, AugurError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| {
                AugurError::InvalidArg(format!("base url '{}' cannot carry a path", self.base))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn transport(e: &reqwest::Error) -> AugurError {
        AugurError::connector(Self::KEY.as_str(), e.to_string())
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "augur_http::get", skip(self, url), fields(url = %url)),
    )]
    async fn get_json<T>(&self, url: Url, what: &str) -> Result<T, AugurError>
    where
        T: DeserializeOwned + Send,
    {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Self::transport(&e))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| Self::transport(&e))?;

        if status == StatusCode::NOT_FOUND {
            return Err(AugurError::not_found(what.to_string()));
        }
        if !status.is_success() {
            let msg = serde_json::from_str::<ErrorBody>(&body).map_or_else(
                |_| format!("HTTP {status}"),
                |b| format!("{} (HTTP {status})", b.error),
            );
            #[cfg(feature = "tracing")]
            tracing::warn!(%status, what, "backend returned an error");
            return Err(AugurError::connector(Self::KEY.as_str(), msg));
        }
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl AugurConnector for HttpConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "Forecast backend"
    }

    fn as_forecast_provider(&self) -> Option<&dyn ForecastProvider> {
        Some(self as &dyn ForecastProvider)
    }

    fn as_watchlist_provider(&self) -> Option<&dyn WatchlistProvider> {
        Some(self as &dyn WatchlistProvider)
    }
}

#[async_trait]
impl ForecastProvider for HttpConnector {
    async fn forecast(&self, ticker: &Ticker) -> Result<ForecastPayload, AugurError> {
        let url = self.endpoint(&["api", "predict", ticker.as_str()])?;
        self.get_json(url, &format!("forecast for {ticker}")).await
    }
}

#[async_trait]
impl WatchlistProvider for HttpConnector {
    async fn watchlist(&self) -> Result<Vec<Ticker>, AugurError> {
        let url = self.endpoint(&["api", "top10"])?;
        let raw: Vec<String> = self.get_json(url, "watchlist").await?;
        raw.iter().map(|s| Ticker::new(s)).collect()
    }
}
