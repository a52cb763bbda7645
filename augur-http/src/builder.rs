use std::sync::Arc;

use augur_core::connector::AugurConnector;
use augur_middleware::ConnectorBuilder as GenericConnectorBuilder;
use augur_types::CacheConfig;
use url::Url;

use crate::HttpConnector;

/// Builder type alias specialized for HTTP connectors.
pub type HttpConnectorBuilder = GenericConnectorBuilder;

impl HttpConnector {
    /// Returns an unconfigured builder around a raw connector for `base`.
    ///
    /// Customize with the builder methods before calling `.build()`.
    #[must_use]
    pub fn builder(base: Url) -> HttpConnectorBuilder {
        let raw: Arc<dyn AugurConnector> = Arc::new(Self::new_raw(base));
        GenericConnectorBuilder::new(raw)
    }

    /// Returns a builder with the default forecast cache applied.
    ///
    /// The backend trains a model per request, so repeated views of the same
    /// ticker are served from memory for the cache TTL.
    #[must_use]
    pub fn cached(base: Url) -> HttpConnectorBuilder {
        Self::builder(base).with_cache(&CacheConfig::default())
    }
}
