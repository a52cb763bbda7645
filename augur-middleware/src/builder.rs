//! Connector stacks.
//!
//! Layers are kept outermost first. The cache is always the innermost layer,
//! so anything added with [`ConnectorBuilder::layer`] sees cached payloads.

use std::sync::Arc;

use augur_core::Middleware;
use augur_core::connector::AugurConnector;
use augur_types::CacheConfig;

use crate::cache::CacheMiddleware;

/// Collects middleware layers around a raw connector.
pub struct ConnectorBuilder {
    raw: Arc<dyn AugurConnector>,
    layers: Vec<Box<dyn Middleware>>,
}

impl ConnectorBuilder {
    /// Start from a raw, unwrapped connector.
    #[must_use]
    pub fn new(raw: Arc<dyn AugurConnector>) -> Self {
        Self {
            raw,
            layers: Vec::new(),
        }
    }

    /// Cache forecasts with `cfg`, replacing any cache added earlier.
    #[must_use]
    pub fn with_cache(self, cfg: &CacheConfig) -> Self {
        let mut this = self.without_cache();
        this.layers.push(Box::new(CacheMiddleware::new(cfg.clone())));
        this
    }

    /// Drop the forecast cache if one was added.
    #[must_use]
    pub fn without_cache(mut self) -> Self {
        self.layers.retain(|m| m.name() != CacheMiddleware::NAME);
        self
    }

    /// Wrap everything added so far in `layer`.
    #[must_use]
    pub fn layer(mut self, layer: Box<dyn Middleware>) -> Self {
        self.layers.insert(0, layer);
        self
    }

    /// `(name, settings)` of every layer, outermost first.
    #[must_use]
    pub fn describe(&self) -> Vec<(&'static str, serde_json::Value)> {
        self.layers.iter().map(|l| l.describe()).collect()
    }

    /// Apply the layers, innermost first, and return the wrapped connector.
    #[must_use]
    pub fn build(self) -> Arc<dyn AugurConnector> {
        self.layers
            .into_iter()
            .rev()
            .fold(self.raw, |inner, layer| layer.apply(inner))
    }
}
