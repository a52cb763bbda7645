//! Layers that wrap a connector, such as the forecast cache.

use std::sync::Arc;

use crate::connector::AugurConnector;

/// A connector layer.
///
/// `apply` consumes the layer and returns a connector that forwards to `inner`,
/// adding its own behavior on the way. Layers are identified by `name`, so a
/// builder can replace or remove one without knowing its concrete type.
pub trait Middleware: Send + Sync {
    /// Wrap `inner`, returning the layered connector.
    fn apply(self: Box<Self>, inner: Arc<dyn AugurConnector>) -> Arc<dyn AugurConnector>;

    /// Stable layer name, e.g. `"CachingMiddleware"`.
    fn name(&self) -> &'static str;

    /// Layer settings, for diagnostics. Layers without settings report `null`.
    fn config_json(&self) -> serde_json::Value {
        serde_json::Value::Null
    }

    /// `(name, settings)` pair as listed by builders.
    fn describe(&self) -> (&'static str, serde_json::Value) {
        (self.name(), self.config_json())
    }
}
