use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use augur_core::connector::ConnectorKey;
use augur_core::{AugurConfig, AugurConnector, AugurError, CacheConfig, Capability, FetchStrategy};
use augur_core::RangePreset;
use augur_middleware::ConnectorBuilder;

use crate::router::util::collapse_errors;

/// Orchestrator that routes forecast requests across registered connectors and
/// turns the payloads into chart frames.
pub struct Augur {
    pub(crate) connectors: Vec<Arc<dyn AugurConnector>>,
    pub(crate) priority: Vec<ConnectorKey>,
    pub(crate) cfg: AugurConfig,
}

/// Builder for constructing an `Augur` orchestrator with custom configuration.
pub struct AugurBuilder {
    connectors: Vec<Arc<dyn AugurConnector>>,
    priority: Vec<ConnectorKey>,
    cfg: AugurConfig,
}

impl Default for AugurBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AugurBuilder {
    /// Create a new builder with default configuration and no connectors.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            priority: vec![],
            cfg: AugurConfig::default(),
        }
    }

    /// Register a connector.
    ///
    /// Registration order is the routing order unless [`prefer`](Self::prefer)
    /// says otherwise.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn AugurConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Register a connector wrapped in the forecast cache.
    #[must_use]
    pub fn with_cached_connector(self, c: Arc<dyn AugurConnector>, cache: &CacheConfig) -> Self {
        let wrapped = ConnectorBuilder::new(c).with_cache(cache).build();
        self.with_connector(wrapped)
    }

    /// Preferred connector order. Unlisted connectors keep their registration
    /// order after the listed ones.
    #[must_use]
    pub fn prefer(mut self, connectors_desc: &[Arc<dyn AugurConnector>]) -> Self {
        self.priority = connectors_desc.iter().map(|c| c.key()).collect();
        self
    }

    /// Select the fetch strategy for multi-connector requests.
    #[must_use]
    pub const fn fetch_strategy(mut self, strategy: FetchStrategy) -> Self {
        self.cfg.fetch_strategy = strategy;
        self
    }

    /// Set the per-connector request timeout.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Range preset used by [`Augur::default_zoom`].
    #[must_use]
    pub fn default_range(mut self, preset: RangePreset) -> Self {
        self.cfg.default_range = preset.to_string();
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: AugurConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Build the `Augur` orchestrator.
    ///
    /// # Errors
    /// - `InvalidArg` if no connectors have been registered.
    /// - `UnknownRange` if the configured default range is not a known preset.
    pub fn build(mut self) -> Result<Augur, AugurError> {
        if self.connectors.is_empty() {
            return Err(AugurError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }
        self.cfg.default_range.parse::<RangePreset>()?;

        let mut seen = HashSet::new();
        let connectors = &self.connectors;
        self.priority
            .retain(|k| connectors.iter().any(|c| k.matches(c.name())) && seen.insert(*k));

        Ok(Augur {
            connectors: self.connectors,
            priority: self.priority,
            cfg: self.cfg,
        })
    }
}

/// Attribute a provider error to `connector`.
///
/// Errors that already name a provider, or aggregate several, pass through.
pub fn tag_err(connector: &str, e: AugurError) -> AugurError {
    match e {
        e @ (AugurError::NotFound { .. }
        | AugurError::ProviderTimeout { .. }
        | AugurError::Connector { .. }
        | AugurError::AllProvidersTimedOut { .. }
        | AugurError::AllProvidersFailed(_)) => e,
        other => AugurError::Connector {
            connector: connector.to_string(),
            msg: other.to_string(),
        },
    }
}

impl Augur {
    /// Start building a new `Augur` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    ///
    /// let augur = augur::Augur::builder()
    ///     .with_connector(Arc::new(augur_mock::MockConnector::new()))
    ///     .provider_timeout(std::time::Duration::from_secs(10))
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> AugurBuilder {
        AugurBuilder::new()
    }

    /// Effective configuration.
    #[must_use]
    pub const fn config(&self) -> &AugurConfig {
        &self.cfg
    }

    /// Wrap a provider future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "augur::core::provider_call_with_timeout",
            skip(fut),
            fields(
                connector = connector_name,
                capability = %capability,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: Capability,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, AugurError>
    where
        Fut: core::future::Future<Output = Result<T, AugurError>>,
    {
        (tokio::time::timeout(timeout, fut).await).unwrap_or_else(|_| {
            Err(AugurError::provider_timeout(
                connector_name,
                capability.as_str(),
            ))
        })
    }

    pub(crate) fn ordered(&self) -> Vec<Arc<dyn AugurConnector>> {
        let mut out: Vec<(usize, Arc<dyn AugurConnector>)> =
            self.connectors.iter().cloned().enumerate().collect();
        if !self.priority.is_empty() {
            let pos: HashMap<_, _> = self
                .priority
                .iter()
                .enumerate()
                .map(|(i, k)| (k.as_str(), i))
                .collect();
            out.sort_by_key(|(orig_i, c)| {
                (pos.get(c.name()).copied().unwrap_or(usize::MAX), *orig_i)
            });
        }
        out.into_iter().map(|(_, c)| c).collect()
    }

    /// Single-item fetch across connectors.
    ///
    /// - Honors `FetchStrategy::{PriorityWithFallback, Latency}`.
    /// - Applies the per-provider timeout in both modes.
    /// - `call` returns `None` for connectors lacking the capability.
    /// - Failures collapse via [`collapse_errors`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "augur::core::fetch_single",
            skip(self, call),
            fields(capability = %capability, what = %not_found_what),
        )
    )]
    pub(crate) async fn fetch_single<T, F, Fut>(
        &self,
        capability: Capability,
        not_found_what: String,
        call: F,
    ) -> Result<T, AugurError>
    where
        T: Send,
        F: Fn(Arc<dyn AugurConnector>) -> Option<Fut> + Send,
        Fut: core::future::Future<Output = Result<T, AugurError>> + Send,
    {
        match self.cfg.fetch_strategy {
            FetchStrategy::Latency => self.fetch_single_latency(capability, not_found_what, call).await,
            _ => {
                self.fetch_single_priority_with_fallback(capability, not_found_what, call)
                    .await
            }
        }
    }

    async fn fetch_single_priority_with_fallback<T, F, Fut>(
        &self,
        capability: Capability,
        not_found_what: String,
        call: F,
    ) -> Result<T, AugurError>
    where
        T: Send,
        F: Fn(Arc<dyn AugurConnector>) -> Option<Fut> + Send,
        Fut: core::future::Future<Output = Result<T, AugurError>> + Send,
    {
        let mut attempted_any = false;
        let mut errors: Vec<AugurError> = Vec::new();

        for c in self.ordered() {
            let Some(fut) = call(Arc::clone(&c)) else {
                continue;
            };
            attempted_any = true;
            match Self::provider_call_with_timeout(
                c.name(),
                capability,
                self.cfg.provider_timeout,
                fut,
            )
            .await
            {
                Ok(v) => return Ok(v),
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(connector = c.name(), error = %e, "falling back to next connector");
                    errors.push(tag_err(c.name(), e));
                }
            }
        }

        Err(collapse_errors(
            capability,
            attempted_any,
            errors,
            Some(not_found_what),
        ))
    }

    async fn fetch_single_latency<T, F, Fut>(
        &self,
        capability: Capability,
        not_found_what: String,
        call: F,
    ) -> Result<T, AugurError>
    where
        T: Send,
        F: Fn(Arc<dyn AugurConnector>) -> Option<Fut> + Send,
        Fut: core::future::Future<Output = Result<T, AugurError>> + Send,
    {
        use futures::stream::{FuturesUnordered, StreamExt};

        let mut futs = FuturesUnordered::new();
        for c in self.ordered() {
            if let Some(fut) = call(Arc::clone(&c)) {
                let name = c.name();
                let timeout = self.cfg.provider_timeout;
                futs.push(async move {
                    (
                        name,
                        Self::provider_call_with_timeout(name, capability, timeout, fut).await,
                    )
                });
            }
        }
        let attempted_any = !futs.is_empty();

        let mut errors: Vec<AugurError> = Vec::new();
        while let Some((name, res)) = futs.next().await {
            match res {
                Ok(v) => return Ok(v),
                Err(e) => errors.push(tag_err(name, e)),
            }
        }

        Err(collapse_errors(
            capability,
            attempted_any,
            errors,
            Some(not_found_what),
        ))
    }
}
