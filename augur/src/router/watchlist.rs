use std::sync::Arc;

use augur_core::{AugurError, Capability, Ticker};

use crate::Augur;

impl Augur {
    /// Fetch the default watchlist shown when the dashboard opens.
    ///
    /// Routed like [`Augur::forecast`].
    ///
    /// # Errors
    /// Returns an error if no eligible connector succeeds or none serve a watchlist.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "augur::router", skip(self))
    )]
    pub async fn watchlist(&self) -> Result<Vec<Ticker>, AugurError> {
        self.fetch_single(Capability::Watchlist, "watchlist".to_string(), |c| {
            c.as_watchlist_provider()?;
            let c2 = Arc::clone(&c);
            Some(async move {
                match c2.as_watchlist_provider() {
                    Some(p) => p.watchlist().await,
                    None => Err(AugurError::connector(
                        c2.name(),
                        "missing watchlist capability during call",
                    )),
                }
            })
        })
        .await
    }
}
