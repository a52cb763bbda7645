use augur_core::{
    AlignedFrame, AugurError, DetailView, RangePreset, Ticker, detail_view, intraday_frame,
};

use crate::Augur;

impl Augur {
    /// Fetch a forecast and build its expanded chart.
    ///
    /// # Errors
    /// Routing errors from [`Augur::forecast`], or shape errors from the payload.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "augur::router", skip(self), fields(ticker = %ticker))
    )]
    pub async fn detail(&self, ticker: &Ticker) -> Result<DetailView, AugurError> {
        let payload = self.forecast(ticker).await?;
        detail_view(&payload)
    }

    /// Fetch a forecast and return the expanded chart zoomed to `tag`.
    ///
    /// The tag is validated before any request is made.
    ///
    /// # Errors
    /// `UnknownRange` for an unrecognized tag, otherwise as [`Augur::detail`].
    pub async fn zoom(&self, ticker: &Ticker, tag: &str) -> Result<AlignedFrame, AugurError> {
        let preset: RangePreset = tag.parse()?;
        self.detail(ticker).await?.zoom(preset)
    }

    /// Zoom using the configured default range.
    ///
    /// # Errors
    /// As [`Augur::zoom`].
    pub async fn default_zoom(&self, ticker: &Ticker) -> Result<AlignedFrame, AugurError> {
        let tag = self.cfg.default_range.clone();
        self.zoom(ticker, &tag).await
    }

    /// Fetch a forecast and build its intraday chart, if it carries one.
    ///
    /// # Errors
    /// Routing errors from [`Augur::forecast`], or shape errors from the slice.
    pub async fn intraday(&self, ticker: &Ticker) -> Result<Option<AlignedFrame>, AugurError> {
        let payload = self.forecast(ticker).await?;
        intraday_frame(&payload)
    }
}
