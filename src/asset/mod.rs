use serde_json::Value;

use crate::core::{MessariClient, MessariError};
use crate::news::NewsBuilder;
use crate::timeseries::TimeseriesBuilder;

/// A handle binding one asset key to a client, for convenient access to every
/// per-asset endpoint.
///
/// The key may be the asset's id, slug or symbol; it is never validated locally.
///
/// # Example
///
/// ```no_run
/// # use messari_rs::{Asset, MessariClient, timeseries::Interval};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = MessariClient::default();
/// let btc = Asset::new(&client, "btc");
///
/// let market = btc.market_data(Some("market_data/price_usd")).await?;
/// println!("{}", market["data"]["market_data"]["price_usd"]);
///
/// let series = btc
///     .timeseries("price")
///     .interval(Interval::D1)
///     .fetch_series()
///     .await?;
/// println!("{} points", series.map_or(0, |s| s.len()));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Asset {
    client: MessariClient,
    key: String,
}

impl Asset {
    /// Creates a new `Asset` handle for `key`.
    pub fn new(client: &MessariClient, key: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            key: key.into(),
        }
    }

    /// The asset key this handle was created with.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Basic metadata. See [`MessariClient::get_asset`].
    ///
    /// # Errors
    ///
    /// Returns a `MessariError` on transport failure or a non-JSON body.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(asset = %self.key)))]
    pub async fn info(&self, fields: Option<&str>) -> Result<Value, MessariError> {
        self.client.get_asset(&self.key, fields).await
    }

    /// Qualitative profile. See [`MessariClient::get_asset_profile`].
    ///
    /// # Errors
    ///
    /// Returns a `MessariError` on transport failure or a non-JSON body.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(asset = %self.key)))]
    pub async fn profile(&self, fields: Option<&str>) -> Result<Value, MessariError> {
        self.client.get_asset_profile(&self.key, fields).await
    }

    /// Quantitative metrics. See [`MessariClient::get_asset_metrics`].
    ///
    /// # Errors
    ///
    /// Returns a `MessariError` on transport failure or a non-JSON body.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(asset = %self.key)))]
    pub async fn metrics(&self, fields: Option<&str>) -> Result<Value, MessariError> {
        self.client.get_asset_metrics(&self.key, fields).await
    }

    /// Latest market data. See [`MessariClient::get_asset_market_data`].
    ///
    /// # Errors
    ///
    /// Returns a `MessariError` on transport failure or a non-JSON body.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(asset = %self.key)))]
    pub async fn market_data(&self, fields: Option<&str>) -> Result<Value, MessariError> {
        self.client.get_asset_market_data(&self.key, fields).await
    }

    /// Starts a time-series request for `metric_id` on this asset.
    pub fn timeseries(&self, metric_id: impl Into<String>) -> TimeseriesBuilder {
        self.client.asset_timeseries(self.key.clone(), metric_id)
    }

    /// Starts a news request for this asset.
    pub fn news(&self) -> NewsBuilder {
        self.client.news_for_asset(self.key.clone())
    }
}
