mod api;
mod flags;

pub use flags::AssetFlags;

use serde_json::Value;
use std::fmt::Display;

use crate::core::{MessariClient, MessariError, QueryParams};

/// A builder for the paginated asset list (`GET /api/v2/assets`).
///
/// Known options are typed setters; anything else the endpoint accepts can be
/// passed with [`param`](Self::param). Extra parameters are merged last and win
/// on key collision.
///
/// # Example
///
/// ```no_run
/// # use messari_rs::MessariClient;
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = MessariClient::default();
/// let body = client
///     .list_assets()
///     .with_profiles(true)
///     .with_metrics(true)
///     .limit(20)
///     .fetch()
///     .await?;
/// println!("{}", body["data"].as_array().map_or(0, Vec::len));
/// # Ok(())
/// # }
/// ```
pub struct AssetsBuilder {
    client: MessariClient,
    with_profiles: bool,
    with_metrics: bool,
    page: Option<u32>,
    limit: Option<u32>,
    sort: Option<String>,
    fields: Option<String>,
    extra: QueryParams,
}

impl AssetsBuilder {
    /// Creates a new `AssetsBuilder` with no options set.
    pub fn new(client: &MessariClient) -> Self {
        Self {
            client: client.clone(),
            with_profiles: false,
            with_metrics: false,
            page: None,
            limit: None,
            sort: None,
            fields: None,
            extra: QueryParams::new(),
        }
    }

    /// Embed each asset's qualitative profile.
    #[must_use]
    pub const fn with_profiles(mut self, yes: bool) -> Self {
        self.with_profiles = yes;
        self
    }

    /// Embed each asset's quantitative metrics.
    #[must_use]
    pub const fn with_metrics(mut self, yes: bool) -> Self {
        self.with_metrics = yes;
        self
    }

    /// Page number, starting at 1.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Page size.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sort key (e.g. `id`).
    #[must_use]
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Server-side field selector, e.g. `id,slug,symbol,metrics/market_data/price_usd`.
    #[must_use]
    pub fn fields(mut self, fields: impl Into<String>) -> Self {
        self.fields = Some(fields.into());
        self
    }

    /// Adds an arbitrary query parameter.
    ///
    /// `with-profiles` and `with-metrics` are recognized here too and rendered as path flags.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.extra.set(key, value);
        self
    }

    /// Adds a batch of arbitrary query parameters.
    #[must_use]
    pub fn params(mut self, params: QueryParams) -> Self {
        self.extra.merge(params);
        self
    }

    /// The request path (with flag suffix) and the remaining query parameters.
    pub(crate) fn request_parts(&self) -> (String, QueryParams) {
        let mut qp = QueryParams::new();
        qp.set_opt("page", self.page)
            .set_opt("limit", self.limit)
            .set_opt("sort", self.sort.as_deref())
            .set_opt("fields", self.fields.as_deref())
            .merge(self.extra.clone());

        let flags = AssetFlags::extract(&mut qp, self.with_profiles, self.with_metrics);
        (format!("{}{}", api::LIST_ASSETS, flags.path_suffix()), qp)
    }

    /// Executes the request.
    ///
    /// # Errors
    ///
    /// Returns a `MessariError` on transport failure or a non-JSON body.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn fetch(self) -> Result<Value, MessariError> {
        let (path, qp) = self.request_parts();
        self.client.get(&path, &qp).await
    }
}

impl MessariClient {
    /// Starts a request for the paginated list of all assets with their metrics and profiles.
    ///
    /// Endpoint: `GET /api/v2/assets`
    pub fn list_assets(&self) -> AssetsBuilder {
        AssetsBuilder::new(self)
    }

    /// Gets basic metadata for an asset.
    ///
    /// `asset_key` is the asset's id, slug or (non-unique) symbol; `fields` prunes the
    /// response server-side (comma separated, `/` to drill down).
    ///
    /// Endpoint: `GET /api/v1/assets/{assetKey}`
    ///
    /// # Errors
    ///
    /// Returns a `MessariError` on transport failure or a non-JSON body. An unknown
    /// key is not an error: the 404 envelope is returned as the body.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn get_asset(
        &self,
        asset_key: &str,
        fields: Option<&str>,
    ) -> Result<Value, MessariError> {
        api::fetch_with_fields(self, &api::asset_path(asset_key), fields).await
    }

    /// Gets all qualitative information for an asset.
    ///
    /// Endpoint: `GET /api/v2/assets/{assetKey}/profile`
    ///
    /// # Errors
    ///
    /// Returns a `MessariError` on transport failure or a non-JSON body.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn get_asset_profile(
        &self,
        asset_key: &str,
        fields: Option<&str>,
    ) -> Result<Value, MessariError> {
        api::fetch_with_fields(self, &api::profile_path(asset_key), fields).await
    }

    /// Gets all quantitative metrics for an asset.
    ///
    /// Endpoint: `GET /api/v1/assets/{assetKey}/metrics`
    ///
    /// # Errors
    ///
    /// Returns a `MessariError` on transport failure or a non-JSON body.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn get_asset_metrics(
        &self,
        asset_key: &str,
        fields: Option<&str>,
    ) -> Result<Value, MessariError> {
        api::fetch_with_fields(self, &api::metrics_path(asset_key), fields).await
    }

    /// Gets the latest market data for an asset.
    ///
    /// The same data is part of [`get_asset_metrics`](Self::get_asset_metrics); this
    /// endpoint is lighter when market data is all you need.
    ///
    /// Endpoint: `GET /api/v1/assets/{assetKey}/metrics/market-data`
    ///
    /// # Errors
    ///
    /// Returns a `MessariError` on transport failure or a non-JSON body.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn get_asset_market_data(
        &self,
        asset_key: &str,
        fields: Option<&str>,
    ) -> Result<Value, MessariError> {
        api::fetch_with_fields(self, &api::market_data_path(asset_key), fields).await
    }

    /// Lists all available timeseries metric ids for assets.
    ///
    /// Endpoint: `GET /api/v1/assets/metrics`
    ///
    /// # Errors
    ///
    /// Returns a `MessariError` on transport failure or a non-JSON body.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn list_asset_timeseries_metric_ids(&self) -> Result<Value, MessariError> {
        self.get(api::LIST_METRIC_IDS, &QueryParams::new()).await
    }
}
