use serde_json::Value;
use std::fmt::Display;

use crate::core::{MessariClient, MessariError, QueryParams};

pub(crate) const LIST_NEWS: &str = "/api/v1/news";

/// A builder for the paginated news feed, either global or for one asset.
///
/// `page` starts at 1; increment it until the server returns an empty array. A page
/// of `0` is treated as unset and omitted from the request.
pub struct NewsBuilder {
    client: MessariClient,
    asset_key: Option<String>,
    page: Option<u32>,
    fields: Option<String>,
    extra: QueryParams,
}

impl NewsBuilder {
    /// Creates a builder for the news feed across all assets.
    pub fn new(client: &MessariClient) -> Self {
        Self {
            client: client.clone(),
            asset_key: None,
            page: None,
            fields: None,
            extra: QueryParams::new(),
        }
    }

    /// Creates a builder for the news feed of one asset.
    pub fn for_asset(client: &MessariClient, asset_key: impl Into<String>) -> Self {
        Self {
            asset_key: Some(asset_key.into()),
            ..Self::new(client)
        }
    }

    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Server-side field selector.
    #[must_use]
    pub fn fields(mut self, fields: impl Into<String>) -> Self {
        self.fields = Some(fields.into());
        self
    }

    /// Adds an arbitrary query parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.extra.set(key, value);
        self
    }

    pub(crate) fn request_parts(&self) -> (String, QueryParams) {
        let path = match &self.asset_key {
            Some(k) => format!("{LIST_NEWS}/{k}"),
            None => LIST_NEWS.to_string(),
        };
        let mut qp = QueryParams::with_fields(self.fields.as_deref());
        qp.set_opt("page", self.page.filter(|p| *p != 0))
            .merge(self.extra.clone());
        (path, qp)
    }

    /// Executes the request.
    ///
    /// # Errors
    ///
    /// Returns a `MessariError` on transport failure or a non-JSON body.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(asset = ?self.asset_key)))]
    pub async fn fetch(self) -> Result<Value, MessariError> {
        let (path, qp) = self.request_parts();
        self.client.get(&path, &qp).await
    }
}

impl MessariClient {
    /// Starts a request for the latest news and analysis across all assets.
    pub fn news(&self) -> NewsBuilder {
        NewsBuilder::new(self)
    }

    /// Starts a request for the latest news and analysis of one asset.
    pub fn news_for_asset(&self, asset_key: impl Into<String>) -> NewsBuilder {
        NewsBuilder::for_asset(self, asset_key)
    }

    /// Gets the latest (paginated) news and analysis for all assets.
    ///
    /// Endpoint: `GET /api/v1/news`
    ///
    /// # Errors
    ///
    /// Returns a `MessariError` on transport failure or a non-JSON body.
    pub async fn list_news(
        &self,
        page: Option<u32>,
        fields: Option<&str>,
    ) -> Result<Value, MessariError> {
        let mut b = self.news();
        b.page = page;
        b.fields = fields.map(str::to_string);
        b.fetch().await
    }

    /// Gets the latest (paginated) news and analysis for one asset.
    ///
    /// Endpoint: `GET /api/v1/news/{assetKey}`
    ///
    /// # Errors
    ///
    /// Returns a `MessariError` on transport failure or a non-JSON body.
    pub async fn list_news_for_asset(
        &self,
        asset_key: &str,
        page: Option<u32>,
        fields: Option<&str>,
    ) -> Result<Value, MessariError> {
        let mut b = self.news_for_asset(asset_key);
        b.page = page;
        b.fields = fields.map(str::to_string);
        b.fetch().await
    }
}
