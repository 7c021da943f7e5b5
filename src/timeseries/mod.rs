mod model;
mod wire;

pub use model::{Point, Series};

use chrono::NaiveDate;
use serde_json::Value;
use std::fmt::Display;

use crate::core::{MessariClient, MessariError, QueryParams};

/// What a time-series request is keyed on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeriesTarget {
    /// An asset id, slug or symbol.
    Asset(String),
    /// A market key (exchange + pair).
    Market(String),
}

impl SeriesTarget {
    pub(crate) fn path(&self, metric_id: &str) -> String {
        match self {
            Self::Asset(k) => format!("/api/v1/assets/{k}/metrics/{metric_id}/time-series"),
            Self::Market(k) => format!("/api/v1/markets/{k}/metrics/{metric_id}/time-series"),
        }
    }
}

/// Sampling interval of a series.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interval {
    M1,
    M5,
    M15,
    M30,
    H1,
    D1,
    W1,
}

impl Interval {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::M1 => "1m",
            Self::M5 => "5m",
            Self::M15 => "15m",
            Self::M30 => "30m",
            Self::H1 => "1h",
            Self::D1 => "1d",
            Self::W1 => "1w",
        }
    }
}

/// Ordering of returned points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

/// Encoding of the timestamp column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimestampFormat {
    UnixMilliseconds,
    UnixSeconds,
    Rfc3339,
}

impl TimestampFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnixMilliseconds => "unix-milliseconds",
            Self::UnixSeconds => "unix-seconds",
            Self::Rfc3339 => "rfc3339",
        }
    }
}

const DATE_FMT: &str = "%Y-%m-%d";

/// A builder for asset and market time-series requests.
///
/// All range parameters are inclusive of the given date. Parameters not covered by a
/// typed setter go through [`param`](Self::param) and are sent unmodified.
pub struct TimeseriesBuilder {
    client: MessariClient,
    target: SeriesTarget,
    metric_id: String,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    before: Option<NaiveDate>,
    after: Option<NaiveDate>,
    interval: Option<Interval>,
    columns: Option<String>,
    order: Option<SortOrder>,
    timestamp_format: Option<TimestampFormat>,
    extra: QueryParams,
}

impl TimeseriesBuilder {
    /// Creates a new `TimeseriesBuilder` for `metric_id` on `target`.
    pub fn new(client: &MessariClient, target: SeriesTarget, metric_id: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            target,
            metric_id: metric_id.into(),
            start: None,
            end: None,
            before: None,
            after: None,
            interval: None,
            columns: None,
            order: None,
            timestamp_format: None,
            extra: QueryParams::new(),
        }
    }

    #[must_use]
    pub const fn start(mut self, date: NaiveDate) -> Self {
        self.start = Some(date);
        self
    }

    #[must_use]
    pub const fn end(mut self, date: NaiveDate) -> Self {
        self.end = Some(date);
        self
    }

    #[must_use]
    pub const fn before(mut self, date: NaiveDate) -> Self {
        self.before = Some(date);
        self
    }

    #[must_use]
    pub const fn after(mut self, date: NaiveDate) -> Self {
        self.after = Some(date);
        self
    }

    #[must_use]
    pub const fn interval(mut self, interval: Interval) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Comma-separated subset of the metric's columns (e.g. `open,close`).
    #[must_use]
    pub fn columns(mut self, columns: impl Into<String>) -> Self {
        self.columns = Some(columns.into());
        self
    }

    #[must_use]
    pub const fn order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    #[must_use]
    pub const fn timestamp_format(mut self, fmt: TimestampFormat) -> Self {
        self.timestamp_format = Some(fmt);
        self
    }

    /// Adds an arbitrary query parameter, sent as-is.
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

    pub(crate) fn request_parts(&self) -> (String, QueryParams) {
        let date = |d: Option<NaiveDate>| d.map(|d| d.format(DATE_FMT).to_string());
        let mut qp = QueryParams::new();
        qp.set_opt("start", date(self.start))
            .set_opt("end", date(self.end))
            .set_opt("before", date(self.before))
            .set_opt("after", date(self.after))
            .set_opt("interval", self.interval.map(Interval::as_str))
            .set_opt("columns", self.columns.as_deref())
            .set_opt("order", self.order.map(SortOrder::as_str))
            .set_opt(
                "timestamp-format",
                self.timestamp_format.map(TimestampFormat::as_str),
            )
            .merge(self.extra.clone());
        (self.target.path(&self.metric_id), qp)
    }

    /// Executes the request and returns the raw body.
    ///
    /// # Errors
    ///
    /// Returns a `MessariError` on transport failure or a non-JSON body.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(metric = %self.metric_id)))]
    pub async fn fetch(self) -> Result<Value, MessariError> {
        let (path, qp) = self.request_parts();
        self.client.get(&path, &qp).await
    }

    /// Executes the request and reads the values table into a [`Series`].
    ///
    /// Returns `Ok(None)` when the body is not a success envelope carrying a values table
    /// (an API error, or a non-JSON `format` requested through `param`).
    ///
    /// # Errors
    ///
    /// Returns a `MessariError` on transport failure or a non-JSON body.
    pub async fn fetch_series(self) -> Result<Option<Series>, MessariError> {
        let body = self.fetch().await?;
        Ok(Series::from_body(&body))
    }
}

impl MessariClient {
    /// Starts a time-series request for an asset metric.
    pub fn asset_timeseries(
        &self,
        asset_key: impl Into<String>,
        metric_id: impl Into<String>,
    ) -> TimeseriesBuilder {
        TimeseriesBuilder::new(self, SeriesTarget::Asset(asset_key.into()), metric_id)
    }

    /// Starts a time-series request for a market metric.
    pub fn market_timeseries(
        &self,
        market_key: impl Into<String>,
        metric_id: impl Into<String>,
    ) -> TimeseriesBuilder {
        TimeseriesBuilder::new(self, SeriesTarget::Market(market_key.into()), metric_id)
    }

    /// Retrieves historical time-series data for an asset, passing `params`
    /// (`start`, `end`, `before`, `after`, `interval`, `columns`, `order`, `format`,
    /// `timestamp-format`, ...) through unmodified.
    ///
    /// Endpoint: `GET /api/v1/assets/{assetKey}/metrics/{metricId}/time-series`
    ///
    /// # Errors
    ///
    /// Returns a `MessariError` on transport failure or a non-JSON body.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, params), err))]
    pub async fn get_asset_timeseries(
        &self,
        asset_key: &str,
        metric_id: &str,
        params: QueryParams,
    ) -> Result<Value, MessariError> {
        let path = SeriesTarget::Asset(asset_key.to_string()).path(metric_id);
        self.get(&path, &params).await
    }

    /// Retrieves historical time-series data for a market, passing `params` through unmodified.
    ///
    /// Endpoint: `GET /api/v1/markets/{marketKey}/metrics/{metricId}/time-series`
    ///
    /// # Errors
    ///
    /// Returns a `MessariError` on transport failure or a non-JSON body.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, params), err))]
    pub async fn get_market_timeseries(
        &self,
        market_key: &str,
        metric_id: &str,
        params: QueryParams,
    ) -> Result<Value, MessariError> {
        let path = SeriesTarget::Market(market_key.to_string()).path(metric_id);
        self.get(&path, &params).await
    }
}
