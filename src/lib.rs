//! messari-rs: ergonomic client for the Messari crypto data API.
//!
//! Every operation builds one GET request against `https://data.messari.io` and
//! returns the decoded JSON body as a [`serde_json::Value`], success or not.
//! API-level errors (unknown asset, rate limit, ...) come back as ordinary bodies;
//! use [`Envelope`] to tell them apart. Only transport failures and non-JSON
//! bodies surface as [`MessariError`].
//!
//! The free tier allows 20 requests per minute; the client does not throttle, so
//! space your calls accordingly.
//!
//! ```no_run
//! # use messari_rs::{Envelope, MessariClient};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = MessariClient::builder().api_key("my-key").build()?;
//! let assets = client.list_assets().with_metrics(true).fetch().await?;
//! if let Envelope::Error(e) = Envelope::classify(&assets) {
//!     eprintln!("{}: {:?}", e.code, e.message);
//! }
//! # Ok(())
//! # }
//! ```

pub mod asset;
pub mod assets;
pub mod core;
pub mod markets;
pub mod news;
pub mod timeseries;

pub use asset::Asset;
pub use assets::{AssetFlags, AssetsBuilder};
pub use crate::core::{
    ApiError, Envelope, MessariClient, MessariClientBuilder, MessariError, QueryParams,
};
pub use news::NewsBuilder;
pub use reqwest::Method;
pub use timeseries::{
    Interval, Point, Series, SeriesTarget, SortOrder, TimeseriesBuilder, TimestampFormat,
};
