use serde_json::Value;

use crate::core::{MessariClient, MessariError, QueryParams};

pub(crate) const LIST_ASSETS: &str = "/api/v2/assets";
pub(crate) const LIST_METRIC_IDS: &str = "/api/v1/assets/metrics";

pub(crate) fn asset_path(asset_key: &str) -> String {
    format!("/api/v1/assets/{asset_key}")
}

pub(crate) fn profile_path(asset_key: &str) -> String {
    format!("/api/v2/assets/{asset_key}/profile")
}

pub(crate) fn metrics_path(asset_key: &str) -> String {
    format!("/api/v1/assets/{asset_key}/metrics")
}

pub(crate) fn market_data_path(asset_key: &str) -> String {
    format!("/api/v1/assets/{asset_key}/metrics/market-data")
}

/// Shared shape of the single-asset endpoints: one path, an optional `fields` selector.
pub(crate) async fn fetch_with_fields(
    client: &MessariClient,
    path: &str,
    fields: Option<&str>,
) -> Result<Value, MessariError> {
    client.get(path, &QueryParams::with_fields(fields)).await
}
