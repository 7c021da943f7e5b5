use serde_json::Value;

use crate::core::{MessariClient, MessariError, QueryParams};

pub(crate) const LIST_MARKETS: &str = "/api/v1/markets";

impl MessariClient {
    /// Gets the list of all exchanges and pairs covered by the real-time market data API.
    ///
    /// Endpoint: `GET /api/v1/markets`
    ///
    /// # Errors
    ///
    /// Returns a `MessariError` on transport failure or a non-JSON body.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn list_all_markets(&self, fields: Option<&str>) -> Result<Value, MessariError> {
        self.get(LIST_MARKETS, &QueryParams::with_fields(fields))
            .await
    }
}
