//! Public client surface + builder.
//! Defaults (host, header name, timeout, UA) live in `constants`.

mod constants;

use crate::core::{MessariError, QueryParams, net};
use constants::{API_KEY_HEADER, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, USER_AGENT};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder};
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// The Messari API client.
///
/// Holds the optional API key (installed as a default header) and a pooled
/// `reqwest` connection handle. Cloning is cheap and clones share the pool.
///
/// Every operation issues exactly one GET and returns the decoded JSON body,
/// whatever the HTTP status. API-level errors such as an unknown asset arrive as
/// `Ok` bodies; classify them with [`Envelope`](crate::Envelope).
///
/// # Example
///
/// ```no_run
/// # use messari_rs::{Envelope, MessariClient};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = MessariClient::new(None)?;
/// let body = client.get_asset("btc", Some("id,symbol,name")).await?;
/// match Envelope::from(body) {
///     Envelope::Data { data, .. } => println!("{}", data["symbol"]),
///     Envelope::Error(e) => eprintln!("API error {}: {:?}", e.code, e.message),
///     Envelope::Unrecognized(v) => eprintln!("unexpected body: {v}"),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MessariClient {
    http: Client,
    base_url: Url,
    has_api_key: bool,
}

impl Default for MessariClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl MessariClient {
    /// Create a new builder.
    pub fn builder() -> MessariClientBuilder {
        MessariClientBuilder::default()
    }

    /// Creates a client against the public host, optionally authenticated with `api_key`.
    ///
    /// No network I/O happens here.
    ///
    /// # Errors
    ///
    /// Returns [`MessariError::InvalidApiKey`] if the key is not a valid header value.
    pub fn new(api_key: Option<&str>) -> Result<Self, MessariError> {
        let mut b = Self::builder();
        if let Some(key) = api_key {
            b = b.api_key(key);
        }
        b.build()
    }

    /// The base URL request paths are appended to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Whether requests carry the `x-messari-api-key` header.
    pub fn has_api_key(&self) -> bool {
        self.has_api_key
    }

    /// Sends one request and returns the decoded JSON body.
    ///
    /// `path` is appended verbatim to the base URL, so it may already carry a
    /// query string (as the asset-list flags do); `query` pairs are appended after it.
    /// Non-2xx responses are not errors: their JSON body is returned like any other.
    ///
    /// # Errors
    ///
    /// Returns [`MessariError::Http`] on transport failures and timeouts and
    /// [`MessariError::Json`] when the body is not JSON.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, query), err))]
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        query: &QueryParams,
    ) -> Result<Value, MessariError> {
        let resp = self.prepare(method, path, query)?.send().await?;

        #[cfg(feature = "tracing")]
        tracing::debug!(status = resp.status().as_u16(), url = %resp.url(), "response received");

        let body = net::get_text(resp).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// GET projection of [`request`](Self::request); every public operation goes through here.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn get(&self, path: &str, query: &QueryParams) -> Result<Value, MessariError> {
        self.request(Method::GET, path, query).await
    }

    /* -------- internal helpers used by other modules -------- */

    pub(crate) fn url_for(&self, path: &str) -> Result<Url, MessariError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{path}"))?)
    }

    pub(crate) fn prepare(
        &self,
        method: Method,
        path: &str,
        query: &QueryParams,
    ) -> Result<RequestBuilder, MessariError> {
        let mut req = self.http.request(method, self.url_for(path)?);
        if !query.is_empty() {
            req = req.query(query.as_pairs());
        }
        Ok(req)
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct MessariClientBuilder {
    api_key: Option<String>,
    base_url: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl MessariClientBuilder {
    /// Authenticate every request with `x-messari-api-key: <key>`.
    /// An empty key is treated as no key.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the API host (e.g., `https://data.messari.io`).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set the overall per-request timeout. Default: 30 seconds.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Fails if the API key is not a valid header value, the default base URL
    /// cannot be parsed, or the underlying HTTP client cannot be initialized.
    pub fn build(self) -> Result<MessariClient, MessariError> {
        let base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        // An empty key means anonymous access, same as no key.
        let api_key = self.api_key.filter(|k| !k.is_empty());

        let mut headers = HeaderMap::new();
        if let Some(key) = &api_key {
            let mut value = HeaderValue::from_str(key)?;
            value.set_sensitive(true);
            headers.insert(API_KEY_HEADER, value);
        }

        let mut httpb = Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .default_headers(headers)
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT));

        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        Ok(MessariClient {
            http: httpb.build()?,
            base_url,
            has_api_key: api_key.is_some(),
        })
    }
}
