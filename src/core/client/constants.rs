//! Centralized constants for default endpoints, headers and timeouts.

use std::time::Duration;

/// Default UA identifying this library and its version.
pub(crate) const USER_AGENT: &str = concat!("messari-rs/", env!("CARGO_PKG_VERSION"));

/// Messari data API host; request paths are appended verbatim.
pub(crate) const DEFAULT_BASE_URL: &str = "https://data.messari.io";

/// Header carrying the optional API key.
pub(crate) const API_KEY_HEADER: &str = "x-messari-api-key";

/// Overall per-request timeout applied unless overridden on the builder.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
