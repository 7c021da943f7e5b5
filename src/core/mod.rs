//! Core components of the `messari-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`MessariClient`] and its builder.
//! - The primary [`MessariError`] type.
//! - The ordered [`QueryParams`] mapping every request is assembled from.
//! - The [`Envelope`] view over response bodies.

/// The main client (`MessariClient`), builder, and configuration.
pub mod client;
/// Classification of response bodies into success and error envelopes.
pub mod envelope;
/// The primary error type (`MessariError`) for the crate.
pub mod error;
/// Ordered query-parameter mapping.
pub mod params;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::MessariClient`
pub use client::{MessariClient, MessariClientBuilder};
pub use envelope::{ApiError, Envelope};
pub use error::MessariError;
pub use params::QueryParams;
