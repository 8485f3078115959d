//! Error types for the roster data layer.
//!
//! This module provides:
//! - [`ProviderError`]: what a single provider attempt can fail with
//! - [`FailureReason`]: the coarse classification the chain records
//! - [`RosterError`]: the few errors that escape the provider chain

mod reason;

pub use reason::FailureReason;

use thiserror::Error;

/// Errors a provider can return from a single fetch.
///
/// Each variant maps onto a [`FailureReason`] via [`reason`](Self::reason).
/// None of them are terminal: the chain always tries the next provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The request never produced a response (refused, reset, DNS).
    #[error("Network error: {provider} - {message}")]
    Network {
        provider: String,
        message: String,
    },

    /// The provider did not answer within its attempt timeout.
    #[error("Timeout: {provider}")]
    Timeout { provider: String },

    /// The provider answered with a non-success HTTP status.
    #[error("HTTP {status} from {provider}")]
    Status { provider: String, status: u16 },

    /// The provider rejected the call because of its quota (HTTP 429).
    #[error("Rate limited: {provider}")]
    RateLimited { provider: String },

    /// The response body could not be decoded into the expected shape.
    #[error("Parse error: {provider} - {message}")]
    Parse {
        provider: String,
        message: String,
    },

    /// The provider has no way to answer this query.
    #[error("Operation '{operation}' not supported by {provider}")]
    NotSupported {
        operation: String,
        provider: String,
    },
}

impl ProviderError {
    /// Returns the failure classification for this error.
    ///
    /// ```
    /// use nba_grid_roster::errors::{FailureReason, ProviderError};
    ///
    /// let error = ProviderError::Timeout { provider: "BALLDONTLIE".to_string() };
    /// assert_eq!(error.reason(), FailureReason::NetworkError);
    /// ```
    pub fn reason(&self) -> FailureReason {
        match self {
            Self::Network { .. } | Self::Timeout { .. } => FailureReason::NetworkError,
            Self::Status { .. } => FailureReason::NonSuccessStatus,
            Self::RateLimited { .. } => FailureReason::RateLimited,
            Self::Parse { .. } => FailureReason::ParseError,
            Self::NotSupported { .. } => FailureReason::NotSupported,
        }
    }

    /// Map a reqwest transport error for `provider`.
    pub fn from_reqwest(provider: &str, error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout {
                provider: provider.to_string(),
            }
        } else if error.is_decode() {
            Self::Parse {
                provider: provider.to_string(),
                message: error.to_string(),
            }
        } else {
            Self::Network {
                provider: provider.to_string(),
                message: error.to_string(),
            }
        }
    }
}

/// Errors surfaced by the provider chain and the services built on it.
#[derive(Error, Debug)]
pub enum RosterError {
    /// Every provider in the chain was skipped or failed.
    #[error("All providers failed for chain '{chain}': {summary}")]
    AllProvidersFailed { chain: String, summary: String },

    /// The chain was built without any provider.
    #[error("No providers configured for chain '{chain}'")]
    NoProviders { chain: String },

    /// A provider succeeded with a payload of the wrong kind.
    #[error("Unexpected payload from chain '{chain}'")]
    UnexpectedPayload { chain: String },
}
