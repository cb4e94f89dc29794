//! Error types for catalog service calls.

use thiserror::Error;

/// Errors that can occur when talking to the catalog service.
///
/// Nothing here is fatal: every failure leaves prior client state intact
/// and is recoverable by retrying the triggering gesture.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (connect failure, timeout, ...).
    #[error("Request to '{endpoint}' failed: {source}")]
    Network {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status.
    #[error("Service error from '{endpoint}': {status} - {message}")]
    Service {
        endpoint: String,
        status: u16,
        message: String,
    },

    /// The response body could not be decoded.
    #[error("Failed to decode response from '{endpoint}': {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// A search query that is empty after trimming is rejected
    /// client-side, before any request is issued.
    #[error("Search query is empty")]
    EmptyQuery,

    /// The persist call succeeded but returned no product id.
    #[error("Persist response contained no product_id")]
    MissingProductId,
}

impl ApiError {
    /// Whether the failure happened before a response arrived.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_error_display() {
        let err = ApiError::Service {
            endpoint: "/api/v1/search".into(),
            status: 500,
            message: "boom".into(),
        };
        assert_eq!(
            err.to_string(),
            "Service error from '/api/v1/search': 500 - boom"
        );
    }

    #[test]
    fn empty_query_is_not_network() {
        assert!(!ApiError::EmptyQuery.is_network());
    }
}
