//! Error types shared by the request paths.

use thiserror::Error;

/// Why an asynchronous request produced no usable reply.
///
/// Transport and malformed replies are surfaced to the reader the same way;
/// the split only matters for the log line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The request never completed (offline, CORS, refused connection).
    #[error("network error: {0}")]
    Transport(String),
    /// The server replied, but not with the JSON we expect.
    #[error("parse error: {0}")]
    Malformed(String),
    /// The form target could not be resolved into a URL.
    #[error("invalid target `{target}`: {reason}")]
    InvalidTarget {
        /// Raw `action` value (or page URL) that failed to resolve.
        target: String,
        /// Parser message.
        reason: String,
    },
}

impl RequestError {
    /// Build an [`RequestError::InvalidTarget`] from a `url` parse failure.
    pub fn invalid_target(target: &str, err: url::ParseError) -> Self {
        Self::InvalidTarget {
            target: target.to_string(),
            reason: err.to_string(),
        }
    }
}
