//! # Client Errors
//!
//! Error types for talking to an RSVP node.

use rsvp_registry::PayloadError;
use thiserror::Error;

/// Errors that can occur while talking to a node.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Network or HTTP error.
    #[error("failed to connect to server: {0}")]
    Network(#[from] reqwest::Error),

    /// The node rejected the request and explained why.
    #[error("{0}")]
    Rejected(String),

    /// The node answered with a status other than 200 or 400.
    #[error("unexpected response status {status}")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
    },

    /// A 200 response whose body is not JSON.
    #[error("200 response is not JSON: {0}")]
    NotJson(String),

    /// A 200 response with the wrong shape.
    #[error("invalid response: {0}")]
    InvalidResponse(#[from] PayloadError),
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
