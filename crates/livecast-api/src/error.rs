//! Error types for broadcast API calls.

use thiserror::Error;

/// Errors that can occur when calling the streaming platform.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never reached the platform or the connection dropped.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The platform rejected the request.
    #[error("Platform rejected request ({code}): {message}")]
    Rejected {
        /// HTTP-style status code reported by the platform.
        code: u16,
        /// Platform-provided error message.
        message: String,
    },

    /// The platform's response could not be decoded.
    #[error("Malformed response: {0}")]
    Decode(String),

    /// The client's credentials were not accepted.
    #[error("Authentication failed: {0}")]
    Unauthorized(String),
}

/// Result alias for broadcast API calls.
pub type ApiResult<T> = Result<T, ApiError>;
