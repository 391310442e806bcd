//! Error types for REST API operations

use exx_auth::AuthError;

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// HTTP request failed before a response was received
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The exchange understood the request but reported a failure
    ///
    /// Raised for a non-2xx status, an `error` field in the body, or a
    /// `code` field other than `100`.
    #[error("API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// `code` field of the body, if any
        code: Option<String>,
        /// Best-effort human-readable message
        message: String,
        /// Raw response body
        body: String,
    },

    /// The response body could not be parsed as JSON
    #[error("Invalid response: {body}")]
    InvalidResponse {
        /// Raw response body
        body: String,
    },

    /// Missing API credentials for private endpoint
    #[error("Authentication required for this endpoint")]
    AuthRequired,

    /// Invalid request parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Credential loading failed
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A payload did not match the requested typed shape
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl RestError {
    /// HTTP status code associated with this error, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }

    /// Raw response body, for diagnostics
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Self::Api { body, .. } | Self::InvalidResponse { body } => Some(body),
            _ => None,
        }
    }

    /// Check if the exchange rejected the call
    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Check if the response could not be interpreted at all
    pub fn is_invalid_response(&self) -> bool {
        matches!(self, Self::InvalidResponse { .. })
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
