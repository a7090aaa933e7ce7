//! Error types for REST API operations

use crate::types::ApiErrorBody;
use upbit_auth::AuthError;

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Token could not be built
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Missing API credentials for private endpoint
    #[error("Authentication required for this endpoint")]
    AuthRequired,

    /// Network or protocol failure
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// Request timed out
    #[error("Request timed out")]
    Timeout,

    /// Non-2xx response; the body is kept verbatim
    #[error("API error status: {status}, body: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// 2xx response whose body does not match the expected shape
    #[error("Decode error: {source}, body: {body}")]
    Decode {
        /// Decoder error
        #[source]
        source: serde_json::Error,
        /// Raw response body
        body: String,
    },

    /// Invalid request parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl From<reqwest::Error> for RestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(err)
        }
    }
}

impl RestError {
    /// HTTP status of a non-2xx response
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Raw response body, when one was received
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } | Self::Decode { body, .. } => Some(body.as_str()),
            _ => None,
        }
    }

    /// Structured error reported by the exchange, if the body carries one
    pub fn api_error(&self) -> Option<ApiErrorBody> {
        match self {
            Self::Status { body, .. } => serde_json::from_str(body).ok(),
            _ => None,
        }
    }

    /// Check if this error is a 404
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Check if this error indicates rate limiting
    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(429)
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_keeps_body() {
        let err = RestError::Status {
            status: 404,
            body: "not found".to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.body(), Some("not found"));
        assert!(err.is_not_found());
        assert!(err.api_error().is_none());
        assert_eq!(err.to_string(), "API error status: 404, body: not found");
    }

    #[test]
    fn test_api_error_body() {
        let err = RestError::Status {
            status: 401,
            body: r#"{"error":{"name":"invalid_query_payload","message":"JWT verification failed"}}"#
                .to_string(),
        };
        let api = err.api_error().unwrap();
        assert_eq!(api.error.name, "invalid_query_payload");
        assert_eq!(api.error.message, "JWT verification failed");
    }

    #[test]
    fn test_decode_error_keeps_body() {
        let source = serde_json::from_str::<Vec<u8>>("oops").unwrap_err();
        let err = RestError::Decode {
            source,
            body: "oops".to_string(),
        };
        assert_eq!(err.body(), Some("oops"));
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("body: oops"));
    }

    #[test]
    fn test_auth_error_converts() {
        let err: RestError = AuthError::InvalidCredentials("empty".to_string()).into();
        assert!(matches!(err, RestError::Auth(_)));
    }
}
