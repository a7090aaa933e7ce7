//! Error types for authentication operations

/// Errors that can occur while building or checking request tokens
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Invalid API credentials
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    /// Key material rejected by the MAC
    #[error("Signing failed: {0}")]
    Signing(String),

    /// Claims could not be serialized
    #[error("Claim serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Token is not a three-part compact token
    #[error("Malformed token: {0}")]
    MalformedToken(String),

    /// Token signature does not match
    #[error("Token signature mismatch")]
    InvalidSignature,
}

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;
