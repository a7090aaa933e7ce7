//! API credentials and per-request signing
//!
//! # Security
//!
//! The secret key is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use secrecy::{ExposeSecret, SecretBox};
use tracing::debug;
use upbit_types::CanonicalParams;

use crate::error::{AuthError, AuthResult};
use crate::token::{generate_nonce, sign_claims, TokenClaims};

/// Environment variable holding the access key
pub const ACCESS_KEY_ENV: &str = "UPBIT_ACCESS_KEY";

/// Environment variable holding the secret key
pub const SECRET_KEY_ENV: &str = "UPBIT_SECRET_KEY";

/// API credentials for authenticated requests
///
/// The secret key is zeroized when the Credentials are dropped.
pub struct Credentials {
    /// Access key (public, sent in every token)
    access_key: String,
    /// Secret key bytes (HMAC key, zeroized on drop)
    secret_key: SecretBox<Vec<u8>>,
}

impl Credentials {
    /// Create credentials from an access key and a secret key
    ///
    /// Both keys must be non-empty.
    pub fn new(access_key: impl Into<String>, secret_key: impl AsRef<str>) -> AuthResult<Self> {
        let access_key = access_key.into();
        let secret_key = secret_key.as_ref();

        if access_key.trim().is_empty() {
            return Err(AuthError::InvalidCredentials("access key is empty".to_string()));
        }
        if secret_key.is_empty() {
            return Err(AuthError::InvalidCredentials("secret key is empty".to_string()));
        }

        Ok(Self {
            access_key,
            secret_key: SecretBox::new(Box::new(secret_key.as_bytes().to_vec())),
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `UPBIT_ACCESS_KEY` and `UPBIT_SECRET_KEY`. A variable that is
    /// set but empty counts as missing.
    pub fn from_env() -> AuthResult<Self> {
        let access_key = read_env(ACCESS_KEY_ENV)?;
        let secret_key = read_env(SECRET_KEY_ENV)?;

        Self::new(access_key, secret_key)
    }

    /// Get the access key
    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    pub(crate) fn secret_key(&self) -> &[u8] {
        self.secret_key.expose_secret()
    }

    /// Start signing one request
    pub fn signer(&self) -> RequestSigner<'_> {
        RequestSigner::new(self)
    }

    /// Build a fresh signed token over the given parameters
    ///
    /// Each call uses a new nonce, so the token is valid for one request only.
    pub fn bearer_token(&self, params: &CanonicalParams) -> AuthResult<String> {
        self.signer().sign(params)
    }
}

fn read_env(name: &str) -> AuthResult<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(AuthError::EnvVarNotSet(name.to_string())),
    }
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            access_key: self.access_key.clone(),
            secret_key: SecretBox::new(Box::new(self.secret_key.expose_secret().clone())),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shown: String = self.access_key.chars().take(8).collect();
        f.debug_struct("Credentials")
            .field("access_key", &format!("{}...", shown))
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

/// Signs exactly one request
///
/// Binds the credentials to a freshly generated nonce. Create a new signer
/// for every request.
#[derive(Debug)]
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
    nonce: String,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer with a fresh nonce
    pub fn new(credentials: &'a Credentials) -> Self {
        Self {
            credentials,
            nonce: generate_nonce(),
        }
    }

    /// Get the nonce for this request
    pub fn nonce(&self) -> &str {
        &self.nonce
    }

    /// Get the access key
    pub fn access_key(&self) -> &str {
        self.credentials.access_key()
    }

    /// Claims that will be signed for these parameters
    pub fn claims(&self, params: &CanonicalParams) -> TokenClaims {
        TokenClaims::new(self.credentials.access_key(), self.nonce.clone(), params)
    }

    /// Sign the claims for these parameters into a compact token
    pub fn sign(&self, params: &CanonicalParams) -> AuthResult<String> {
        let claims = self.claims(params);
        let token = sign_claims(&claims, self.credentials.secret_key())?;

        debug!(
            nonce = %self.nonce,
            with_query_hash = claims.query_hash.is_some(),
            "Signed request token"
        );

        Ok(token)
    }
}
