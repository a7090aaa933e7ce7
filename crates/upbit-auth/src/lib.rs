//! Credentials and signed request tokens for the Upbit REST API
//!
//! Private endpoints authenticate each call with a short-lived token signed
//! with the caller's secret key. A token binds the access key, a fresh nonce
//! and, when the request has parameters, a SHA-512 digest of the canonical
//! query string.
//!
//! # Example
//!
//! ```
//! use upbit_auth::{Credentials, TokenClaims};
//! use upbit_types::CanonicalParams;
//!
//! let creds = Credentials::new("my-access-key", "my-secret-key").unwrap();
//! let params = CanonicalParams::new().with("market", "KRW-BTC");
//!
//! let token = creds.bearer_token(&params).unwrap();
//! let claims = TokenClaims::decode_unverified(&token).unwrap();
//! assert_eq!(claims.access_key, "my-access-key");
//! assert_eq!(claims.query_hash_alg.as_deref(), Some("SHA512"));
//! ```

mod credentials;
mod error;
mod token;

pub use credentials::{Credentials, RequestSigner, ACCESS_KEY_ENV, SECRET_KEY_ENV};
pub use error::{AuthError, AuthResult};
pub use token::{
    generate_nonce, query_hash, sign_claims, verify_token, TokenClaims, QUERY_HASH_ALG,
};
