//! Signed request tokens
//!
//! Every private call carries `Authorization: Bearer <token>` where the token
//! is a compact HS256 token over these claims:
//!
//! | claim            | present                          |
//! |------------------|----------------------------------|
//! | `access_key`     | always                           |
//! | `nonce`          | always, UUID v4, never reused     |
//! | `query_hash`     | only when parameters are present |
//! | `query_hash_alg` | with `query_hash`, `"SHA512"`    |
//!
//! `query_hash` is the hex SHA-512 of the raw (unescaped) canonical query
//! string. The server recomputes it from the values it receives, so the
//! parameters used here must be exactly the ones sent.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD as BASE64URL, Engine};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256, Sha512};
use upbit_types::CanonicalParams;
use uuid::Uuid;

use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

/// Digest algorithm tag sent in `query_hash_alg`
pub const QUERY_HASH_ALG: &str = "SHA512";

/// Token header
#[derive(Debug, Serialize)]
struct Header {
    alg: &'static str,
    typ: &'static str,
}

const HEADER: Header = Header {
    alg: "HS256",
    typ: "JWT",
};

/// Claim set of a request token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Access key of the caller
    pub access_key: String,
    /// Unique per request
    pub nonce: String,
    /// Hex SHA-512 of the canonical query string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_hash: Option<String>,
    /// Always `SHA512` when `query_hash` is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_hash_alg: Option<String>,
}

impl TokenClaims {
    /// Build the claims for one request
    ///
    /// Digest claims are only added when `params` is non-empty.
    pub fn new(access_key: impl Into<String>, nonce: impl Into<String>, params: &CanonicalParams) -> Self {
        let (query_hash, query_hash_alg) = if params.is_empty() {
            (None, None)
        } else {
            (Some(query_hash(params)), Some(QUERY_HASH_ALG.to_string()))
        };

        Self {
            access_key: access_key.into(),
            nonce: nonce.into(),
            query_hash,
            query_hash_alg,
        }
    }

    /// Read the claims of a token without checking its signature
    pub fn decode_unverified(token: &str) -> AuthResult<Self> {
        let (_, payload, _) = split_token(token)?;
        decode_segment(payload)
    }
}

/// Generate a nonce for one request
pub fn generate_nonce() -> String {
    Uuid::new_v4().to_string()
}

/// Hex-encoded SHA-512 of the raw canonical query string
pub fn query_hash(params: &CanonicalParams) -> String {
    let digest = Sha512::digest(params.query_string().as_bytes());
    hex::encode(digest)
}

/// Sign a claim set with HMAC-SHA256 into `header.claims.signature`
pub fn sign_claims(claims: &TokenClaims, secret: &[u8]) -> AuthResult<String> {
    let header = serde_json::to_vec(&HEADER)?;
    let payload = serde_json::to_vec(claims)?;

    let signing_input = format!("{}.{}", BASE64URL.encode(header), BASE64URL.encode(payload));
    let signature = mac_for(secret, &signing_input)?.finalize().into_bytes();

    Ok(format!("{}.{}", signing_input, BASE64URL.encode(signature)))
}

/// Check a token's signature and return its claims
pub fn verify_token(token: &str, secret: &[u8]) -> AuthResult<TokenClaims> {
    let (header, payload, signature) = split_token(token)?;

    let signature = BASE64URL
        .decode(signature)
        .map_err(|e| AuthError::MalformedToken(format!("signature: {}", e)))?;

    mac_for(secret, &format!("{}.{}", header, payload))?
        .verify_slice(&signature)
        .map_err(|_| AuthError::InvalidSignature)?;

    decode_segment(payload)
}

fn mac_for(secret: &[u8], signing_input: &str) -> AuthResult<HmacSha256> {
    let mut mac =
        HmacSha256::new_from_slice(secret).map_err(|e| AuthError::Signing(e.to_string()))?;
    mac.update(signing_input.as_bytes());
    Ok(mac)
}

fn split_token(token: &str) -> AuthResult<(&str, &str, &str)> {
    let mut parts = token.split('.');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(header), Some(payload), Some(signature), None) => Ok((header, payload, signature)),
        _ => Err(AuthError::MalformedToken("expected three segments".to_string())),
    }
}

fn decode_segment<T: serde::de::DeserializeOwned>(segment: &str) -> AuthResult<T> {
    let bytes = BASE64URL
        .decode(segment)
        .map_err(|e| AuthError::MalformedToken(e.to_string()))?;
    Ok(serde_json::from_slice(&bytes)?)
}
