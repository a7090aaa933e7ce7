//! Token properties observed from outside the crate

use upbit_auth::{query_hash, verify_token, Credentials, TokenClaims};
use upbit_types::{CanonicalParams, EncodeParams, RequestParams};

const SECRET: &str = "test-secret-key";

fn credentials() -> Credentials {
    Credentials::new("test-access-key", SECRET).unwrap()
}

#[test]
fn test_tokens_differ_only_by_nonce() {
    let creds = credentials();
    let params = RequestParams::new().market("KRW-BTC").count(200).encode_params();

    let first = creds.bearer_token(&params).unwrap();
    let second = creds.bearer_token(&params).unwrap();
    assert_ne!(first, second);

    let first = verify_token(&first, SECRET.as_bytes()).unwrap();
    let second = verify_token(&second, SECRET.as_bytes()).unwrap();

    assert_ne!(first.nonce, second.nonce);
    assert_eq!(first.access_key, second.access_key);
    assert_eq!(first.query_hash, second.query_hash);
    assert_eq!(first.query_hash_alg, second.query_hash_alg);
}

#[test]
fn test_empty_params_sign_without_digest() {
    let token = credentials().bearer_token(&CanonicalParams::new()).unwrap();
    let claims = verify_token(&token, SECRET.as_bytes()).unwrap();

    assert_eq!(claims.access_key, "test-access-key");
    assert!(claims.query_hash.is_none());
    assert!(claims.query_hash_alg.is_none());
}

#[test]
fn test_digest_covers_raw_query_string() {
    // A comma stays raw in the digest even though the URL carries %2C
    let params = RequestParams::new().markets("KRW-BTC,KRW-ETH").encode_params();
    let token = credentials().bearer_token(&params).unwrap();
    let claims = TokenClaims::decode_unverified(&token).unwrap();

    assert_eq!(params.query_string(), "markets=KRW-BTC,KRW-ETH");
    assert_eq!(claims.query_hash, Some(query_hash(&params)));
}

#[test]
fn test_zero_fields_do_not_change_digest() {
    let creds = credentials();
    let plain = RequestParams::new().market("KRW-BTC").encode_params();
    let padded = RequestParams::new().market("KRW-BTC").page(0).state("").encode_params();

    let plain = TokenClaims::decode_unverified(&creds.bearer_token(&plain).unwrap()).unwrap();
    let padded = TokenClaims::decode_unverified(&creds.bearer_token(&padded).unwrap()).unwrap();

    assert_eq!(plain.query_hash, padded.query_hash);
}
