//! One HTTP round trip per call
//!
//! GET and DELETE carry the canonical parameters in the URL query, percent
//! encoded. POST carries them as a JSON object body. Private calls add a
//! bearer token whose digest is computed over the *raw* canonical string of
//! the same parameters; the server decodes the query and recomputes the digest
//! over the raw values, so the two forms must come from one `CanonicalParams`.

use crate::error::{RestError, RestResult};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use upbit_auth::Credentials;
use upbit_types::CanonicalParams;

/// Whether a call is signed
#[derive(Debug, Clone, Copy)]
pub enum Access<'a> {
    /// No credential attached
    Public,
    /// Signed with these credentials
    Private(&'a Credentials),
}

impl Access<'_> {
    /// Returns true for signed calls
    pub fn is_private(&self) -> bool {
        matches!(self, Self::Private(_))
    }
}

/// HTTP transport bound to one base URL
///
/// Holds a single `reqwest::Client`, whose connection pool is shared by every
/// clone and safe for concurrent use.
#[derive(Debug, Clone)]
pub struct Transport {
    http_client: Client,
    base_url: String,
}

impl Transport {
    /// Create a transport for the given base URL
    pub fn new(http_client: Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of an endpoint, without query
    pub fn url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// Execute one call and decode the JSON response into `T`
    ///
    /// - non-2xx: [`RestError::Status`] with the verbatim body
    /// - undecodable 2xx body: [`RestError::Decode`] with the verbatim body
    /// - timeout: [`RestError::Timeout`]
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        params: &CanonicalParams,
        access: Access<'_>,
    ) -> RestResult<T> {
        let mut url = self.url(endpoint);

        let builder = if method == Method::GET || method == Method::DELETE {
            if !params.is_empty() {
                let query = params
                    .form_encoded()
                    .map_err(|e| RestError::InvalidParameter(e.to_string()))?;
                url.push('?');
                url.push_str(&query);
            }
            self.http_client.request(method.clone(), &url)
        } else {
            self.http_client
                .request(method.clone(), &url)
                .body(params.to_json_body().to_string())
        };

        let mut builder = builder.header(CONTENT_TYPE, "application/json");

        if let Access::Private(credentials) = access {
            let token = credentials.bearer_token(params)?;
            builder = builder.bearer_auth(token);
        }

        debug!(%method, endpoint, private = access.is_private(), "Sending request");

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(%method, endpoint, status = status.as_u16(), "Request failed");
            return Err(RestError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let decoded: Result<T, serde_json::Error> = serde_json::from_str(&body);
        decoded.map_err(|source| {
            warn!(%method, endpoint, error = %source, "Failed to decode response");
            RestError::Decode { source, body }
        })
    }

    /// Unsigned GET
    pub async fn get_public<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &CanonicalParams,
    ) -> RestResult<T> {
        self.request(Method::GET, endpoint, params, Access::Public).await
    }

    /// Signed call
    pub async fn send_private<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        params: &CanonicalParams,
        credentials: &Credentials,
    ) -> RestResult<T> {
        self.request(method, endpoint, params, Access::Private(credentials))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let transport = Transport::new(Client::new(), "https://api.upbit.com/v1/");
        assert_eq!(transport.url("accounts"), "https://api.upbit.com/v1/accounts");
        assert_eq!(transport.url("/orders/chance"), "https://api.upbit.com/v1/orders/chance");

        let transport = Transport::new(Client::new(), "http://127.0.0.1:1234");
        assert_eq!(transport.url("candles/days"), "http://127.0.0.1:1234/candles/days");
    }

    #[test]
    fn test_access_kind() {
        let creds = Credentials::new("access", "secret").unwrap();
        assert!(!Access::Public.is_private());
        assert!(Access::Private(&creds).is_private());
    }
}
