//! Main REST client implementation

use crate::endpoints::{AccountEndpoints, FundingEndpoints, MarketEndpoints, TradingEndpoints};
use crate::error::{RestError, RestResult};
use crate::transport::Transport;
use crate::types::{Account, Chance, Order, OrderRequest};
use reqwest::Client;
use std::time::Duration;
use tracing::info;
use upbit_auth::Credentials;
use upbit_types::{Candle, RequestParams};

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.upbit.com/v1/";

/// Default request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Upbit REST API client
///
/// Provides access to both public and private endpoints. Cloning is cheap and
/// clones share one connection pool.
///
/// # Example
///
/// ```no_run
/// use upbit_rest::{ClientConfig, UpbitRestClient};
/// use upbit_types::RequestParams;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = UpbitRestClient::public()?;
///     let candles = client
///         .market()
///         .get_day_candles(&RequestParams::new().market("KRW-BTC").count(30))
///         .await?;
///
///     // With authentication for private endpoints
///     let auth_client = UpbitRestClient::from_env()?;
///     let accounts = auth_client.get_accounts().await?;
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct UpbitRestClient {
    transport: Transport,
    credentials: Option<Credentials>,
}

impl UpbitRestClient {
    /// Create a new client with custom configuration
    pub fn new(config: ClientConfig) -> RestResult<Self> {
        let user_agent = config
            .user_agent
            .unwrap_or_else(|| format!("upbit-rest/{}", env!("CARGO_PKG_VERSION")));

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(user_agent)
            .build()
            .map_err(RestError::Http)?;

        info!(
            base_url = %config.base_url,
            authenticated = config.credentials.is_some(),
            "Created Upbit REST client"
        );

        Ok(Self {
            transport: Transport::new(http_client, config.base_url),
            credentials: config.credentials,
        })
    }

    /// Create a new client without authentication
    ///
    /// Only public endpoints will be available.
    pub fn public() -> RestResult<Self> {
        Self::new(ClientConfig::default())
    }

    /// Create a new client with credentials
    ///
    /// All endpoints (public and private) will be available.
    pub fn with_credentials(credentials: Credentials) -> RestResult<Self> {
        Self::new(ClientConfig::new().with_credentials(credentials))
    }

    /// Create a client with credentials read from `UPBIT_ACCESS_KEY` and
    /// `UPBIT_SECRET_KEY`
    pub fn from_env() -> RestResult<Self> {
        Self::with_credentials(Credentials::from_env()?)
    }

    /// Check if the client has credentials for private endpoints
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// Underlying transport
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    fn credentials(&self) -> RestResult<&Credentials> {
        self.credentials.as_ref().ok_or(RestError::AuthRequired)
    }

    // ========================================================================
    // Public Quotation Endpoints
    // ========================================================================

    /// Get market endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(&self.transport)
    }

    /// Get daily candles, newest first
    pub async fn get_day_candles(&self, params: &RequestParams) -> RestResult<Vec<Candle>> {
        self.market().get_day_candles(params).await
    }

    // ========================================================================
    // Private Account Endpoints
    // ========================================================================

    /// Get account endpoints (requires credentials)
    pub fn account(&self) -> RestResult<AccountEndpoints<'_>> {
        Ok(AccountEndpoints::new(&self.transport, self.credentials()?))
    }

    /// Get balances
    pub async fn get_accounts(&self) -> RestResult<Vec<Account>> {
        self.account()?.get_accounts().await
    }

    /// Get order availability for a market
    pub async fn get_chance(&self, market: &str) -> RestResult<Chance> {
        self.account()?.get_chance(market).await
    }

    // ========================================================================
    // Private Trading Endpoints
    // ========================================================================

    /// Get trading endpoints (requires credentials)
    pub fn trading(&self) -> RestResult<TradingEndpoints<'_>> {
        Ok(TradingEndpoints::new(&self.transport, self.credentials()?))
    }

    /// Place an order
    pub async fn place_order(&self, order: &OrderRequest) -> RestResult<Order> {
        self.trading()?.place_order(order).await
    }

    /// Cancel an order by id
    pub async fn cancel_order(&self, uuid: &str) -> RestResult<bool> {
        self.trading()?.cancel_order(uuid).await
    }

    /// List open orders
    pub async fn get_open_orders(&self, params: &RequestParams) -> RestResult<Vec<Order>> {
        self.trading()?.get_open_orders(params).await
    }

    /// List closed orders
    pub async fn get_closed_orders(&self, params: &RequestParams) -> RestResult<Vec<Order>> {
        self.trading()?.get_closed_orders(params).await
    }

    // ========================================================================
    // Private Funding Endpoints
    // ========================================================================

    /// Get funding endpoints (requires credentials)
    pub fn funding(&self) -> RestResult<FundingEndpoints<'_>> {
        Ok(FundingEndpoints::new(&self.transport, self.credentials()?))
    }
}

impl std::fmt::Debug for UpbitRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpbitRestClient")
            .field("base_url", &self.transport.base_url())
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// API base URL
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}
