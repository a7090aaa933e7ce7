//! REST API client for the Upbit cryptocurrency exchange
//!
//! This crate provides a REST API client for trading on Upbit, including
//! quotation data, account management, order execution and funding.
//!
//! # Features
//!
//! - **Market Data**: Market codes, ticker, orderbook, recent trades, candles
//! - **Account**: Balances, order chance, wallet status, API keys
//! - **Trading**: Place, cancel and query orders
//! - **Funding**: Deposit addresses, deposits and withdrawals
//!
//! # Authentication
//!
//! Private endpoints require API credentials. Each private call carries a
//! freshly signed HS256 bearer token whose `query_hash` covers exactly the
//! parameters sent.
//!
//! # Example
//!
//! ```no_run
//! use upbit_rest::{OrderRequest, UpbitRestClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = UpbitRestClient::public()?;
//!     let tickers = client.market().get_ticker("KRW-BTC").await?;
//!     println!("KRW-BTC: {:?}", tickers);
//!
//!     // Private endpoints (auth required)
//!     let auth_client = UpbitRestClient::from_env()?;
//!     let order = OrderRequest::limit_buy("KRW-BTC", "50000000", "0.001");
//!     let placed = auth_client.place_order(&order).await?;
//!     println!("Placed: {}", placed.uuid);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod endpoints;
pub mod transport;
pub mod types;

// Re-export main types
pub use client::{ClientConfig, UpbitRestClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use error::{RestError, RestResult};
pub use transport::{Access, Transport};
pub use upbit_auth::Credentials;

// Re-export endpoint-specific types
pub use types::{
    // Account
    Account, ApiKey, Chance, ChanceAccount, ChanceLimit, ChanceMarket, WalletStatus,
    // Trading
    Order, OrderRequest, Trade,
    // Funding
    CoinAddress, Deposit, GenerateCoinAddressResponse, Transfer, Withdraw,
    // Quotation
    MarketCode, OrderBook, OrderBookUnit, Tick, Ticker,
    // Errors
    ApiErrorBody, ApiErrorDetail,
};
