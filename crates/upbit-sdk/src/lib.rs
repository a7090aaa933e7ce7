//! Trading and technical-indicator tools for the Upbit exchange
//!
//! This crate wraps the REST client in a small set of tools: account and
//! order management, plus indicators computed over daily candles. Each tool
//! takes a serde request record and returns a serde result record, and every
//! tool is also reachable by name through [`UpbitTools::call`].
//!
//! # Quick Start
//!
//! ```no_run
//! use upbit_sdk::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let tools = UpbitTools::from_env()?;
//!
//!     // Typed call
//!     let accounts = tools.get_accounts().await?;
//!     println!("{} balances", accounts.accounts.len());
//!
//!     // Call by name
//!     let macd = tools
//!         .call(
//!             "get_macd",
//!             serde_json::json!({
//!                 "market": "KRW-BTC",
//!                 "short_period": 12,
//!                 "long_period": 26,
//!                 "signal_period": 9
//!             }),
//!         )
//!         .await?;
//!     println!("{}", macd["histogram"]);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Tools
//!
//! - **Trading**: `get_accounts`, `place_buy_order_by_limit`,
//!   `place_buy_order_by_market`, `place_sell_order_by_limit`,
//!   `place_sell_order_by_market`, `cancel_order`, `get_available_order_info`,
//!   `get_closed_order_history`, `get_open_orders`
//! - **Indicators**: `get_moving_average`, `get_macd`, `get_bollinger_bands`,
//!   `get_rsi`, `get_obv`

pub mod client;
pub mod error;
pub mod indicators;
pub mod prelude;
pub mod tool;
pub mod trading;

// Re-export main types
pub use client::{effective_count, UpbitTools, MAX_CANDLE_COUNT};
pub use error::{ToolError, ToolResult};
pub use indicators::*;
pub use tool::ToolName;
pub use trading::*;
