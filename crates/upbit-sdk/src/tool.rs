//! Name-based tool dispatch
//!
//! Lets a caller that only has a tool name and JSON arguments (an RPC layer,
//! a command line) reach every tool through one entry point.

use crate::client::UpbitTools;
use crate::error::{ToolError, ToolResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tracing::{info, instrument};

/// Every tool exposed by [`UpbitTools`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    GetAccounts,
    PlaceBuyOrderByLimit,
    PlaceBuyOrderByMarket,
    PlaceSellOrderByLimit,
    PlaceSellOrderByMarket,
    CancelOrder,
    GetAvailableOrderInfo,
    GetClosedOrderHistory,
    GetOpenOrders,
    GetMovingAverage,
    GetMacd,
    GetBollingerBands,
    GetRsi,
    GetObv,
}

impl ToolName {
    /// All tools, trading first
    pub const ALL: [ToolName; 14] = [
        Self::GetAccounts,
        Self::PlaceBuyOrderByLimit,
        Self::PlaceBuyOrderByMarket,
        Self::PlaceSellOrderByLimit,
        Self::PlaceSellOrderByMarket,
        Self::CancelOrder,
        Self::GetAvailableOrderInfo,
        Self::GetClosedOrderHistory,
        Self::GetOpenOrders,
        Self::GetMovingAverage,
        Self::GetMacd,
        Self::GetBollingerBands,
        Self::GetRsi,
        Self::GetObv,
    ];

    /// Wire name of the tool
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GetAccounts => "get_accounts",
            Self::PlaceBuyOrderByLimit => "place_buy_order_by_limit",
            Self::PlaceBuyOrderByMarket => "place_buy_order_by_market",
            Self::PlaceSellOrderByLimit => "place_sell_order_by_limit",
            Self::PlaceSellOrderByMarket => "place_sell_order_by_market",
            Self::CancelOrder => "cancel_order",
            Self::GetAvailableOrderInfo => "get_available_order_info",
            Self::GetClosedOrderHistory => "get_closed_order_history",
            Self::GetOpenOrders => "get_open_orders",
            Self::GetMovingAverage => "get_moving_average",
            Self::GetMacd => "get_macd",
            Self::GetBollingerBands => "get_bollinger_bands",
            Self::GetRsi => "get_rsi",
            Self::GetObv => "get_obv",
        }
    }

    /// One-line description of what the tool does
    pub fn description(&self) -> &'static str {
        match self {
            Self::GetAccounts => "List balances of every currency held in the account.",
            Self::PlaceBuyOrderByLimit => {
                "Place a limit buy order at a given price and volume."
            }
            Self::PlaceBuyOrderByMarket => {
                "Place a market buy order spending a total amount of the quote currency."
            }
            Self::PlaceSellOrderByLimit => {
                "Place a limit sell order at a given price and volume."
            }
            Self::PlaceSellOrderByMarket => "Place a market sell order for a given volume.",
            Self::CancelOrder => "Cancel an order by its UUID.",
            Self::GetAvailableOrderInfo => {
                "Get fees, order constraints and balances for trading on a market."
            }
            Self::GetClosedOrderHistory => "List filled or cancelled orders on a market.",
            Self::GetOpenOrders => "List orders on a market that are still waiting to fill.",
            Self::GetMovingAverage => {
                "Compute SMA and EMA of daily closing prices over a period."
            }
            Self::GetMacd => "Compute MACD line, signal line and histogram of daily closes.",
            Self::GetBollingerBands => {
                "Compute Bollinger Bands (SMA and upper/lower bands) of daily closes."
            }
            Self::GetRsi => "Compute the Relative Strength Index of daily closes.",
            Self::GetObv => "Compute On-Balance Volume of daily candles.",
        }
    }

    /// Returns true if the tool calls a signed endpoint
    pub fn requires_credentials(&self) -> bool {
        !matches!(
            self,
            Self::GetMovingAverage
                | Self::GetMacd
                | Self::GetBollingerBands
                | Self::GetRsi
                | Self::GetObv
        )
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|tool| tool.as_str() == s)
            .ok_or_else(|| ToolError::UnknownTool(s.to_string()))
    }
}

fn arguments<T: DeserializeOwned>(tool: ToolName, args: Value) -> ToolResult<T> {
    serde_json::from_value(args).map_err(|source| ToolError::InvalidArguments {
        tool: tool.as_str(),
        source,
    })
}

fn encode<T: Serialize>(result: T) -> ToolResult<Value> {
    serde_json::to_value(result).map_err(ToolError::Encode)
}

impl UpbitTools {
    /// Run a tool by name with JSON arguments and return its JSON result
    ///
    /// `get_accounts` ignores its arguments; every other tool decodes them into
    /// its request record.
    #[instrument(skip(self, args))]
    pub async fn call(&self, name: &str, args: Value) -> ToolResult<Value> {
        let tool: ToolName = name.parse()?;
        info!(%tool, "Calling tool");

        match tool {
            ToolName::GetAccounts => encode(self.get_accounts().await?),
            ToolName::PlaceBuyOrderByLimit => {
                encode(self.place_buy_order_by_limit(arguments(tool, args)?).await?)
            }
            ToolName::PlaceBuyOrderByMarket => {
                encode(self.place_buy_order_by_market(arguments(tool, args)?).await?)
            }
            ToolName::PlaceSellOrderByLimit => {
                encode(self.place_sell_order_by_limit(arguments(tool, args)?).await?)
            }
            ToolName::PlaceSellOrderByMarket => {
                encode(self.place_sell_order_by_market(arguments(tool, args)?).await?)
            }
            ToolName::CancelOrder => encode(self.cancel_order(arguments(tool, args)?).await?),
            ToolName::GetAvailableOrderInfo => {
                encode(self.get_available_order_info(arguments(tool, args)?).await?)
            }
            ToolName::GetClosedOrderHistory => {
                encode(self.get_closed_order_history(arguments(tool, args)?).await?)
            }
            ToolName::GetOpenOrders => encode(self.get_open_orders(arguments(tool, args)?).await?),
            ToolName::GetMovingAverage => {
                encode(self.get_moving_average(arguments(tool, args)?).await?)
            }
            ToolName::GetMacd => encode(self.get_macd(arguments(tool, args)?).await?),
            ToolName::GetBollingerBands => {
                encode(self.get_bollinger_bands(arguments(tool, args)?).await?)
            }
            ToolName::GetRsi => encode(self.get_rsi(arguments(tool, args)?).await?),
            ToolName::GetObv => encode(self.get_obv(arguments(tool, args)?).await?),
        }
    }
}
