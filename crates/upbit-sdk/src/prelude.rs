//! Re-exports for convenience
//!
//! Import everything you need with:
//! ```
//! use upbit_sdk::prelude::*;
//! ```

// Tool host
pub use crate::client::{UpbitTools, MAX_CANDLE_COUNT};
pub use crate::error::{ToolError, ToolResult};
pub use crate::tool::ToolName;

// Tool records
pub use crate::indicators::{
    GetBollingerBandsRequest, GetMacdRequest, GetMovingAverageRequest, GetObvRequest,
    GetRsiRequest, MovingAverageResult, ObvResult, RsiResult,
};
pub use crate::trading::{
    CancelOrderRequest, CancelOrderResult, GetAccountsResult, GetAvailableOrderInfoRequest,
    GetClosedOrderHistoryRequest, GetOpenOrdersRequest, OrdersResult,
    PlaceBuyOrderByLimitRequest, PlaceBuyOrderByMarketRequest, PlaceSellOrderByLimitRequest,
    PlaceSellOrderByMarketRequest,
};

// REST client
pub use upbit_rest::{
    Account, Chance, ClientConfig, Credentials, Order, OrderRequest, RestError, UpbitRestClient,
};

// Indicator engine
pub use upbit_indicators::{BollingerBands, Macd};

// Shared types
pub use upbit_types::{Candle, CandleInterval, OrderBy, OrderSide, OrderState, OrderType, RequestParams};
