//! Types for Upbit REST API requests and responses
//!
//! Amounts on the exchange API are decimal strings. They are kept as strings
//! on the wire types and exposed as `Decimal` through accessors.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use upbit_types::{CanonicalParams, EncodeParams, OrderSide, OrderType, SmpType};

fn parse_decimal(value: &str) -> Option<Decimal> {
    value.parse().ok()
}

// ============================================================================
// Error Body
// ============================================================================

/// Error payload returned with non-2xx responses
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

/// Error name and message
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorDetail {
    /// Machine-readable error name (e.g. "insufficient_funds_bid")
    #[serde(default)]
    pub name: String,
    /// Human-readable message
    #[serde(default)]
    pub message: String,
}

// ============================================================================
// Account Types
// ============================================================================

/// Balance of one currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Currency code
    pub currency: String,
    /// Available balance
    pub balance: String,
    /// Balance locked in open orders or withdrawals
    pub locked: String,
    /// Average buy price
    pub avg_buy_price: String,
    /// Whether the average buy price was edited by the user
    #[serde(default)]
    pub avg_buy_price_modified: bool,
    /// Currency the average buy price is quoted in
    pub unit_currency: String,
}

impl Account {
    /// Available balance
    pub fn balance_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.balance)
    }

    /// Locked balance
    pub fn locked_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.locked)
    }

    /// Average buy price
    pub fn avg_buy_price_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.avg_buy_price)
    }

    /// Available plus locked
    pub fn total_decimal(&self) -> Option<Decimal> {
        Some(self.balance_decimal()? + self.locked_decimal()?)
    }

    /// Market code of this currency against its unit currency (e.g. "KRW-BTC")
    pub fn market(&self) -> String {
        format!("{}-{}", self.unit_currency, self.currency)
    }
}

/// Balance entry inside an order-chance response
pub type ChanceAccount = Account;

/// Order availability for a market
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chance {
    /// Buy fee rate
    pub bid_fee: String,
    /// Sell fee rate
    pub ask_fee: String,
    /// Maker buy fee rate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maker_bid_fee: Option<String>,
    /// Maker sell fee rate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maker_ask_fee: Option<String>,
    /// Market constraints
    pub market: ChanceMarket,
    /// Quote currency balance
    pub bid_account: ChanceAccount,
    /// Base currency balance
    pub ask_account: ChanceAccount,
}

impl Chance {
    /// Buy fee rate
    pub fn bid_fee_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.bid_fee)
    }

    /// Sell fee rate
    pub fn ask_fee_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.ask_fee)
    }
}

/// Market constraints for placing orders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChanceMarket {
    /// Market code
    pub id: String,
    /// Market name
    pub name: String,
    /// Supported order types
    #[serde(default)]
    pub order_types: Vec<String>,
    /// Supported buy order types
    #[serde(default)]
    pub bid_types: Vec<String>,
    /// Supported sell order types
    #[serde(default)]
    pub ask_types: Vec<String>,
    /// Supported order sides
    #[serde(default)]
    pub order_sides: Vec<String>,
    /// Buy-side constraints
    pub bid: ChanceLimit,
    /// Sell-side constraints
    pub ask: ChanceLimit,
    /// Maximum order total
    #[serde(default)]
    pub max_total: String,
    /// Market state
    #[serde(default)]
    pub state: String,
}

/// Per-side order constraints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChanceLimit {
    /// Currency
    pub currency: String,
    /// Price unit (shape varies by market)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_unit: Option<serde_json::Value>,
    /// Minimum order total, sent either as a number or a string
    #[serde(default)]
    pub min_total: serde_json::Value,
}

impl ChanceLimit {
    /// Minimum order total
    pub fn min_total_decimal(&self) -> Option<Decimal> {
        match &self.min_total {
            serde_json::Value::String(s) => parse_decimal(s),
            serde_json::Value::Number(n) => parse_decimal(&n.to_string()),
            _ => None,
        }
    }
}

/// API key entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKey {
    /// Access key
    pub access_key: String,
    /// Expiry time
    pub expire_at: String,
}

/// Deposit and withdrawal status of a currency's wallet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletStatus {
    /// Currency code
    pub currency: String,
    /// Wallet state (working, withdraw_only, deposit_only, paused, unsupported)
    pub wallet_state: String,
    /// Block state (normal, delayed, inactive)
    #[serde(default)]
    pub block_state: Option<String>,
    /// Latest block height
    #[serde(default)]
    pub block_height: Option<i64>,
    /// Block update time
    #[serde(default)]
    pub block_updated_at: Option<String>,
    /// Seconds since the last block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_elapsed_minutes: Option<i64>,
}

// ============================================================================
// Order Types
// ============================================================================

/// Order as returned by order queries, placement and cancellation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Order id
    pub uuid: String,
    /// Side (`bid` / `ask`)
    pub side: String,
    /// Order type
    pub ord_type: String,
    /// Order price (absent for market sells)
    #[serde(default)]
    pub price: Option<String>,
    /// Order state
    #[serde(default)]
    pub state: String,
    /// Market code
    pub market: String,
    /// Creation time
    #[serde(default)]
    pub created_at: String,
    /// Order volume (absent for market buys)
    #[serde(default)]
    pub volume: Option<String>,
    /// Unfilled volume
    #[serde(default)]
    pub remaining_volume: Option<String>,
    /// Fee reserved for the order
    #[serde(default)]
    pub reserved_fee: String,
    /// Fee still to be paid
    #[serde(default)]
    pub remaining_fee: String,
    /// Fee paid
    #[serde(default)]
    pub paid_fee: String,
    /// Funds locked by the order
    #[serde(default)]
    pub locked: String,
    /// Filled volume
    #[serde(default)]
    pub executed_volume: String,
    /// Number of fills
    #[serde(default)]
    pub trades_count: u32,
    /// Fills (single-order queries only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trades: Vec<Trade>,
    /// Client-assigned identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

impl Order {
    /// Order price
    pub fn price_decimal(&self) -> Option<Decimal> {
        self.price.as_deref().and_then(parse_decimal)
    }

    /// Order volume
    pub fn volume_decimal(&self) -> Option<Decimal> {
        self.volume.as_deref().and_then(parse_decimal)
    }

    /// Filled volume
    pub fn executed_volume_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.executed_volume)
    }

    /// Parsed side
    pub fn order_side(&self) -> Option<OrderSide> {
        match self.side.as_str() {
            "bid" => Some(OrderSide::Bid),
            "ask" => Some(OrderSide::Ask),
            _ => None,
        }
    }
}

/// Fill of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// Market code
    pub market: String,
    /// Fill id
    pub uuid: String,
    /// Fill price
    pub price: String,
    /// Fill volume
    pub volume: String,
    /// Price times volume
    pub funds: String,
    /// Side
    pub side: String,
    /// Fill time
    #[serde(default)]
    pub created_at: String,
}

/// Order to place
///
/// Use one of the constructors; each sets the fields its order type requires.
///
/// # Example
///
/// ```
/// use upbit_rest::OrderRequest;
/// use upbit_types::EncodeParams;
///
/// let order = OrderRequest::limit_buy("KRW-BTC", "100000000", "0.001");
/// assert_eq!(
///     order.encode_params().query_string(),
///     "market=KRW-BTC&ord_type=limit&price=100000000&side=bid&volume=0.001"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    /// Market code
    pub market: String,
    /// Side
    pub side: OrderSide,
    /// Order type
    pub ord_type: OrderType,
    /// Price, or total quote amount for market buys
    pub price: Option<String>,
    /// Volume
    pub volume: Option<String>,
    /// Client-assigned identifier
    pub identifier: Option<String>,
    /// Self-match prevention
    pub smp_type: Option<SmpType>,
}

impl OrderRequest {
    /// Limit buy at `price` for `volume`
    pub fn limit_buy(market: impl Into<String>, price: impl Into<String>, volume: impl Into<String>) -> Self {
        Self::new(market, OrderSide::Bid, OrderType::Limit, Some(price.into()), Some(volume.into()))
    }

    /// Market buy spending `total` of the quote currency
    pub fn market_buy(market: impl Into<String>, total: impl Into<String>) -> Self {
        Self::new(market, OrderSide::Bid, OrderType::Price, Some(total.into()), None)
    }

    /// Limit sell at `price` for `volume`
    pub fn limit_sell(market: impl Into<String>, price: impl Into<String>, volume: impl Into<String>) -> Self {
        Self::new(market, OrderSide::Ask, OrderType::Limit, Some(price.into()), Some(volume.into()))
    }

    /// Market sell of `volume`
    pub fn market_sell(market: impl Into<String>, volume: impl Into<String>) -> Self {
        Self::new(market, OrderSide::Ask, OrderType::Market, None, Some(volume.into()))
    }

    fn new(
        market: impl Into<String>,
        side: OrderSide,
        ord_type: OrderType,
        price: Option<String>,
        volume: Option<String>,
    ) -> Self {
        Self {
            market: market.into(),
            side,
            ord_type,
            price,
            volume,
            identifier: None,
            smp_type: None,
        }
    }

    /// Attach a client identifier
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Set self-match prevention
    pub fn with_smp_type(mut self, smp_type: SmpType) -> Self {
        self.smp_type = Some(smp_type);
        self
    }

    /// Check that the fields required by the order type are present
    pub fn validate(&self) -> Result<(), String> {
        let has = |field: &Option<String>| field.as_deref().is_some_and(|v| !v.is_empty());

        if self.market.is_empty() {
            return Err("market is required".to_string());
        }

        match self.ord_type {
            OrderType::Limit if !has(&self.price) || !has(&self.volume) => {
                Err("limit orders require price and volume".to_string())
            }
            OrderType::Price if !has(&self.price) => {
                Err("market buy orders require price (total amount)".to_string())
            }
            OrderType::Market if !has(&self.volume) => {
                Err("market sell orders require volume".to_string())
            }
            _ => Ok(()),
        }
    }
}

impl EncodeParams for OrderRequest {
    fn encode_params(&self) -> CanonicalParams {
        CanonicalParams::new()
            .with("market", &self.market)
            .with("side", self.side)
            .with("ord_type", self.ord_type)
            .with_opt("price", self.price.as_deref())
            .with_opt("volume", self.volume.as_deref())
            .with_opt("identifier", self.identifier.as_deref())
            .with_opt("smp_type", self.smp_type)
    }
}

// ============================================================================
// Funding Types
// ============================================================================

/// Deposit or withdrawal record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    /// `deposit` or `withdraw`
    #[serde(rename = "type")]
    pub kind: String,
    /// Transfer id
    pub uuid: String,
    /// Currency code
    pub currency: String,
    /// Network of the transfer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_type: Option<String>,
    /// Transaction id
    #[serde(default)]
    pub txid: Option<String>,
    /// Transfer state
    pub state: String,
    /// Creation time
    #[serde(default)]
    pub created_at: String,
    /// Completion time
    #[serde(default)]
    pub done_at: Option<String>,
    /// Amount
    pub amount: String,
    /// Fee
    #[serde(default)]
    pub fee: String,
    /// `default` or `internal`
    #[serde(default)]
    pub transaction_type: String,
}

/// Deposit record
pub type Deposit = Transfer;

/// Withdrawal record
pub type Withdraw = Transfer;

impl Transfer {
    /// Amount
    pub fn amount_decimal(&self) -> Option<Decimal> {
        parse_decimal(&self.amount)
    }
}

/// Deposit address of a currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinAddress {
    /// Currency code
    pub currency: String,
    /// Network
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_type: Option<String>,
    /// Address
    #[serde(default)]
    pub deposit_address: Option<String>,
    /// Memo / tag
    #[serde(default)]
    pub secondary_address: Option<String>,
}

/// Response to an address generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateCoinAddressResponse {
    /// Request accepted
    #[serde(default)]
    pub success: bool,
    /// Status message
    #[serde(default)]
    pub message: String,
}

// ============================================================================
// Quotation Types
// ============================================================================

/// Tradable market
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketCode {
    /// Market code (e.g. "KRW-BTC")
    pub market: String,
    /// Korean name
    pub korean_name: String,
    /// English name
    pub english_name: String,
    /// Warning flag (`NONE` / `CAUTION`), older responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_warning: Option<String>,
    /// Warning details, newer responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_event: Option<serde_json::Value>,
}

/// Current price snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    pub market: String,
    pub trade_date: String,
    pub trade_time: String,
    pub trade_date_kst: String,
    pub trade_time_kst: String,
    pub trade_timestamp: i64,
    pub opening_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub trade_price: f64,
    pub prev_closing_price: f64,
    /// `RISE`, `EVEN` or `FALL`
    pub change: String,
    pub change_price: f64,
    pub change_rate: f64,
    pub signed_change_price: f64,
    pub signed_change_rate: f64,
    pub trade_volume: f64,
    pub acc_trade_price: f64,
    pub acc_trade_price_24h: f64,
    pub acc_trade_volume: f64,
    pub acc_trade_volume_24h: f64,
    #[serde(default)]
    pub highest_52_week_price: f64,
    #[serde(default)]
    pub highest_52_week_date: String,
    #[serde(default)]
    pub lowest_52_week_price: f64,
    #[serde(default)]
    pub lowest_52_week_date: String,
    pub timestamp: i64,
}

/// Order book snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBook {
    /// Market code
    pub market: String,
    /// Snapshot time (ms)
    pub timestamp: i64,
    /// Total resting ask size
    pub total_ask_size: f64,
    /// Total resting bid size
    pub total_bid_size: f64,
    /// Price levels, best first
    pub orderbook_units: Vec<OrderBookUnit>,
}

/// One level on both sides of the book
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderBookUnit {
    pub ask_price: f64,
    pub bid_price: f64,
    pub ask_size: f64,
    pub bid_size: f64,
}

/// Recent trade on a market
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub market: String,
    pub trade_date_utc: String,
    pub trade_time_utc: String,
    pub timestamp: i64,
    pub trade_price: f64,
    pub trade_volume: f64,
    pub prev_closing_price: f64,
    pub change_price: f64,
    /// `ASK` or `BID`
    pub ask_bid: String,
    #[serde(default)]
    pub sequential_id: i64,
}
