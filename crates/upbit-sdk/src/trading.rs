//! Trading tools
//!
//! Every order placed through these tools uses `smp_type=cancel_maker`, so an
//! order that would match one of the caller's own resting orders cancels the
//! resting one instead.

use crate::client::UpbitTools;
use crate::error::ToolResult;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use upbit_rest::{Account, Chance, Order, OrderRequest};
use upbit_types::{RequestParams, SmpType};

/// Balances of every currency held
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetAccountsResult {
    pub accounts: Vec<Account>,
}

/// Market to query order availability for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetAvailableOrderInfoRequest {
    /// Market code (e.g. KRW-BTC)
    pub market: String,
}

/// Closed order query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetClosedOrderHistoryRequest {
    /// Market code
    pub market: String,
    /// `done` or `cancel`; both when empty
    #[serde(default)]
    pub state: String,
    /// Number of orders (server default 100, max 1000)
    #[serde(default)]
    pub limit: i64,
    /// `asc` or `desc` by creation time (server default `desc`)
    #[serde(default)]
    pub order_by: String,
}

/// Open order query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetOpenOrdersRequest {
    /// Market code
    pub market: String,
    /// Page number (server default 1)
    #[serde(default)]
    pub page: i64,
    /// Number of orders (server default 100, max 100)
    #[serde(default)]
    pub limit: i64,
    /// `asc` or `desc` by creation time (server default `desc`)
    #[serde(default)]
    pub order_by: String,
}

/// Orders returned by a history query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdersResult {
    pub orders: Vec<Order>,
}

/// Limit buy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceBuyOrderByLimitRequest {
    /// Market code
    pub market: String,
    /// Price per unit in the quote currency
    pub price: String,
    /// Quantity to buy
    pub volume: String,
}

/// Market buy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceBuyOrderByMarketRequest {
    /// Market code
    pub market: String,
    /// Total amount to spend in the quote currency
    pub price: String,
}

/// Limit sell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceSellOrderByLimitRequest {
    /// Market code
    pub market: String,
    /// Price per unit in the quote currency
    pub price: String,
    /// Quantity to sell
    pub volume: String,
}

/// Market sell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceSellOrderByMarketRequest {
    /// Market code
    pub market: String,
    /// Quantity to sell
    pub volume: String,
}

/// Order to cancel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelOrderRequest {
    /// Order id
    pub uuid: String,
}

/// Cancellation outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelOrderResult {
    pub canceled: bool,
}

impl UpbitTools {
    /// List balances
    #[instrument(skip(self))]
    pub async fn get_accounts(&self) -> ToolResult<GetAccountsResult> {
        let accounts = self.client().get_accounts().await?;
        Ok(GetAccountsResult { accounts })
    }

    /// Limit buy at `price` for `volume`
    #[instrument(skip(self))]
    pub async fn place_buy_order_by_limit(&self, request: PlaceBuyOrderByLimitRequest) -> ToolResult<Order> {
        let order = OrderRequest::limit_buy(request.market, request.price, request.volume);
        self.place(order).await
    }

    /// Market buy spending `price` of the quote currency
    #[instrument(skip(self))]
    pub async fn place_buy_order_by_market(&self, request: PlaceBuyOrderByMarketRequest) -> ToolResult<Order> {
        let order = OrderRequest::market_buy(request.market, request.price);
        self.place(order).await
    }

    /// Limit sell at `price` for `volume`
    #[instrument(skip(self))]
    pub async fn place_sell_order_by_limit(&self, request: PlaceSellOrderByLimitRequest) -> ToolResult<Order> {
        let order = OrderRequest::limit_sell(request.market, request.price, request.volume);
        self.place(order).await
    }

    /// Market sell of `volume`
    #[instrument(skip(self))]
    pub async fn place_sell_order_by_market(&self, request: PlaceSellOrderByMarketRequest) -> ToolResult<Order> {
        let order = OrderRequest::market_sell(request.market, request.volume);
        self.place(order).await
    }

    async fn place(&self, order: OrderRequest) -> ToolResult<Order> {
        let order = order.with_smp_type(SmpType::CancelMaker);
        let placed = self.client().place_order(&order).await?;
        info!(uuid = %placed.uuid, market = %placed.market, "Placed order via tool");
        Ok(placed)
    }

    /// Cancel an order
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, request: CancelOrderRequest) -> ToolResult<CancelOrderResult> {
        let canceled = self.client().cancel_order(&request.uuid).await?;
        Ok(CancelOrderResult { canceled })
    }

    /// Fees, limits and balances for ordering on a market
    #[instrument(skip(self))]
    pub async fn get_available_order_info(&self, request: GetAvailableOrderInfoRequest) -> ToolResult<Chance> {
        Ok(self.client().get_chance(&request.market).await?)
    }

    /// Filled or cancelled orders
    #[instrument(skip(self))]
    pub async fn get_closed_order_history(&self, request: GetClosedOrderHistoryRequest) -> ToolResult<OrdersResult> {
        let params = RequestParams::new()
            .market(request.market)
            .state(request.state)
            .limit(request.limit)
            .order_by(request.order_by);
        let orders = self.client().get_closed_orders(&params).await?;
        Ok(OrdersResult { orders })
    }

    /// Orders still waiting to fill
    #[instrument(skip(self))]
    pub async fn get_open_orders(&self, request: GetOpenOrdersRequest) -> ToolResult<OrdersResult> {
        let params = RequestParams::new()
            .market(request.market)
            .page(request.page)
            .limit(request.limit)
            .order_by(request.order_by);
        let orders = self.client().get_open_orders(&params).await?;
        Ok(OrdersResult { orders })
    }
}
