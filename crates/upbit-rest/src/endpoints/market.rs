//! Public quotation endpoints
//!
//! These endpoints don't require authentication.

use crate::error::{RestError, RestResult};
use crate::transport::Transport;
use crate::types::{MarketCode, OrderBook, Tick, Ticker};
use tracing::{debug, instrument};
use upbit_types::{Candle, CandleInterval, CanonicalParams, EncodeParams, RequestParams};

/// Public quotation endpoints
pub struct MarketEndpoints<'a> {
    transport: &'a Transport,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// List every tradable market, with warning details
    #[instrument(skip(self))]
    pub async fn get_market_codes(&self) -> RestResult<Vec<MarketCode>> {
        debug!("Fetching market codes");
        let params = CanonicalParams::new().with("isDetails", true);
        self.transport.get_public("market/all", &params).await
    }

    /// Get current price snapshots
    ///
    /// # Arguments
    /// * `markets` - Comma-separated market codes (e.g., "KRW-BTC,KRW-ETH")
    #[instrument(skip(self))]
    pub async fn get_ticker(&self, markets: &str) -> RestResult<Vec<Ticker>> {
        let params = CanonicalParams::new().with("markets", markets);
        self.transport.get_public("ticker", &params).await
    }

    /// Get order book snapshots
    ///
    /// # Arguments
    /// * `markets` - Comma-separated market codes
    #[instrument(skip(self))]
    pub async fn get_orderbook(&self, markets: &str) -> RestResult<Vec<OrderBook>> {
        let params = CanonicalParams::new().with("markets", markets);
        self.transport.get_public("orderbook", &params).await
    }

    /// Get recent trades
    ///
    /// Uses `market`, `to`, `count`, `cursor` and `days_ago`.
    #[instrument(skip(self))]
    pub async fn get_ticks(&self, params: &RequestParams) -> RestResult<Vec<Tick>> {
        self.transport
            .get_public("trades/ticks", &params.encode_params())
            .await
    }

    /// Get candles of any interval
    ///
    /// Uses `market`, `to`, `count` and `converting_price_unit`. Candles come
    /// back newest first.
    #[instrument(skip(self))]
    pub async fn get_candles(
        &self,
        interval: CandleInterval,
        params: &RequestParams,
    ) -> RestResult<Vec<Candle>> {
        if !interval.is_supported() {
            return Err(RestError::InvalidParameter(format!(
                "unsupported candle interval: {}",
                interval
            )));
        }

        debug!(%interval, "Fetching candles");
        self.transport
            .get_public(&interval.endpoint(), &params.encode_params())
            .await
    }

    /// Get daily candles
    pub async fn get_day_candles(&self, params: &RequestParams) -> RestResult<Vec<Candle>> {
        self.get_candles(CandleInterval::Days, params).await
    }

    /// Get weekly candles
    pub async fn get_week_candles(&self, params: &RequestParams) -> RestResult<Vec<Candle>> {
        self.get_candles(CandleInterval::Weeks, params).await
    }

    /// Get monthly candles
    pub async fn get_month_candles(&self, params: &RequestParams) -> RestResult<Vec<Candle>> {
        self.get_candles(CandleInterval::Months, params).await
    }

    /// Get minute candles
    ///
    /// # Arguments
    /// * `unit` - One of 1, 3, 5, 10, 15, 30, 60, 240
    pub async fn get_minute_candles(
        &self,
        unit: u32,
        params: &RequestParams,
    ) -> RestResult<Vec<Candle>> {
        self.get_candles(CandleInterval::Minutes(unit), params).await
    }
}
