//! Technical indicator tools
//!
//! Each tool fetches day candles, puts them oldest first and runs one
//! indicator. A failed fetch returns the error; nothing is computed from a
//! partial response.

use crate::client::UpbitTools;
use crate::error::ToolResult;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use upbit_indicators::{BollingerBands, Macd};

/// Moving average request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetMovingAverageRequest {
    /// Market code (e.g. KRW-BTC)
    pub market: String,
    /// Window length
    pub period: usize,
    /// Candles to fetch (default and max 200)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

/// SMA and EMA over the same period
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovingAverageResult {
    pub sma: Vec<f64>,
    pub ema: Vec<f64>,
}

/// MACD request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetMacdRequest {
    /// Market code
    pub market: String,
    /// Short EMA period
    pub short_period: usize,
    /// Long EMA period
    pub long_period: usize,
    /// Signal EMA period
    pub signal_period: usize,
    /// Candles to fetch (default and max 200)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

/// Bollinger Bands request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetBollingerBandsRequest {
    /// Market code
    pub market: String,
    /// Window length
    pub period: usize,
    /// Standard deviation multiplier
    pub std_dev: f64,
    /// Candles to fetch (default and max 200)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

/// RSI request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetRsiRequest {
    /// Market code
    pub market: String,
    /// Smoothing period
    pub period: usize,
    /// Candles to fetch (default and max 200)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

impl GetRsiRequest {
    /// Request over the default candle count
    pub fn new(market: impl Into<String>, period: usize) -> Self {
        Self {
            market: market.into(),
            period,
            count: None,
        }
    }
}

/// RSI values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RsiResult {
    pub rsi: Vec<f64>,
}

/// OBV request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetObvRequest {
    /// Market code
    pub market: String,
    /// Candles to fetch (default and max 200)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

/// OBV values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObvResult {
    pub obv: Vec<f64>,
}

impl UpbitTools {
    /// SMA and EMA of closing prices
    #[instrument(skip(self))]
    pub async fn get_moving_average(&self, request: GetMovingAverageRequest) -> ToolResult<MovingAverageResult> {
        let candles = self.fetch_day_candles(&request.market, request.count).await?;

        let result = MovingAverageResult {
            sma: upbit_indicators::sma(&candles, request.period),
            ema: upbit_indicators::ema(&candles, request.period),
        };
        debug!(points = result.sma.len(), "Computed moving averages");
        Ok(result)
    }

    /// MACD line, signal line and histogram
    #[instrument(skip(self))]
    pub async fn get_macd(&self, request: GetMacdRequest) -> ToolResult<Macd> {
        let candles = self.fetch_day_candles(&request.market, request.count).await?;

        let result = upbit_indicators::macd(
            &candles,
            request.short_period,
            request.long_period,
            request.signal_period,
        );
        debug!(points = result.len(), "Computed MACD");
        Ok(result)
    }

    /// Middle, upper and lower bands
    #[instrument(skip(self))]
    pub async fn get_bollinger_bands(&self, request: GetBollingerBandsRequest) -> ToolResult<BollingerBands> {
        let candles = self.fetch_day_candles(&request.market, request.count).await?;

        let result = upbit_indicators::bollinger_bands(&candles, request.period, request.std_dev);
        debug!(points = result.len(), "Computed Bollinger Bands");
        Ok(result)
    }

    /// Relative Strength Index
    #[instrument(skip(self))]
    pub async fn get_rsi(&self, request: GetRsiRequest) -> ToolResult<RsiResult> {
        let candles = self.fetch_day_candles(&request.market, request.count).await?;

        let rsi = upbit_indicators::rsi(&candles, request.period);
        debug!(points = rsi.len(), "Computed RSI");
        Ok(RsiResult { rsi })
    }

    /// On-Balance Volume
    #[instrument(skip(self))]
    pub async fn get_obv(&self, request: GetObvRequest) -> ToolResult<ObvResult> {
        let candles = self.fetch_day_candles(&request.market, request.count).await?;

        Ok(ObvResult {
            obv: upbit_indicators::obv(&candles),
        })
    }
}
