//! OHLCV candle as returned by the quotation API

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

const CANDLE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One fixed-interval OHLCV sample
///
/// Only `trade_price` (close) and `candle_acc_trade_volume` are read by the
/// indicator engine. Everything else is carried through unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Market code (e.g. "KRW-BTC")
    #[serde(default)]
    pub market: String,
    /// Candle start time (UTC), `YYYY-MM-DDTHH:MM:SS`
    #[serde(default)]
    pub candle_date_time_utc: String,
    /// Candle start time (KST)
    #[serde(default)]
    pub candle_date_time_kst: String,
    /// Open
    pub opening_price: f64,
    /// High
    pub high_price: f64,
    /// Low
    pub low_price: f64,
    /// Close
    pub trade_price: f64,
    /// Timestamp of the last trade in the candle (ms)
    #[serde(default)]
    pub timestamp: i64,
    /// Accumulated traded value
    #[serde(default)]
    pub candle_acc_trade_price: f64,
    /// Accumulated traded volume
    #[serde(default)]
    pub candle_acc_trade_volume: f64,
    /// Previous close (day candles)
    #[serde(default)]
    pub prev_closing_price: f64,
    /// Change from previous close (day candles)
    #[serde(default)]
    pub change_price: f64,
    /// Change rate from previous close (day candles)
    #[serde(default)]
    pub change_rate: f64,
    /// Minute unit (minute candles)
    #[serde(default)]
    pub unit: u32,
    /// First day of the period (week and month candles)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_day_of_period: Option<String>,
}

impl Candle {
    /// Build a flat candle from a single price and volume
    pub fn from_price(price: f64, volume: f64) -> Self {
        Self {
            opening_price: price,
            high_price: price,
            low_price: price,
            trade_price: price,
            candle_acc_trade_volume: volume,
            ..Default::default()
        }
    }

    /// Parse the UTC start time
    pub fn opened_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.candle_date_time_utc, CANDLE_TIME_FORMAT).ok()
    }
}
