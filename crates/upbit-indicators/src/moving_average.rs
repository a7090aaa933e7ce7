//! Simple and exponential moving averages of closing prices

use crate::candles::closing_prices;
use crate::series;
use upbit_types::Candle;

/// Simple moving average of closing prices
///
/// One value per window ending at index `i >= period - 1`; empty when there
/// are fewer than `period` candles.
pub fn sma(candles: &[Candle], period: usize) -> Vec<f64> {
    series::sma(&closing_prices(candles), period)
}

/// Exponential moving average of closing prices
///
/// Seeded with the SMA of the first `period` candles. Same length as [`sma`].
pub fn ema(candles: &[Candle], period: usize) -> Vec<f64> {
    series::ema(&closing_prices(candles), period)
}
