//! Series extraction from candles

use upbit_types::Candle;

/// Closing prices (`trade_price`) in input order
pub fn closing_prices(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.trade_price).collect()
}

/// Accumulated volumes in input order
pub fn volumes(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.candle_acc_trade_volume).collect()
}

/// Sort candles oldest first by their UTC start time
///
/// The quotation API returns candles newest first. The sort is stable, so
/// candles with equal or unparsable times keep their relative order.
pub fn sort_oldest_first(candles: &mut [Candle]) {
    candles.sort_by(|a, b| a.candle_date_time_utc.cmp(&b.candle_date_time_utc));
}
