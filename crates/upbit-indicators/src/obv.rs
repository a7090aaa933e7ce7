//! On-Balance Volume

use upbit_types::Candle;

/// Compute cumulative signed volume
///
/// Starts at the first candle's volume; each later candle adds its volume on
/// a higher close, subtracts it on a lower close, and carries the previous
/// value on an unchanged close. Same length as the input.
pub fn obv(candles: &[Candle]) -> Vec<f64> {
    let Some(first) = candles.first() else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(candles.len());
    let mut total = first.candle_acc_trade_volume;
    out.push(total);

    for pair in candles.windows(2) {
        let (prev, curr) = (&pair[0], &pair[1]);
        if curr.trade_price > prev.trade_price {
            total += curr.candle_acc_trade_volume;
        } else if curr.trade_price < prev.trade_price {
            total -= curr.candle_acc_trade_volume;
        }
        out.push(total);
    }

    out
}
