//! Relative Strength Index with Wilder smoothing

use crate::candles::closing_prices;
use upbit_types::Candle;

/// Conventional RSI period
pub const DEFAULT_RSI_PERIOD: usize = 14;

/// Compute RSI over closing prices
///
/// The first value averages the first `period` gains and losses; later values
/// use `avg = (avg * (period - 1) + new) / period`. Whenever the average loss
/// is zero, seed included, the value is exactly 100. Output length is
/// `n - period`; empty when there are fewer than `period + 1` candles.
pub fn rsi(candles: &[Candle], period: usize) -> Vec<f64> {
    if period == 0 || candles.len() < period + 1 {
        return Vec::new();
    }

    let prices = closing_prices(candles);
    let (gains, losses): (Vec<f64>, Vec<f64>) = prices
        .windows(2)
        .map(|pair| {
            let change = pair[1] - pair[0];
            if change > 0.0 {
                (change, 0.0)
            } else {
                (0.0, -change)
            }
        })
        .unzip();

    let p = period as f64;
    let mut avg_gain = gains[..period].iter().sum::<f64>() / p;
    let mut avg_loss = losses[..period].iter().sum::<f64>() / p;

    let mut out = Vec::with_capacity(gains.len() - period + 1);
    out.push(relative_strength_index(avg_gain, avg_loss));

    for (gain, loss) in gains[period..].iter().zip(&losses[period..]) {
        avg_gain = (avg_gain * (p - 1.0) + gain) / p;
        avg_loss = (avg_loss * (p - 1.0) + loss) / p;
        out.push(relative_strength_index(avg_gain, avg_loss));
    }

    out
}

fn relative_strength_index(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - 100.0 / (1.0 + rs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candles(prices: &[f64]) -> Vec<Candle> {
        prices.iter().map(|&p| Candle::from_price(p, 0.0)).collect()
    }

    #[test]
    fn test_rising_prices_are_100() {
        let prices: Vec<f64> = (1..=20).map(|i| i as f64).collect();
        let values = rsi(&candles(&prices), 14);
        assert_eq!(values.len(), 6);
        assert!(values.iter().all(|v| *v == 100.0));
    }

    #[test]
    fn test_falling_prices_are_0() {
        let prices: Vec<f64> = (1..=20).rev().map(|i| i as f64).collect();
        let values = rsi(&candles(&prices), 14);
        assert!(values.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_flat_prices_are_100() {
        let values = rsi(&candles(&[5.0; 10]), 3);
        assert_eq!(values, vec![100.0; 7]);
    }

    #[test]
    fn test_wilder_step() {
        // changes: +1, -1, +2, -1
        let values = rsi(&candles(&[10.0, 11.0, 10.0, 12.0, 11.0]), 2);

        // seed: gain 0.5, loss 0.5 -> 50
        assert_eq!(values[0], 50.0);
        // gain (0.5 + 2) / 2 = 1.25, loss 0.5 / 2 = 0.25 -> rs 5
        assert!((values[1] - (100.0 - 100.0 / 6.0)).abs() < 1e-12);
        // gain 1.25 / 2 = 0.625, loss (0.25 + 1) / 2 = 0.625 -> 50
        assert!((values[2] - 50.0).abs() < 1e-12);
        assert_eq!(values.len(), 3);
    }

    #[test]
    fn test_bounded() {
        let prices: Vec<f64> = (0..50).map(|i| 100.0 + (i as f64).sin() * 10.0).collect();
        let values = rsi(&candles(&prices), 14);
        assert_eq!(values.len(), 36);
        assert!(values.iter().all(|v| (0.0..=100.0).contains(v)));
    }

    #[test]
    fn test_short_input_is_empty() {
        assert!(rsi(&candles(&[1.0; 14]), 14).is_empty());
        assert_eq!(rsi(&candles(&[1.0; 15]), 14).len(), 1);
        assert!(rsi(&candles(&[1.0; 5]), 0).is_empty());
    }
}
