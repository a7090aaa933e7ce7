//! Moving Average Convergence Divergence

use crate::candles::closing_prices;
use crate::series;
use serde::{Deserialize, Serialize};
use upbit_types::Candle;

/// Conventional MACD periods (short, long, signal)
pub const DEFAULT_MACD_PERIODS: (usize, usize, usize) = (12, 26, 9);

/// MACD output
///
/// All three series have the same length and end at the last candle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Macd {
    /// Short EMA minus long EMA
    pub macd_line: Vec<f64>,
    /// EMA of the MACD line
    pub signal_line: Vec<f64>,
    /// MACD line minus signal line
    pub histogram: Vec<f64>,
}

impl Macd {
    /// Number of aligned points
    pub fn len(&self) -> usize {
        self.signal_line.len()
    }

    /// Returns true when no point could be computed
    pub fn is_empty(&self) -> bool {
        self.signal_line.is_empty()
    }

    /// Latest `(macd, signal, histogram)` point
    pub fn last(&self) -> Option<(f64, f64, f64)> {
        Some((
            *self.macd_line.last()?,
            *self.signal_line.last()?,
            *self.histogram.last()?,
        ))
    }
}

/// Compute MACD over closing prices
///
/// The short EMA is trimmed so both EMAs start at the same candle, and the
/// MACD line is trimmed to the length of its signal line. Empty when there are
/// fewer than `long_period` candles, when any period is zero or when
/// `short_period > long_period`.
pub fn macd(
    candles: &[Candle],
    short_period: usize,
    long_period: usize,
    signal_period: usize,
) -> Macd {
    if short_period == 0
        || signal_period == 0
        || short_period > long_period
        || candles.len() < long_period
    {
        return Macd::default();
    }

    let prices = closing_prices(candles);
    let ema_short = series::ema(&prices, short_period);
    let ema_long = series::ema(&prices, long_period);

    let full_line: Vec<f64> = ema_short[long_period - short_period..]
        .iter()
        .zip(&ema_long)
        .map(|(short, long)| short - long)
        .collect();

    let signal_line = series::ema(&full_line, signal_period);
    let macd_line = full_line[full_line.len() - signal_line.len()..].to_vec();

    let histogram = macd_line
        .iter()
        .zip(&signal_line)
        .map(|(m, s)| m - s)
        .collect();

    Macd {
        macd_line,
        signal_line,
        histogram,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candles(prices: &[f64]) -> Vec<Candle> {
        prices.iter().map(|&p| Candle::from_price(p, 0.0)).collect()
    }

    #[test]
    fn test_lengths_align() {
        let prices: Vec<f64> = (0..60).map(|i| 100.0 + (i as f64 * 0.7).sin() * 5.0).collect();
        let result = macd(&candles(&prices), 12, 26, 9);

        // 60 - 26 + 1 = 35 MACD points, 35 - 9 + 1 = 27 signal points
        assert_eq!(result.len(), 27);
        assert_eq!(result.macd_line.len(), 27);
        assert_eq!(result.histogram.len(), 27);
    }

    #[test]
    fn test_constant_prices_are_flat() {
        let result = macd(&candles(&[50.0; 40]), 12, 26, 9);
        assert!(!result.is_empty());
        assert!(result.macd_line.iter().all(|v| *v == 0.0));
        assert!(result.histogram.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_histogram_is_difference() {
        let prices: Vec<f64> = (1..=40).map(|i| i as f64).collect();
        let result = macd(&candles(&prices), 3, 6, 4);
        for i in 0..result.len() {
            assert_eq!(result.histogram[i], result.macd_line[i] - result.signal_line[i]);
        }
        assert!(result.last().is_some());
    }

    #[test]
    fn test_rising_prices_have_positive_macd() {
        let prices: Vec<f64> = (1..=40).map(|i| i as f64).collect();
        let result = macd(&candles(&prices), 3, 6, 4);
        assert!(result.macd_line.iter().all(|v| *v > 0.0));
    }

    #[test]
    fn test_degenerate_inputs() {
        let input = candles(&[1.0; 30]);
        assert!(macd(&input[..25], 12, 26, 9).is_empty());
        assert!(macd(&input, 26, 12, 9).is_empty());
        assert!(macd(&input, 0, 12, 9).is_empty());
        assert!(macd(&input, 12, 26, 0).is_empty());
        assert!(macd(&[], 12, 26, 9).is_empty());
    }

    #[test]
    fn test_too_short_for_signal() {
        // 5 MACD points cannot seed a 9-period signal
        let result = macd(&candles(&[1.0; 30]), 12, 26, 9);
        assert!(result.is_empty());
        assert!(result.macd_line.is_empty());
        assert!(result.histogram.is_empty());
    }
}
