//! Bollinger Bands

use crate::candles::closing_prices;
use crate::series;
use serde::{Deserialize, Serialize};
use upbit_types::Candle;

/// Band output, one point per complete window
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BollingerBands {
    /// SMA of the window
    #[serde(rename = "sma")]
    pub middle: Vec<f64>,
    /// `middle + k * sigma`
    #[serde(rename = "upper_band")]
    pub upper: Vec<f64>,
    /// `middle - k * sigma`
    #[serde(rename = "lower_band")]
    pub lower: Vec<f64>,
}

impl BollingerBands {
    /// Number of points
    pub fn len(&self) -> usize {
        self.middle.len()
    }

    /// Returns true when no window was complete
    pub fn is_empty(&self) -> bool {
        self.middle.is_empty()
    }

    /// Band width (`upper - lower`) of each point
    pub fn width(&self) -> Vec<f64> {
        self.upper.iter().zip(&self.lower).map(|(u, l)| u - l).collect()
    }
}

/// Compute Bollinger Bands over closing prices
///
/// `sigma` is the population standard deviation of the same window the
/// middle band averages. Empty when there are fewer than `period` candles.
///
/// Both bands are `middle ± k * sigma` from one shared offset, but after
/// rounding `upper - middle` and `middle - lower` can differ in the last ulp.
/// They are exactly equal only when the additions are exact.
pub fn bollinger_bands(candles: &[Candle], period: usize, std_dev_multiplier: f64) -> BollingerBands {
    let windows = series::rolling_mean_std(&closing_prices(candles), period);

    let mut bands = BollingerBands {
        middle: Vec::with_capacity(windows.len()),
        upper: Vec::with_capacity(windows.len()),
        lower: Vec::with_capacity(windows.len()),
    };

    for (mean, sigma) in windows {
        let offset = std_dev_multiplier * sigma;
        bands.middle.push(mean);
        bands.upper.push(mean + offset);
        bands.lower.push(mean - offset);
    }

    bands
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candles(prices: &[f64]) -> Vec<Candle> {
        prices.iter().map(|&p| Candle::from_price(p, 0.0)).collect()
    }

    #[test]
    fn test_known_window() {
        let input = candles(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        let bands = bollinger_bands(&input, 8, 2.0);

        assert_eq!(bands.middle, vec![5.0]);
        assert_eq!(bands.upper, vec![9.0]);
        assert_eq!(bands.lower, vec![1.0]);
        assert_eq!(bands.width(), vec![8.0]);
    }

    #[test]
    fn test_symmetry() {
        let input = candles(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0, 6.0, 3.0]);
        let bands = bollinger_bands(&input, 4, 2.0);

        assert_eq!(bands.len(), 7);
        for i in 0..bands.len() {
            let above = bands.upper[i] - bands.middle[i];
            let below = bands.middle[i] - bands.lower[i];
            assert!((above - below).abs() < 1e-12, "asymmetric at {}", i);
            assert!(bands.upper[i] >= bands.middle[i]);
            assert!(bands.lower[i] <= bands.middle[i]);
        }
    }

    #[test]
    fn test_symmetry_within_rounding() {
        let input = candles(&[0.1, 0.7, 0.3, 1.9, 0.2, 1.3, 0.9, 2.7, 0.4, 1.1, 0.6, 3.3]);
        let bands = bollinger_bands(&input, 3, 2.0);

        assert_eq!(bands.len(), 10);
        for i in 0..bands.len() {
            let above = bands.upper[i] - bands.middle[i];
            let below = bands.middle[i] - bands.lower[i];
            let scale = bands.upper[i].abs().max(bands.lower[i].abs());
            assert!((above - below).abs() <= 4.0 * f64::EPSILON * scale, "asymmetric at {}", i);
        }
    }

    #[test]
    fn test_middle_is_sma() {
        let input = candles(&[1.0, 3.0, 2.0, 5.0, 4.0]);
        let bands = bollinger_bands(&input, 3, 2.0);
        assert_eq!(bands.middle, crate::sma(&input, 3));
    }

    #[test]
    fn test_short_input_is_empty() {
        assert!(bollinger_bands(&candles(&[1.0, 2.0]), 3, 2.0).is_empty());
        assert!(bollinger_bands(&candles(&[1.0, 2.0]), 0, 2.0).is_empty());
    }

    #[test]
    fn test_serialized_keys() {
        let bands = bollinger_bands(&candles(&[1.0, 1.0]), 2, 2.0);
        let json = serde_json::to_value(&bands).unwrap();
        assert_eq!(json["sma"][0], 1.0);
        assert_eq!(json["upper_band"][0], 1.0);
        assert_eq!(json["lower_band"][0], 1.0);
    }
}
