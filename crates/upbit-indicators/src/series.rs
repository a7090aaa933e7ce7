//! Indicator primitives over plain numeric series
//!
//! Every function returns one value per complete window, so the output of a
//! `period`-window function over `n` values has length `n - period + 1`, or is
//! empty when `n < period` or `period == 0`.

/// Simple moving average
pub fn sma(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return Vec::new();
    }

    values
        .windows(period)
        .map(|window| window.iter().sum::<f64>() / period as f64)
        .collect()
}

/// Exponential moving average
///
/// Seeded with the SMA of the first `period` values, then
/// `ema = (value - prev) * alpha + prev` with `alpha = 2 / (period + 1)`.
pub fn ema(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return Vec::new();
    }

    let alpha = 2.0 / (period as f64 + 1.0);
    let seed = values[..period].iter().sum::<f64>() / period as f64;

    let mut out = Vec::with_capacity(values.len() - period + 1);
    out.push(seed);

    let mut prev = seed;
    for value in &values[period..] {
        prev = (value - prev) * alpha + prev;
        out.push(prev);
    }
    out
}

/// Mean and population standard deviation of each window
pub fn rolling_mean_std(values: &[f64], period: usize) -> Vec<(f64, f64)> {
    if period == 0 || values.len() < period {
        return Vec::new();
    }

    values
        .windows(period)
        .map(|window| {
            let mean = window.iter().sum::<f64>() / period as f64;
            let variance =
                window.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / period as f64;
            (mean, variance.sqrt())
        })
        .collect()
}

/// Population standard deviation of each window
pub fn rolling_std(values: &[f64], period: usize) -> Vec<f64> {
    rolling_mean_std(values, period)
        .into_iter()
        .map(|(_, std)| std)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sma() {
        assert_eq!(sma(&[1.0, 2.0, 3.0, 4.0, 5.0], 2), vec![1.5, 2.5, 3.5, 4.5]);
        assert_eq!(sma(&[1.0, 2.0, 3.0], 3), vec![2.0]);
    }

    #[test]
    fn test_ema_recurrence() {
        assert_eq!(ema(&[1.0, 2.0, 3.0, 4.0, 5.0], 3), vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_ema_period_one_is_identity() {
        let values = [3.0, 1.0, 4.0, 1.0, 5.0];
        assert_eq!(ema(&values, 1), values.to_vec());
    }

    #[test]
    fn test_short_input_is_empty() {
        assert!(sma(&[1.0, 2.0], 3).is_empty());
        assert!(ema(&[1.0, 2.0], 3).is_empty());
        assert!(rolling_std(&[1.0, 2.0], 3).is_empty());
        assert!(sma(&[], 1).is_empty());
    }

    #[test]
    fn test_zero_period_is_empty() {
        assert!(sma(&[1.0, 2.0], 0).is_empty());
        assert!(ema(&[1.0, 2.0], 0).is_empty());
        assert!(rolling_std(&[1.0, 2.0], 0).is_empty());
    }

    #[test]
    fn test_population_std() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(rolling_std(&values, 8), vec![2.0]);
        assert_eq!(rolling_mean_std(&values, 8), vec![(5.0, 2.0)]);
    }

    #[test]
    fn test_constant_series_has_zero_std() {
        assert_eq!(rolling_std(&[7.0; 5], 3), vec![0.0, 0.0, 0.0]);
    }
}
