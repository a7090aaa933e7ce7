//! Cross-indicator properties over realistic day-candle input

use upbit_indicators::{bollinger_bands, ema, macd, obv, rsi, sma, sort_oldest_first};
use upbit_types::Candle;

/// Day candles as the quotation API returns them, newest first
const DAY_CANDLES: &str = r#"[
    {"market":"KRW-BTC","candle_date_time_utc":"2024-03-05T00:00:00","opening_price":93.0,"high_price":96.0,"low_price":92.0,"trade_price":95.0,"candle_acc_trade_volume":12.0},
    {"market":"KRW-BTC","candle_date_time_utc":"2024-03-04T00:00:00","opening_price":94.0,"high_price":95.0,"low_price":92.0,"trade_price":93.0,"candle_acc_trade_volume":8.0},
    {"market":"KRW-BTC","candle_date_time_utc":"2024-03-03T00:00:00","opening_price":91.0,"high_price":95.0,"low_price":90.0,"trade_price":94.0,"candle_acc_trade_volume":15.0},
    {"market":"KRW-BTC","candle_date_time_utc":"2024-03-02T00:00:00","opening_price":92.0,"high_price":93.0,"low_price":90.0,"trade_price":91.0,"candle_acc_trade_volume":9.0},
    {"market":"KRW-BTC","candle_date_time_utc":"2024-03-01T00:00:00","opening_price":90.0,"high_price":92.0,"low_price":89.0,"trade_price":92.0,"candle_acc_trade_volume":10.0}
]"#;

fn oldest_first() -> Vec<Candle> {
    let mut candles: Vec<Candle> = serde_json::from_str(DAY_CANDLES).unwrap();
    sort_oldest_first(&mut candles);
    candles
}

#[test]
fn sorted_candles_feed_indicators_in_time_order() {
    let candles = oldest_first();
    let closes: Vec<f64> = candles.iter().map(|c| c.trade_price).collect();
    assert_eq!(closes, vec![92.0, 91.0, 94.0, 93.0, 95.0]);

    // 92 -> 91 down, -> 94 up, -> 93 down, -> 95 up
    assert_eq!(obv(&candles), vec![10.0, 1.0, 16.0, 8.0, 20.0]);
}

#[test]
fn window_lengths() {
    let candles = oldest_first();
    for period in 1..=6 {
        let expected = (candles.len() + 1).saturating_sub(period);
        assert_eq!(sma(&candles, period).len(), expected);
        assert_eq!(ema(&candles, period).len(), expected);
        assert_eq!(bollinger_bands(&candles, period, 2.0).len(), expected);
        assert_eq!(rsi(&candles, period).len(), candles.len().saturating_sub(period));
    }
    assert_eq!(obv(&candles).len(), candles.len());
}

#[test]
fn deterministic() {
    let candles = oldest_first();
    assert_eq!(macd(&candles, 2, 3, 2), macd(&candles, 2, 3, 2));
    assert_eq!(rsi(&candles, 2), rsi(&candles, 2));
    assert_eq!(bollinger_bands(&candles, 3, 2.0), bollinger_bands(&candles, 3, 2.0));
}

#[test]
fn empty_input_is_empty_everywhere() {
    let none: Vec<Candle> = Vec::new();
    assert!(sma(&none, 1).is_empty());
    assert!(ema(&none, 1).is_empty());
    assert!(macd(&none, 12, 26, 9).is_empty());
    assert!(bollinger_bands(&none, 20, 2.0).is_empty());
    assert!(rsi(&none, 14).is_empty());
    assert!(obv(&none).is_empty());
}
