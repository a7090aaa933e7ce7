//! Technical indicator engine over Upbit candles
//!
//! Pure functions over candle slices ordered oldest first. Nothing here
//! allocates beyond its output or touches the input.
//!
//! # Constraints
//!
//! - NO `tokio`
//! - NO networking code
//!
//! An indicator asked for over fewer candles than its warm-up period returns
//! empty output rather than an error, so check lengths before indexing.
//!
//! # Example
//!
//! ```
//! use upbit_indicators::{ema, obv, sma};
//! use upbit_types::Candle;
//!
//! let candles: Vec<Candle> = [1.0, 2.0, 3.0, 4.0, 5.0]
//!     .iter()
//!     .map(|&price| Candle::from_price(price, 1.0))
//!     .collect();
//!
//! assert_eq!(sma(&candles, 3), vec![2.0, 3.0, 4.0]);
//! assert_eq!(ema(&candles, 3), vec![2.0, 3.0, 4.0]);
//! assert_eq!(obv(&candles), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
//! ```

pub mod bollinger;
pub mod candles;
pub mod macd;
pub mod moving_average;
pub mod obv;
pub mod rsi;
pub mod series;

// Re-export main functions
pub use bollinger::{bollinger_bands, BollingerBands};
pub use candles::{closing_prices, sort_oldest_first, volumes};
pub use macd::{macd, Macd, DEFAULT_MACD_PERIODS};
pub use moving_average::{ema, sma};
pub use obv::obv;
pub use rsi::{rsi, DEFAULT_RSI_PERIOD};
