//! Order side, order type, order state and candle interval enums

use crate::params::ParamValue;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! wire_enum {
    ($name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        impl $name {
            /// Returns the value as used in API requests
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$name> for ParamValue {
            fn from(value: $name) -> Self {
                ParamValue::Str(value.as_str().to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }
    };
}

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    /// Buy
    Bid,
    /// Sell
    Ask,
}

wire_enum!(OrderSide { Bid => "bid", Ask => "ask" });

/// Order type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Limit order (price and volume)
    Limit,
    /// Market buy by total quote amount (price only)
    Price,
    /// Market sell by volume (volume only)
    Market,
    /// Best-price order
    Best,
}

wire_enum!(OrderType {
    Limit => "limit",
    Price => "price",
    Market => "market",
    Best => "best",
});

/// Order lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderState {
    /// Waiting to be filled
    Wait,
    /// Reserved (stop order)
    Watch,
    /// Fully filled
    Done,
    /// Cancelled
    Cancel,
}

wire_enum!(OrderState {
    Wait => "wait",
    Watch => "watch",
    Done => "done",
    Cancel => "cancel",
});

/// Sort order for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderBy {
    /// Oldest first
    Asc,
    /// Newest first
    #[default]
    Desc,
}

wire_enum!(OrderBy { Asc => "asc", Desc => "desc" });

/// Self-match prevention mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmpType {
    /// Cancel the resting (maker) order
    CancelMaker,
    /// Cancel the incoming (taker) order
    CancelTaker,
    /// Reduce both orders
    Reduce,
}

wire_enum!(SmpType {
    CancelMaker => "cancel_maker",
    CancelTaker => "cancel_taker",
    Reduce => "reduce",
});

/// Candle interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CandleInterval {
    /// Minute candles (1, 3, 5, 10, 15, 30, 60, 240)
    Minutes(u32),
    /// Daily candles
    #[default]
    Days,
    /// Weekly candles
    Weeks,
    /// Monthly candles
    Months,
}

impl CandleInterval {
    /// Minute units accepted by the API
    pub const MINUTE_UNITS: [u32; 8] = [1, 3, 5, 10, 15, 30, 60, 240];

    /// Endpoint path relative to the API base URL
    pub fn endpoint(&self) -> String {
        match self {
            Self::Minutes(unit) => format!("candles/minutes/{}", unit),
            Self::Days => "candles/days".to_string(),
            Self::Weeks => "candles/weeks".to_string(),
            Self::Months => "candles/months".to_string(),
        }
    }

    /// Returns true if the interval is accepted by the API
    pub fn is_supported(&self) -> bool {
        match self {
            Self::Minutes(unit) => Self::MINUTE_UNITS.contains(unit),
            _ => true,
        }
    }
}

impl fmt::Display for CandleInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minutes(unit) => write!(f, "{}m", unit),
            Self::Days => f.write_str("1d"),
            Self::Weeks => f.write_str("1w"),
            Self::Months => f.write_str("1M"),
        }
    }
}
