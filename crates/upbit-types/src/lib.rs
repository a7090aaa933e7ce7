//! Shared types for the Upbit REST API
//!
//! This crate holds the data model used across the workspace. It has no
//! networking and no async runtime, so the indicator engine can depend on it
//! without pulling in an HTTP stack.
//!
//! # Key Types
//!
//! - [`Candle`] - OHLCV sample from the quotation API
//! - [`CanonicalParams`] - Sorted, zero-omitted request parameters
//! - [`EncodeParams`] - Explicit flattening of a parameter record
//! - [`RequestParams`] - Flat parameter record shared by all endpoints
//! - [`OrderSide`], [`OrderType`], [`OrderState`], [`CandleInterval`] - Wire enums

pub mod candle;
pub mod enums;
pub mod params;
pub mod request;

pub use candle::*;
pub use enums::*;
pub use params::*;
pub use request::*;
