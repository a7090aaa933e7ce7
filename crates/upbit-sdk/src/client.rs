//! Tool host wrapping one REST client

use crate::error::ToolResult;
use tracing::{debug, instrument};
use upbit_indicators::sort_oldest_first;
use upbit_rest::{ClientConfig, RestResult, UpbitRestClient};
use upbit_types::{Candle, RequestParams};

/// Largest candle count one indicator request may fetch
pub const MAX_CANDLE_COUNT: u32 = 200;

/// Trading and indicator tools bound to one exchange client
///
/// Holds no state besides the client, so one instance can serve concurrent
/// calls.
///
/// # Example
///
/// ```no_run
/// use upbit_sdk::prelude::*;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let tools = UpbitTools::from_env()?;
///
///     let rsi = tools
///         .get_rsi(GetRsiRequest::new("KRW-BTC", 14))
///         .await?;
///     println!("RSI: {:?}", rsi.rsi.last());
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct UpbitTools {
    client: UpbitRestClient,
}

impl UpbitTools {
    /// Wrap an existing client
    pub fn new(client: UpbitRestClient) -> Self {
        Self { client }
    }

    /// Build from a client configuration
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        Ok(Self::new(UpbitRestClient::new(config)?))
    }

    /// Build an authenticated client from `UPBIT_ACCESS_KEY` and
    /// `UPBIT_SECRET_KEY`
    pub fn from_env() -> RestResult<Self> {
        Ok(Self::new(UpbitRestClient::from_env()?))
    }

    /// Underlying REST client
    pub fn client(&self) -> &UpbitRestClient {
        &self.client
    }

    /// Fetch day candles for `market`, oldest first
    ///
    /// `count` defaults to and is capped at [`MAX_CANDLE_COUNT`].
    #[instrument(skip(self))]
    pub async fn fetch_day_candles(&self, market: &str, count: Option<u32>) -> ToolResult<Vec<Candle>> {
        let count = effective_count(count);
        let params = RequestParams::new().market(market).count(i64::from(count));

        let mut candles = self.client.get_day_candles(&params).await?;
        sort_oldest_first(&mut candles);

        debug!(received = candles.len(), "Fetched day candles");
        Ok(candles)
    }
}

/// Clamp a requested candle count into `1..=MAX_CANDLE_COUNT`, treating
/// missing or zero as the maximum
pub fn effective_count(count: Option<u32>) -> u32 {
    match count {
        None | Some(0) => MAX_CANDLE_COUNT,
        Some(n) => n.min(MAX_CANDLE_COUNT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_count() {
        assert_eq!(effective_count(None), 200);
        assert_eq!(effective_count(Some(0)), 200);
        assert_eq!(effective_count(Some(30)), 30);
        assert_eq!(effective_count(Some(500)), 200);
    }
}
