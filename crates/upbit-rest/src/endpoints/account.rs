//! Private account endpoints
//!
//! These endpoints require authentication.

use crate::error::RestResult;
use crate::transport::Transport;
use crate::types::{Account, ApiKey, Chance, WalletStatus};
use reqwest::Method;
use tracing::{debug, instrument};
use upbit_auth::Credentials;
use upbit_types::CanonicalParams;

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    transport: &'a Transport,
    credentials: &'a Credentials,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(transport: &'a Transport, credentials: &'a Credentials) -> Self {
        Self {
            transport,
            credentials,
        }
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &CanonicalParams,
    ) -> RestResult<T> {
        self.transport
            .send_private(Method::GET, endpoint, params, self.credentials)
            .await
    }

    /// Get balances of every currency held
    #[instrument(skip(self))]
    pub async fn get_accounts(&self) -> RestResult<Vec<Account>> {
        debug!("Fetching accounts");
        self.get("accounts", &CanonicalParams::new()).await
    }

    /// Get fees, constraints and balances for ordering on a market
    ///
    /// # Arguments
    /// * `market` - Market code (e.g., "KRW-BTC")
    #[instrument(skip(self))]
    pub async fn get_chance(&self, market: &str) -> RestResult<Chance> {
        let params = CanonicalParams::new().with("market", market);
        self.get("orders/chance", &params).await
    }

    /// Get deposit/withdrawal status of every wallet
    #[instrument(skip(self))]
    pub async fn get_wallet_status(&self) -> RestResult<Vec<WalletStatus>> {
        self.get("status/wallet", &CanonicalParams::new()).await
    }

    /// List API keys and their expiry
    #[instrument(skip(self))]
    pub async fn get_api_keys(&self) -> RestResult<Vec<ApiKey>> {
        self.get("api_keys", &CanonicalParams::new()).await
    }
}
