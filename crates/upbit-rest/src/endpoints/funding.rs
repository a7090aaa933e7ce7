//! Funding endpoints for deposits and withdrawals
//!
//! These endpoints require authentication.

use crate::error::RestResult;
use crate::transport::Transport;
use crate::types::{CoinAddress, Deposit, GenerateCoinAddressResponse, Withdraw};
use reqwest::Method;
use tracing::{info, instrument};
use upbit_auth::Credentials;
use upbit_types::{CanonicalParams, EncodeParams, RequestParams};

/// Funding endpoints for deposits and withdrawals
pub struct FundingEndpoints<'a> {
    transport: &'a Transport,
    credentials: &'a Credentials,
}

impl<'a> FundingEndpoints<'a> {
    pub fn new(transport: &'a Transport, credentials: &'a Credentials) -> Self {
        Self {
            transport,
            credentials,
        }
    }

    async fn send<T: serde::de::DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        params: &CanonicalParams,
    ) -> RestResult<T> {
        self.transport
            .send_private(method, endpoint, params, self.credentials)
            .await
    }

    /// List deposit addresses of every currency
    #[instrument(skip(self))]
    pub async fn get_coin_addresses(&self) -> RestResult<Vec<CoinAddress>> {
        self.send(Method::GET, "deposits/coin_addresses", &CanonicalParams::new())
            .await
    }

    /// Get the deposit address of one currency
    #[instrument(skip(self))]
    pub async fn get_coin_address(&self, currency: &str) -> RestResult<CoinAddress> {
        let params = CanonicalParams::new().with("currency", currency);
        self.send(Method::GET, "deposits/coin_address", &params).await
    }

    /// Request a new deposit address
    ///
    /// Address creation is asynchronous; poll [`Self::get_coin_address`]
    /// until it is available.
    #[instrument(skip(self))]
    pub async fn generate_coin_address(
        &self,
        currency: &str,
    ) -> RestResult<GenerateCoinAddressResponse> {
        let params = CanonicalParams::new().with("currency", currency);
        self.send(Method::POST, "deposits/generate_coin_address", &params)
            .await
    }

    /// List withdrawals
    ///
    /// Uses `currency`, `state`, `limit` and `order_by`.
    #[instrument(skip(self))]
    pub async fn get_withdraws(&self, params: &RequestParams) -> RestResult<Vec<Withdraw>> {
        self.send(Method::GET, "withdraws", &params.encode_params())
            .await
    }

    /// Get one withdrawal
    #[instrument(skip(self))]
    pub async fn get_withdraw(&self, uuid: &str) -> RestResult<Withdraw> {
        let params = CanonicalParams::new().with("uuid", uuid);
        self.send(Method::GET, "withdraw", &params).await
    }

    /// List deposits
    ///
    /// Uses `currency`, `state`, `limit` and `order_by`.
    #[instrument(skip(self))]
    pub async fn get_deposits(&self, params: &RequestParams) -> RestResult<Vec<Deposit>> {
        self.send(Method::GET, "deposits", &params.encode_params())
            .await
    }

    /// Deposit KRW from the linked bank account
    ///
    /// # Arguments
    /// * `amount` - Amount in KRW, as a decimal string
    #[instrument(skip(self))]
    pub async fn deposit_krw(&self, amount: &str) -> RestResult<Deposit> {
        let params = CanonicalParams::new().with("amount", amount);
        let deposit: Deposit = self.send(Method::POST, "deposits/krw", &params).await?;
        info!(uuid = %deposit.uuid, "KRW deposit requested");
        Ok(deposit)
    }
}
