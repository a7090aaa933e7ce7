//! Trading endpoints for order management
//!
//! These endpoints require authentication.

use crate::error::{RestError, RestResult};
use crate::transport::Transport;
use crate::types::{Order, OrderRequest};
use reqwest::Method;
use tracing::{info, instrument, warn};
use upbit_auth::Credentials;
use upbit_types::{CanonicalParams, EncodeParams, RequestParams};

/// Trading endpoints for order management
pub struct TradingEndpoints<'a> {
    transport: &'a Transport,
    credentials: &'a Credentials,
}

impl<'a> TradingEndpoints<'a> {
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

    /// Get one order, including its fills
    ///
    /// # Arguments
    /// * `uuid` - Order id
    #[instrument(skip(self))]
    pub async fn get_order(&self, uuid: &str) -> RestResult<Order> {
        let params = CanonicalParams::new().with("uuid", uuid);
        self.send(Method::GET, "order", &params).await
    }

    /// List orders
    ///
    /// Uses `market`, `state`, `page`, `limit` and `order_by`.
    #[instrument(skip(self))]
    pub async fn get_orders(&self, params: &RequestParams) -> RestResult<Vec<Order>> {
        self.send(Method::GET, "orders", &params.encode_params()).await
    }

    /// List orders still waiting to fill
    ///
    /// Uses `market`, `state`, `page`, `limit` and `order_by`.
    #[instrument(skip(self))]
    pub async fn get_open_orders(&self, params: &RequestParams) -> RestResult<Vec<Order>> {
        self.send(Method::GET, "orders/open", &params.encode_params())
            .await
    }

    /// List filled or cancelled orders
    ///
    /// Uses `market`, `state`, `limit` and `order_by`.
    #[instrument(skip(self))]
    pub async fn get_closed_orders(&self, params: &RequestParams) -> RestResult<Vec<Order>> {
        self.send(Method::GET, "orders/closed", &params.encode_params())
            .await
    }

    /// Place an order
    ///
    /// The request is checked locally before anything is sent.
    #[instrument(skip(self, order), fields(market = %order.market, side = %order.side, ord_type = %order.ord_type))]
    pub async fn place_order(&self, order: &OrderRequest) -> RestResult<Order> {
        order.validate().map_err(RestError::InvalidParameter)?;

        let placed: Order = self
            .send(Method::POST, "orders", &order.encode_params())
            .await?;

        info!(uuid = %placed.uuid, "Order placed");
        Ok(placed)
    }

    /// Cancel an order
    ///
    /// Returns `true` when the exchange echoes the order id back.
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, uuid: &str) -> RestResult<bool> {
        let params = CanonicalParams::new().with("uuid", uuid);
        let order: Order = self.send(Method::DELETE, "order", &params).await?;

        if order.uuid.is_empty() {
            warn!("Cancel response carried no order id");
            return Ok(false);
        }

        info!(uuid = %order.uuid, "Order cancelled");
        Ok(true)
    }
}
