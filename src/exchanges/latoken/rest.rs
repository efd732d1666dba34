use crate::core::errors::ExchangeError;
use crate::core::kernel::{to_params, Params, RestClient};
use crate::exchanges::latoken::types::{CancelOrder, DepthQuery, NewOrder, OrdersQuery, TickerQuery};
use serde_json::Value;
use tracing::instrument;

pub const BALANCES_ENDPOINT: &str = "/account/balances";
pub const ORDERS_ENDPOINT: &str = "/orders";
pub const NEW_ORDER_ENDPOINT: &str = "/order/new";
pub const CANCEL_ORDER_ENDPOINT: &str = "/order/cancel";
pub const TICKER_ENDPOINT: &str = "/public/ticker";
pub const DEPTH_ENDPOINT: &str = "/public/depth/result";
pub const MARKETS_ENDPOINT: &str = "/public/markets";

/// LATOKEN REST API endpoints
///
/// Each operation only assembles its parameters and delegates to the
/// transport. Responses are returned as raw JSON.
#[derive(Debug, Clone)]
pub struct LatokenRest<R: RestClient> {
    rest_client: R,
}

impl<R: RestClient> LatokenRest<R> {
    pub fn new(rest_client: R) -> Self {
        Self { rest_client }
    }

    pub fn rest_client(&self) -> &R {
        &self.rest_client
    }

    // Account API endpoints (require authentication)

    /// List of user balances for all currencies
    #[instrument(skip(self))]
    pub async fn get_balances(&self) -> Result<Value, ExchangeError> {
        self.rest_client
            .get(BALANCES_ENDPOINT, &Params::new(), true)
            .await
    }

    /// Query account active orders
    #[instrument(skip(self))]
    pub async fn get_orders(&self, query: &OrdersQuery) -> Result<Value, ExchangeError> {
        let params = to_params(query)?;
        self.rest_client.get(ORDERS_ENDPOINT, &params, true).await
    }

    // Trading API endpoints (require authentication)

    /// Place a limit order
    #[instrument(skip(self))]
    pub async fn add_order(&self, order: &NewOrder) -> Result<Value, ExchangeError> {
        let params = to_params(order)?;
        self.rest_client.post(NEW_ORDER_ENDPOINT, &params, true).await
    }

    #[instrument(skip(self))]
    pub async fn cancel_order(&self, cancel: &CancelOrder) -> Result<Value, ExchangeError> {
        let params = to_params(cancel)?;
        self.rest_client
            .post(CANCEL_ORDER_ENDPOINT, &params, true)
            .await
    }

    // Public market data

    /// Trade details for a market (market rates)
    #[instrument(skip(self))]
    pub async fn ticker(&self, market: &str) -> Result<Value, ExchangeError> {
        let params = to_params(&TickerQuery {
            market: market.to_string(),
        })?;
        self.rest_client.get(TICKER_ENDPOINT, &params, false).await
    }

    /// Market depth
    #[instrument(skip(self))]
    pub async fn order_book(&self, query: &DepthQuery) -> Result<Value, ExchangeError> {
        let params = to_params(query)?;
        self.rest_client.get(DEPTH_ENDPOINT, &params, false).await
    }

    /// Info on all markets
    #[instrument(skip(self))]
    pub async fn markets(&self) -> Result<Value, ExchangeError> {
        self.rest_client
            .get(MARKETS_ENDPOINT, &Params::new(), false)
            .await
    }
}
