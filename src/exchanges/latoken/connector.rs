use crate::core::config::{ConfigUpdate, ExchangeConfig};
use crate::core::errors::ExchangeError;
use crate::core::kernel::{ReqwestRest, RestClient};
use crate::core::traits::{AccountInfo, ExchangeConnector, MarketDataSource, OrderPlacer};
use crate::exchanges::latoken::builder::LatokenBuilder;
use crate::exchanges::latoken::rest::LatokenRest;
use crate::exchanges::latoken::types::{CancelOrder, DepthQuery, NewOrder, OrdersQuery};
use async_trait::async_trait;
use serde_json::Value;

/// LATOKEN connector: configuration plus the REST endpoints
///
/// Cheap to clone and safe to share across tasks; calls in flight only read
/// the configuration.
#[derive(Debug, Clone)]
pub struct LatokenConnector<R: RestClient> {
    config: ExchangeConfig,
    rest: LatokenRest<R>,
    rest_timeout: u64,
}

impl<R: RestClient> LatokenConnector<R> {
    pub fn new(rest: R, config: ExchangeConfig, rest_timeout: u64) -> Self {
        Self {
            config,
            rest: LatokenRest::new(rest),
            rest_timeout,
        }
    }

    pub fn config(&self) -> &ExchangeConfig {
        &self.config
    }

    pub fn rest(&self) -> &LatokenRest<R> {
        &self.rest
    }

    pub fn rest_client(&self) -> &R {
        self.rest.rest_client()
    }
}

impl LatokenConnector<ReqwestRest> {
    /// Update base URL, credentials and logger, then rebuild the transport.
    ///
    /// See [`ExchangeConfig::configure`] for the merge rules.
    pub fn configure(&mut self, update: ConfigUpdate) -> Result<(), ExchangeError> {
        let mut config = self.config.clone();
        config.configure(update);

        let rest = LatokenBuilder::new()
            .with_config(config.clone())
            .with_rest_timeout(self.rest_timeout)
            .build_rest_client()?;

        self.config = config;
        self.rest = LatokenRest::new(rest);
        Ok(())
    }
}

#[async_trait]
impl<R: RestClient> AccountInfo for LatokenConnector<R> {
    async fn get_balances(&self) -> Result<Value, ExchangeError> {
        self.rest.get_balances().await
    }

    async fn get_orders(&self, query: &OrdersQuery) -> Result<Value, ExchangeError> {
        self.rest.get_orders(query).await
    }
}

#[async_trait]
impl<R: RestClient> OrderPlacer for LatokenConnector<R> {
    async fn add_order(&self, order: &NewOrder) -> Result<Value, ExchangeError> {
        self.rest.add_order(order).await
    }

    async fn cancel_order(&self, cancel: &CancelOrder) -> Result<Value, ExchangeError> {
        self.rest.cancel_order(cancel).await
    }
}

#[async_trait]
impl<R: RestClient> MarketDataSource for LatokenConnector<R> {
    async fn ticker(&self, market: &str) -> Result<Value, ExchangeError> {
        self.rest.ticker(market).await
    }

    async fn order_book(&self, query: &DepthQuery) -> Result<Value, ExchangeError> {
        self.rest.order_book(query).await
    }

    async fn markets(&self) -> Result<Value, ExchangeError> {
        self.rest.markets().await
    }
}

impl<R: RestClient> ExchangeConnector for LatokenConnector<R> {}
