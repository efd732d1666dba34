use crate::core::errors::ExchangeError;
use crate::exchanges::latoken::types::{CancelOrder, DepthQuery, NewOrder, OrdersQuery};
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
pub trait MarketDataSource {
    /// Get trade details for a market (rates)
    async fn ticker(&self, market: &str) -> Result<Value, ExchangeError>;

    /// Get market depth
    async fn order_book(&self, query: &DepthQuery) -> Result<Value, ExchangeError>;

    /// Get info on all markets
    async fn markets(&self) -> Result<Value, ExchangeError>;
}

#[async_trait]
pub trait OrderPlacer {
    /// Place a limit order
    async fn add_order(&self, order: &NewOrder) -> Result<Value, ExchangeError>;

    async fn cancel_order(&self, cancel: &CancelOrder) -> Result<Value, ExchangeError>;
}

#[async_trait]
pub trait AccountInfo {
    /// Balances for all currencies
    async fn get_balances(&self) -> Result<Value, ExchangeError>;

    /// Active orders of the account
    async fn get_orders(&self, query: &OrdersQuery) -> Result<Value, ExchangeError>;
}

#[async_trait]
pub trait ExchangeConnector: MarketDataSource + OrderPlacer + AccountInfo {}
