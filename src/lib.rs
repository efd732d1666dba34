pub mod core;
pub mod exchanges;

pub use crate::core::{
    config::{ConfigUpdate, ExchangeConfig},
    errors::ExchangeError,
    logging::{Logger, TracingLogger},
    traits::{AccountInfo, ExchangeConnector, MarketDataSource, OrderPlacer},
};
pub use crate::exchanges::latoken::{LatokenBuilder, LatokenConnector};
