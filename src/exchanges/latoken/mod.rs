pub mod builder;
pub mod connector;
pub mod rest;
pub mod signer;
pub mod types;

// Re-export main components
pub use builder::{build_connector, LatokenBuilder};
pub use connector::LatokenConnector;
pub use rest::LatokenRest;
pub use signer::LatokenSigner;
pub use types::{CancelOrder, DepthQuery, NewOrder, OrderSide, OrdersQuery, TickerQuery};
