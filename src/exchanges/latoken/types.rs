use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_ORDERS_LIMIT: u32 = 100;
pub const DEFAULT_DEPTH_LIMIT: u32 = 100;

// Zero and empty values are left out of the outgoing parameters so the
// server-side default applies.
#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(value: &u32) -> bool {
    *value == 0
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

/// Parameters for `/orders`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrdersQuery {
    #[serde(skip_serializing_if = "is_blank")]
    pub market: Option<String>,
    /// min 0, max 10000
    #[serde(skip_serializing_if = "is_zero")]
    pub offset: u32,
    /// min 1, max 100
    #[serde(skip_serializing_if = "is_zero")]
    pub limit: u32,
}

impl Default for OrdersQuery {
    fn default() -> Self {
        Self {
            market: None,
            offset: 0,
            limit: DEFAULT_ORDERS_LIMIT,
        }
    }
}

impl OrdersQuery {
    /// Active orders for one market, default paging
    pub fn new(market: impl Into<String>) -> Self {
        Self {
            market: Some(market.into()),
            ..Self::default()
        }
    }

    /// Active orders across all markets
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

/// Parameters for `/order/new` (limit order)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewOrder {
    pub market: String,
    pub price: Decimal,
    pub amount: Decimal,
    pub side: OrderSide,
}

impl NewOrder {
    pub fn new(market: impl Into<String>, price: Decimal, amount: Decimal, side: OrderSide) -> Self {
        Self {
            market: market.into(),
            price,
            amount,
            side,
        }
    }
}

/// Parameters for `/order/cancel`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CancelOrder {
    #[serde(rename = "orderId")]
    pub order_id: String,
    pub market: String,
}

impl CancelOrder {
    pub fn new(order_id: impl Into<String>, market: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            market: market.into(),
        }
    }
}

/// Parameters for `/public/ticker`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TickerQuery {
    pub market: String,
}

/// Parameters for `/public/depth/result`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepthQuery {
    pub market: String,
    /// min 1, max 100
    #[serde(skip_serializing_if = "is_zero")]
    pub limit: u32,
    #[serde(skip_serializing_if = "is_zero")]
    pub interval: u32,
}

impl DepthQuery {
    pub fn new(market: impl Into<String>) -> Self {
        Self {
            market: market.into(),
            limit: DEFAULT_DEPTH_LIMIT,
            interval: 0,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_interval(mut self, interval: u32) -> Self {
        self.interval = interval;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kernel::{create_query_string, to_params};
    use std::str::FromStr;

    fn query<T: Serialize>(request: &T) -> String {
        create_query_string(&to_params(request).unwrap())
    }

    #[test]
    fn test_orders_default_paging() {
        assert_eq!(query(&OrdersQuery::new("ETH_BTC")), "market=ETH_BTC&limit=100");
    }

    #[test]
    fn test_orders_zero_paging_is_omitted() {
        let q = OrdersQuery::new("ETH_BTC").with_offset(0).with_limit(0);
        assert_eq!(query(&q), "market=ETH_BTC");
    }

    #[test]
    fn test_orders_explicit_paging() {
        let q = OrdersQuery::new("ETH_BTC").with_offset(20).with_limit(50);
        assert_eq!(query(&q), "market=ETH_BTC&offset=20&limit=50");
    }

    #[test]
    fn test_orders_without_market() {
        assert_eq!(query(&OrdersQuery::all()), "limit=100");
        let blank = OrdersQuery {
            market: Some(String::new()),
            ..OrdersQuery::default()
        };
        assert_eq!(query(&blank), "limit=100");
    }

    #[test]
    fn test_new_order_field_order_and_json() {
        let order = NewOrder::new(
            "LA_USDT",
            Decimal::from_str("0.0251").unwrap(),
            Decimal::from_str("120").unwrap(),
            OrderSide::Sell,
        );
        let params = to_params(&order).unwrap();
        assert_eq!(
            create_query_string(&params),
            "market=LA_USDT&price=0.0251&amount=120&side=sell"
        );
        assert_eq!(
            serde_json::to_string(&params).unwrap(),
            r#"{"market":"LA_USDT","price":"0.0251","amount":"120","side":"sell"}"#
        );
    }

    #[test]
    fn test_cancel_order_uses_camel_case_id() {
        let cancel = CancelOrder::new("abc-123", "LA_USDT");
        assert_eq!(query(&cancel), "orderId=abc-123&market=LA_USDT");
    }

    #[test]
    fn test_depth_defaults() {
        assert_eq!(query(&DepthQuery::new("LA_USDT")), "market=LA_USDT&limit=100");
        let q = DepthQuery::new("LA_USDT").with_limit(10).with_interval(5);
        assert_eq!(query(&q), "market=LA_USDT&limit=10&interval=5");
        let q = DepthQuery::new("LA_USDT").with_limit(0);
        assert_eq!(query(&q), "market=LA_USDT");
    }

    #[test]
    fn test_order_side_display() {
        assert_eq!(OrderSide::Buy.to_string(), "buy");
        assert_eq!(OrderSide::Sell.to_string(), "sell");
    }
}
