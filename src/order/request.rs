//! Validated order request and its wire-parameter mapping.

use crate::exchange::{OrderSide, OrderType, TimeInForce};
use rust_decimal::Decimal;

/// Order variant. Price exists only for limit orders, so a market order
/// cannot carry one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrderKind {
    Market,
    Limit {
        price: Decimal,
        time_in_force: TimeInForce,
    },
}

/// A validated order, immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequest {
    pub symbol: String,
    pub side: OrderSide,
    pub quantity: Decimal,
    pub kind: OrderKind,
}

impl OrderRequest {
    pub fn order_type(&self) -> OrderType {
        match self.kind {
            OrderKind::Market => OrderType::Market,
            OrderKind::Limit { .. } => OrderType::Limit,
        }
    }

    pub fn price(&self) -> Option<Decimal> {
        match self.kind {
            OrderKind::Market => None,
            OrderKind::Limit { price, .. } => Some(price),
        }
    }

    /// Map this request to the parameter pairs the order endpoint expects.
    /// Market orders produce exactly symbol/side/type/quantity; limit orders
    /// additionally carry price and timeInForce.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("symbol", self.symbol.clone()),
            ("side", format!("{:?}", self.side).to_uppercase()),
            ("type", format!("{:?}", self.order_type()).to_uppercase()),
            ("quantity", self.quantity.to_string()),
        ];

        if let OrderKind::Limit {
            price,
            time_in_force,
        } = self.kind
        {
            params.push(("price", price.to_string()));
            params.push(("timeInForce", format!("{:?}", time_in_force).to_uppercase()));
        }

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_market_order_params_have_no_price() {
        let request = OrderRequest {
            symbol: "BTCUSDT".to_string(),
            side: OrderSide::Buy,
            quantity: dec!(0.01),
            kind: OrderKind::Market,
        };

        let params = request.to_params();
        assert_eq!(
            params,
            vec![
                ("symbol", "BTCUSDT".to_string()),
                ("side", "BUY".to_string()),
                ("type", "MARKET".to_string()),
                ("quantity", "0.01".to_string()),
            ]
        );
    }

    #[test]
    fn test_limit_order_params_include_price_and_tif() {
        let request = OrderRequest {
            symbol: "ETHUSDT".to_string(),
            side: OrderSide::Sell,
            quantity: dec!(0.5),
            kind: OrderKind::Limit {
                price: dec!(2000),
                time_in_force: TimeInForce::Gtc,
            },
        };

        let params = request.to_params();
        assert_eq!(
            params,
            vec![
                ("symbol", "ETHUSDT".to_string()),
                ("side", "SELL".to_string()),
                ("type", "LIMIT".to_string()),
                ("quantity", "0.5".to_string()),
                ("price", "2000".to_string()),
                ("timeInForce", "GTC".to_string()),
            ]
        );
    }
}
