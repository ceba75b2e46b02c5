//! Type definitions for Binance Futures API requests and responses.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order side (buy or sell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSide {
    Buy,
    Sell,
}

/// Order type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    Limit,
    Market,
}

/// Time in force for limit orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimeInForce {
    Gtc, // Good Till Cancel
    Ioc, // Immediate or Cancel
    Fok, // Fill or Kill
    Gtx, // Post Only (Good Till Crossing)
}

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    New,
    PartiallyFilled,
    Filled,
    Canceled,
    Rejected,
    Expired,
    ExpiredInMatch,
}

/// Order acknowledgement from the exchange.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order_id: i64,
    pub symbol: String,
    pub status: OrderStatus,
    pub client_order_id: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub avg_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub orig_qty: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub executed_qty: Decimal,
    pub side: OrderSide,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub time_in_force: Option<TimeInForce>,
    pub update_time: i64,
}

/// Server time response, used as the connectivity probe.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerTime {
    pub server_time: i64,
}

/// Account-level balance summary from `/fapi/v2/account`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    #[serde(with = "rust_decimal::serde::str")]
    pub total_wallet_balance: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub available_balance: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_unrealized_profit: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_margin_balance: Decimal,
}

/// Error body returned by Binance on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub code: i64,
    pub msg: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_order_response_deserializes_exchange_payload() {
        let body = r#"{
            "orderId": 4055310,
            "symbol": "BTCUSDT",
            "status": "NEW",
            "clientOrderId": "x-5bA9cDeF",
            "price": "0",
            "avgPrice": "0.00000",
            "origQty": "0.010",
            "executedQty": "0",
            "cumQty": "0",
            "cumQuote": "0",
            "timeInForce": "GTC",
            "type": "MARKET",
            "reduceOnly": false,
            "side": "BUY",
            "positionSide": "BOTH",
            "updateTime": 1625097600000
        }"#;

        let response: OrderResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.order_id, 4055310);
        assert_eq!(response.status, OrderStatus::New);
        assert_eq!(response.side, OrderSide::Buy);
        assert_eq!(response.order_type, OrderType::Market);
        assert_eq!(response.orig_qty, dec!(0.010));
        assert_eq!(response.time_in_force, Some(TimeInForce::Gtc));
    }

    #[test]
    fn test_account_summary_deserializes_string_decimals() {
        let body = r#"{
            "totalWalletBalance": "15000.12345678",
            "availableBalance": "14321.00000000",
            "totalUnrealizedProfit": "-12.50000000",
            "totalMarginBalance": "14987.62345678"
        }"#;

        let summary: AccountSummary = serde_json::from_str(body).unwrap();
        assert_eq!(summary.total_wallet_balance, dec!(15000.12345678));
        assert_eq!(summary.total_unrealized_profit, dec!(-12.5));
    }

    #[test]
    fn test_api_error_body() {
        let body = r#"{"code": -1121, "msg": "Invalid symbol."}"#;
        let err: ApiErrorBody = serde_json::from_str(body).unwrap();
        assert_eq!(err.code, -1121);
        assert_eq!(err.msg, "Invalid symbol.");
    }
}
