//! Input validation for raw CLI order parameters.
//!
//! Only local shape checks happen here. Lot size, tick size, and minimum
//! notional are left to the exchange's own rejection response.

use crate::exchange::{OrderSide, OrderType, TimeInForce};
use crate::order::{OrderKind, OrderRequest};
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Validation failures, each naming the offending field.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,

    #[error("invalid symbol '{0}': expected uppercase alphanumeric (e.g. BTCUSDT)")]
    MalformedSymbol(String),

    #[error("invalid side '{0}': allowed values are BUY, SELL")]
    InvalidSide(String),

    #[error("invalid order type '{0}': allowed values are MARKET, LIMIT")]
    InvalidOrderType(String),

    #[error("quantity must be numeric, got '{0}'")]
    NonNumericQuantity(String),

    #[error("quantity must be positive, got {0}")]
    NonPositiveQuantity(Decimal),

    #[error("price is required for LIMIT orders")]
    MissingPrice,

    #[error("price must be numeric, got '{0}'")]
    NonNumericPrice(String),

    #[error("price must be positive, got {0}")]
    NonPositivePrice(Decimal),

    #[error("price is not allowed for MARKET orders")]
    UnexpectedPrice,
}

pub fn validate_symbol(symbol: &str) -> Result<String, ValidationError> {
    if symbol.is_empty() {
        return Err(ValidationError::EmptySymbol);
    }

    let well_formed = symbol
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit());
    if !well_formed {
        return Err(ValidationError::MalformedSymbol(symbol.to_string()));
    }

    Ok(symbol.to_string())
}

/// Case-insensitive on input, normalized to BUY/SELL.
pub fn validate_side(side: &str) -> Result<OrderSide, ValidationError> {
    match side.to_ascii_uppercase().as_str() {
        "BUY" => Ok(OrderSide::Buy),
        "SELL" => Ok(OrderSide::Sell),
        _ => Err(ValidationError::InvalidSide(side.to_string())),
    }
}

/// Case-insensitive on input, normalized to MARKET/LIMIT.
pub fn validate_order_type(order_type: &str) -> Result<OrderType, ValidationError> {
    match order_type.to_ascii_uppercase().as_str() {
        "MARKET" => Ok(OrderType::Market),
        "LIMIT" => Ok(OrderType::Limit),
        _ => Err(ValidationError::InvalidOrderType(order_type.to_string())),
    }
}

pub fn validate_quantity(quantity: &str) -> Result<Decimal, ValidationError> {
    let quantity = Decimal::from_str(quantity)
        .map_err(|_| ValidationError::NonNumericQuantity(quantity.to_string()))?;

    if quantity <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveQuantity(quantity));
    }

    Ok(quantity)
}

fn validate_price(price: &str) -> Result<Decimal, ValidationError> {
    let price =
        Decimal::from_str(price).map_err(|_| ValidationError::NonNumericPrice(price.to_string()))?;

    if price <= Decimal::ZERO {
        return Err(ValidationError::NonPositivePrice(price));
    }

    Ok(price)
}

/// Validate all raw order inputs and assemble an [`OrderRequest`].
///
/// Price is required for LIMIT orders and rejected for MARKET orders.
pub fn validate_order(
    symbol: &str,
    side: &str,
    order_type: &str,
    quantity: &str,
    price: Option<&str>,
) -> Result<OrderRequest, ValidationError> {
    let symbol = validate_symbol(symbol)?;
    let side = validate_side(side)?;
    let order_type = validate_order_type(order_type)?;
    let quantity = validate_quantity(quantity)?;

    let kind = match order_type {
        OrderType::Market => {
            if price.is_some() {
                return Err(ValidationError::UnexpectedPrice);
            }
            OrderKind::Market
        }
        OrderType::Limit => {
            let price = validate_price(price.ok_or(ValidationError::MissingPrice)?)?;
            OrderKind::Limit {
                price,
                time_in_force: TimeInForce::Gtc,
            }
        }
    };

    debug!(
        symbol = %symbol,
        side = ?side,
        order_type = ?order_type,
        quantity = %quantity,
        "order input validated"
    );

    Ok(OrderRequest {
        symbol,
        side,
        quantity,
        kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn market(quantity: &str) -> Result<OrderRequest, ValidationError> {
        validate_order("BTCUSDT", "BUY", "MARKET", quantity, None)
    }

    #[test]
    fn test_valid_market_order() {
        let request = market("0.01").unwrap();
        assert_eq!(request.symbol, "BTCUSDT");
        assert_eq!(request.side, OrderSide::Buy);
        assert_eq!(request.quantity, dec!(0.01));
        assert_eq!(request.kind, OrderKind::Market);
    }

    #[test]
    fn test_valid_limit_order_carries_price_and_gtc() {
        let request = validate_order("ETHUSDT", "SELL", "LIMIT", "0.5", Some("2000")).unwrap();
        assert_eq!(
            request.kind,
            OrderKind::Limit {
                price: dec!(2000),
                time_in_force: TimeInForce::Gtc,
            }
        );
    }

    #[test]
    fn test_side_and_type_are_case_insensitive() {
        let request = validate_order("BTCUSDT", "buy", "market", "1", None).unwrap();
        assert_eq!(request.side, OrderSide::Buy);
        assert_eq!(request.order_type(), OrderType::Market);

        let request = validate_order("BTCUSDT", "Sell", "Limit", "1", Some("100")).unwrap();
        assert_eq!(request.side, OrderSide::Sell);
        assert_eq!(request.order_type(), OrderType::Limit);
    }

    #[test]
    fn test_unknown_side_is_rejected() {
        let err = validate_order("BTCUSDT", "HOLD", "MARKET", "1", None).unwrap_err();
        assert_eq!(err, ValidationError::InvalidSide("HOLD".to_string()));
    }

    #[test]
    fn test_unknown_order_type_is_rejected() {
        let err = validate_order("BTCUSDT", "BUY", "STOP", "1", None).unwrap_err();
        assert_eq!(err, ValidationError::InvalidOrderType("STOP".to_string()));
    }

    #[test]
    fn test_empty_symbol_is_rejected() {
        let err = validate_order("", "BUY", "MARKET", "1", None).unwrap_err();
        assert_eq!(err, ValidationError::EmptySymbol);
    }

    #[test]
    fn test_malformed_symbols_are_rejected() {
        for symbol in ["btcusdt", "BTC-USDT", "BTC/USDT", "BTC USDT"] {
            let err = validate_order(symbol, "BUY", "MARKET", "1", None).unwrap_err();
            assert_eq!(err, ValidationError::MalformedSymbol(symbol.to_string()));
        }
    }

    #[test]
    fn test_non_positive_quantity_is_rejected() {
        assert_eq!(
            market("0").unwrap_err(),
            ValidationError::NonPositiveQuantity(dec!(0))
        );
        assert_eq!(
            market("-1").unwrap_err(),
            ValidationError::NonPositiveQuantity(dec!(-1))
        );
    }

    #[test]
    fn test_non_numeric_quantity_is_rejected() {
        assert_eq!(
            market("lots").unwrap_err(),
            ValidationError::NonNumericQuantity("lots".to_string())
        );
        assert_eq!(
            market("").unwrap_err(),
            ValidationError::NonNumericQuantity(String::new())
        );
    }

    #[test]
    fn test_quantity_is_checked_regardless_of_other_fields() {
        // Bad quantity with otherwise-broken fields still fails on a field,
        // never panics; with valid fields the quantity error is reported.
        let err = validate_order("ETHUSDT", "SELL", "LIMIT", "-0.5", Some("2000")).unwrap_err();
        assert_eq!(err, ValidationError::NonPositiveQuantity(dec!(-0.5)));
    }

    #[test]
    fn test_limit_without_price_is_rejected() {
        let err = validate_order("BTCUSDT", "BUY", "LIMIT", "1", None).unwrap_err();
        assert_eq!(err, ValidationError::MissingPrice);
    }

    #[test]
    fn test_market_with_price_is_rejected() {
        let err = validate_order("BTCUSDT", "BUY", "MARKET", "1", Some("50000")).unwrap_err();
        assert_eq!(err, ValidationError::UnexpectedPrice);
    }

    #[test]
    fn test_non_positive_limit_price_is_rejected() {
        let err = validate_order("BTCUSDT", "BUY", "LIMIT", "1", Some("0")).unwrap_err();
        assert_eq!(err, ValidationError::NonPositivePrice(dec!(0)));

        let err = validate_order("BTCUSDT", "BUY", "LIMIT", "1", Some("abc")).unwrap_err();
        assert_eq!(err, ValidationError::NonNumericPrice("abc".to_string()));
    }
}
