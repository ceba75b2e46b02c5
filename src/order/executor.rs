//! Order execution workflow: place the order, fold the outcome into a result.

use crate::exchange::{BinanceFuturesClient, ExchangeError, OrderResponse, OrderStatus};
use crate::order::OrderRequest;
use rust_decimal::Decimal;
use tracing::{error, info};

/// Outcome of a single order placement attempt.
///
/// Exchange rejections and network failures are folded into `error`; they are
/// not exceptional from the caller's perspective. Only auth failures escape
/// as [`ExchangeError`].
#[derive(Debug, Clone)]
pub struct OrderResult {
    pub accepted: bool,
    pub order_id: Option<i64>,
    pub status: Option<OrderStatus>,
    pub executed_qty: Option<Decimal>,
    pub response: Option<OrderResponse>,
    pub error: Option<String>,
}

impl OrderResult {
    fn accepted(response: OrderResponse) -> Self {
        Self {
            accepted: true,
            order_id: Some(response.order_id),
            status: Some(response.status),
            executed_qty: Some(response.executed_qty),
            response: Some(response),
            error: None,
        }
    }

    fn rejected(error: &ExchangeError) -> Self {
        Self {
            accepted: false,
            order_id: None,
            status: None,
            executed_qty: None,
            response: None,
            error: Some(error.to_string()),
        }
    }
}

/// Drives one validate-build-place-report cycle against the exchange.
pub struct OrderExecutor<'a> {
    client: &'a BinanceFuturesClient,
}

impl<'a> OrderExecutor<'a> {
    pub fn new(client: &'a BinanceFuturesClient) -> Self {
        Self { client }
    }

    /// Submit a validated order and report the outcome.
    pub async fn execute(&self, request: &OrderRequest) -> Result<OrderResult, ExchangeError> {
        info!(
            symbol = %request.symbol,
            side = ?request.side,
            order_type = ?request.order_type(),
            quantity = %request.quantity,
            price = ?request.price(),
            "submitting order"
        );

        match self.client.place_order(request).await {
            Ok(response) => {
                info!(
                    order_id = response.order_id,
                    status = ?response.status,
                    executed_qty = %response.executed_qty,
                    "order placed"
                );
                Ok(OrderResult::accepted(response))
            }
            Err(e) if e.is_auth() => {
                error!("order placement aborted: {}", e);
                Err(e)
            }
            Err(e) => {
                error!("order placement failed: {}", e);
                Ok(OrderResult::rejected(&e))
            }
        }
    }
}
