//! Binance USDT-M Futures REST integration.
//!
//! Provides a signed REST client for:
//! - Order placement and lookup
//! - Account balance summary
//! - Server time / connectivity probe

mod client;
mod types;

pub use client::BinanceFuturesClient;
pub use types::*;

use thiserror::Error;

/// Binance error codes that indicate bad or rejected credentials.
/// -1022 invalid signature, -2014 bad API key format, -2015 rejected key/IP.
const AUTH_ERROR_CODES: [i64; 3] = [-1022, -2014, -2015];

/// Errors from the exchange boundary.
///
/// `Auth` is fatal for the whole invocation; the remaining variants terminate
/// only the current operation and are surfaced to the user as a rejection.
#[derive(Debug, Error)]
pub enum ExchangeError {
    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("exchange rejected request (code {code}): {msg}")]
    Rejected { code: i64, msg: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode exchange response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ExchangeError {
    /// Whether this error means the credentials themselves are bad.
    pub fn is_auth(&self) -> bool {
        matches!(self, ExchangeError::Auth(_))
    }

    /// Classify a non-2xx response into `Auth` or `Rejected`.
    pub(crate) fn from_response(status: reqwest::StatusCode, code: i64, msg: String) -> Self {
        if status == reqwest::StatusCode::UNAUTHORIZED || AUTH_ERROR_CODES.contains(&code) {
            ExchangeError::Auth(msg)
        } else {
            ExchangeError::Rejected { code, msg }
        }
    }
}
