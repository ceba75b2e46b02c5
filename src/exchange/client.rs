//! Binance USDT-M Futures REST client.

use crate::config::BinanceConfig;
use crate::exchange::types::*;
use crate::exchange::ExchangeError;
use crate::order::OrderRequest;
use hmac::{Hmac, Mac};
use reqwest::Client;
use serde::de::DeserializeOwned;
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, error, info, instrument};

/// Signed REST client for futures order placement and account queries.
///
/// Credentials are injected through [`BinanceConfig`]; no ambient state.
/// Every call is a single attempt with no retry.
pub struct BinanceFuturesClient {
    http: Client,
    api_key: String,
    secret_key: String,
    base_url: String,
}

impl BinanceFuturesClient {
    /// Create a new client from configuration.
    pub fn new(config: &BinanceConfig) -> Result<Self, ExchangeError> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            secret_key: config.secret_key.clone(),
            base_url: config.base_url.clone(),
        })
    }

    /// Generate HMAC-SHA256 signature for authenticated requests.
    fn sign(&self, query_string: &str) -> String {
        let mut mac = Hmac::<Sha256>::new_from_slice(self.secret_key.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(query_string.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Get current timestamp in milliseconds.
    fn timestamp() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards")
            .as_millis() as u64
    }

    fn encode_query(params: &[(&str, String)]) -> String {
        params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Decode a response, mapping non-2xx bodies into the error taxonomy.
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ExchangeError> {
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            return Ok(serde_json::from_str(&body)?);
        }

        let (code, msg) = match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(err) => (err.code, err.msg),
            Err(_) => (
                i64::from(status.as_u16()),
                body.chars().take(200).collect::<String>(),
            ),
        };

        Err(ExchangeError::from_response(status, code, msg))
    }

    // ==================== Orders (Authenticated) ====================

    /// Place a new futures order.
    #[instrument(skip(self))]
    pub async fn place_order(&self, order: &OrderRequest) -> Result<OrderResponse, ExchangeError> {
        let mut params = order.to_params();
        params.push(("timestamp", Self::timestamp().to_string()));

        let query_string = Self::encode_query(&params);
        let signature = self.sign(&query_string);
        let url = format!(
            "{}/fapi/v1/order?{}&signature={}",
            self.base_url, query_string, signature
        );

        debug!(request = %query_string, "submitting order");

        let response = self
            .http
            .post(&url)
            .header("X-MBX-APIKEY", &self.api_key)
            .send()
            .await?;

        let ack: OrderResponse = Self::handle_response(response).await?;
        info!(
            order_id = ack.order_id,
            status = ?ack.status,
            "order accepted by exchange"
        );
        Ok(ack)
    }

    /// Look up a previously placed order.
    #[instrument(skip(self))]
    pub async fn get_order(
        &self,
        symbol: &str,
        order_id: i64,
    ) -> Result<OrderResponse, ExchangeError> {
        let query = format!(
            "symbol={}&orderId={}&timestamp={}",
            symbol,
            order_id,
            Self::timestamp()
        );
        let signature = self.sign(&query);

        let url = format!(
            "{}/fapi/v1/order?{}&signature={}",
            self.base_url, query, signature
        );

        let response = self
            .http
            .get(&url)
            .header("X-MBX-APIKEY", &self.api_key)
            .send()
            .await?;

        Self::handle_response(response).await
    }

    // ==================== Account (Authenticated) ====================

    /// Get the account balance summary.
    #[instrument(skip(self))]
    pub async fn get_account(&self) -> Result<AccountSummary, ExchangeError> {
        let query = format!("timestamp={}", Self::timestamp());
        let signature = self.sign(&query);

        let url = format!(
            "{}/fapi/v2/account?{}&signature={}",
            self.base_url, query, signature
        );

        let response = self
            .http
            .get(&url)
            .header("X-MBX-APIKEY", &self.api_key)
            .send()
            .await?;

        Self::handle_response(response).await
    }

    // ==================== Connectivity (Public) ====================

    /// Get the exchange server time.
    #[instrument(skip(self))]
    pub async fn server_time(&self) -> Result<ServerTime, ExchangeError> {
        let url = format!("{}/fapi/v1/time", self.base_url);
        let response = self.http.get(&url).send().await?;

        Self::handle_response(response).await
    }

    /// Probe connectivity and credential validity.
    ///
    /// Failures are logged and reported as `false`, never propagated.
    pub async fn health_check(&self) -> bool {
        match self.server_time().await {
            Ok(time) => debug!(server_time = time.server_time, "server time probe ok"),
            Err(e) => {
                error!("health check failed on connectivity probe: {}", e);
                return false;
            }
        }

        match self.get_account().await {
            Ok(account) => {
                info!(
                    wallet_balance = %account.total_wallet_balance,
                    "credential probe ok"
                );
                true
            }
            Err(e) => {
                error!("health check failed on credential probe: {}", e);
                false
            }
        }
    }
}
