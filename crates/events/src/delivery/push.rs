//! Push notification delivery via an external push gateway.
//!
//! [`PushDelivery`] POSTs a JSON payload to the configured gateway URL
//! (e.g. an FCM relay) and retries failed attempts with exponential
//! backoff before giving up.

use std::time::Duration;

use lingo_core::types::DbId;

/// Retry delays in seconds (exponential backoff: 1s, 2s, 4s).
const RETRY_DELAYS_SECS: [u64; 3] = [1, 2, 4];

/// HTTP request timeout for a single delivery attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for push delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum PushError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The gateway returned a non-2xx status code.
    #[error("Push gateway returned HTTP {0}")]
    HttpStatus(u16),
}

// ---------------------------------------------------------------------------
// PushConfig
// ---------------------------------------------------------------------------

/// Configuration for the push gateway.
#[derive(Debug, Clone)]
pub struct PushConfig {
    /// Gateway endpoint URL.
    pub gateway_url: String,
    /// Optional bearer token for the gateway.
    pub api_key: Option<String>,
}

impl PushConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `PUSH_GATEWAY_URL` is not set, signalling that
    /// push delivery is not configured and should be skipped.
    pub fn from_env() -> Option<Self> {
        let gateway_url = std::env::var("PUSH_GATEWAY_URL").ok()?;
        Some(Self {
            gateway_url,
            api_key: std::env::var("PUSH_GATEWAY_API_KEY").ok(),
        })
    }
}

// ---------------------------------------------------------------------------
// PushDelivery
// ---------------------------------------------------------------------------

/// Delivers push notifications through the external gateway.
pub struct PushDelivery {
    client: reqwest::Client,
    config: PushConfig,
}

impl PushDelivery {
    /// Create a new delivery service with a pre-configured HTTP client.
    pub fn new(config: PushConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client, config }
    }

    /// Deliver a push notification with retry.
    ///
    /// Retries up to 3 times with exponential backoff before giving up.
    /// Returns `Ok(())` on the first successful attempt.
    pub async fn deliver(
        &self,
        user_id: DbId,
        title: &str,
        message: &str,
        data: &serde_json::Value,
    ) -> Result<(), PushError> {
        let payload = serde_json::json!({
            "user_id": user_id,
            "title": title,
            "message": message,
            "data": data,
        });

        let mut last_err: Option<PushError> = None;

        for (attempt, delay_secs) in RETRY_DELAYS_SECS.iter().enumerate() {
            match self.try_send(&payload).await {
                Ok(()) => return Ok(()),
                Err(e) => {
                    tracing::warn!(
                        attempt = attempt + 1,
                        user_id,
                        error = %e,
                        "Push delivery attempt failed, retrying"
                    );
                    last_err = Some(e);
                    tokio::time::sleep(Duration::from_secs(*delay_secs)).await;
                }
            }
        }

        // One final attempt after the last backoff window.
        match self.try_send(&payload).await {
            Ok(()) => Ok(()),
            Err(e) => {
                tracing::error!(user_id, error = %e, "Push delivery failed after all retries");
                Err(last_err.unwrap_or(e))
            }
        }
    }

    /// Single delivery attempt without retry.
    async fn try_send(&self, payload: &serde_json::Value) -> Result<(), PushError> {
        let mut request = self.client.post(&self.config.gateway_url).json(payload);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(PushError::HttpStatus(response.status().as_u16()));
        }
        Ok(())
    }
}
