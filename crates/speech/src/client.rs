//! HTTP client for the speech-feedback provider.

use std::time::Duration;

use serde::Deserialize;

/// Retry delays in seconds (exponential backoff: 1s, 2s, 4s).
const RETRY_DELAYS_SECS: [u64; 3] = [1, 2, 4];

/// HTTP request timeout for a single provider call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Errors from the speech-feedback provider boundary.
#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    /// The HTTP request itself failed (network, DNS, timeout, etc.).
    #[error("Speech provider request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Speech provider error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Configuration for the speech-feedback provider.
#[derive(Debug, Clone)]
pub struct SpeechConfig {
    /// Base URL of the provider API.
    pub api_url: String,
    /// Bearer token for the provider.
    pub api_key: String,
}

impl SpeechConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SPEECH_API_URL` or `SPEECH_API_KEY` is not set,
    /// signalling that pronunciation feedback is not configured.
    pub fn from_env() -> Option<Self> {
        Some(Self {
            api_url: std::env::var("SPEECH_API_URL").ok()?,
            api_key: std::env::var("SPEECH_API_KEY").ok()?,
        })
    }
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Transcript returned by the provider's transcription endpoint.
#[derive(Debug, Deserialize)]
pub struct TranscriptResponse {
    pub text: String,
}

/// Coaching feedback returned by the provider's feedback endpoint.
#[derive(Debug, Deserialize)]
pub struct FeedbackResponse {
    pub feedback: String,
}

/// The combined result of one provider round-trip.
#[derive(Debug, Clone)]
pub struct SpeechFeedback {
    /// What the provider heard.
    pub transcript: String,
    /// Coaching text for the learner.
    pub feedback: String,
}

// ---------------------------------------------------------------------------
// SpeechClient
// ---------------------------------------------------------------------------

/// HTTP client for the speech-feedback provider.
pub struct SpeechClient {
    client: reqwest::Client,
    config: SpeechConfig,
}

impl SpeechClient {
    /// Create a new client for the configured provider.
    pub fn new(config: SpeechConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client, config }
    }

    /// Transcribe an audio blob and request coaching feedback for it.
    ///
    /// Each provider call is retried up to 3 times with exponential
    /// backoff. The caller is expected to convert any returned error into
    /// a stored annotation rather than propagating it.
    pub async fn analyze(
        &self,
        audio_url: &str,
        language: &str,
        word: &str,
        target_ipa: &str,
    ) -> Result<SpeechFeedback, SpeechError> {
        let transcript = self.transcribe(audio_url, language).await?;
        let feedback = self.feedback(word, target_ipa, &transcript).await?;
        Ok(SpeechFeedback {
            transcript,
            feedback,
        })
    }

    /// Transcribe the referenced audio blob.
    async fn transcribe(&self, audio_url: &str, language: &str) -> Result<String, SpeechError> {
        let body = serde_json::json!({
            "audio_url": audio_url,
            "language": language,
        });
        let response: TranscriptResponse = self.post_with_retry("/v1/transcribe", &body).await?;
        Ok(response.text)
    }

    /// Ask the provider for pronunciation coaching text.
    async fn feedback(
        &self,
        word: &str,
        target_ipa: &str,
        transcript: &str,
    ) -> Result<String, SpeechError> {
        let body = serde_json::json!({
            "word": word,
            "target_ipa": target_ipa,
            "transcript": transcript,
        });
        let response: FeedbackResponse = self.post_with_retry("/v1/feedback", &body).await?;
        Ok(response.feedback)
    }

    /// POST a JSON body to a provider endpoint with retry.
    async fn post_with_retry<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, SpeechError> {
        let mut last_err: Option<SpeechError> = None;

        for (attempt, delay_secs) in RETRY_DELAYS_SECS.iter().enumerate() {
            match self.post_once(path, body).await {
                Ok(value) => return Ok(value),
                Err(e) => {
                    tracing::warn!(
                        attempt = attempt + 1,
                        path,
                        error = %e,
                        "Speech provider call failed, retrying"
                    );
                    last_err = Some(e);
                    tokio::time::sleep(Duration::from_secs(*delay_secs)).await;
                }
            }
        }

        // Final attempt after the last backoff.
        match self.post_once(path, body).await {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::error!(path, error = %e, "Speech provider call failed after all retries");
                Err(last_err.unwrap_or(e))
            }
        }
    }

    /// Single provider call without retry.
    async fn post_once<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, SpeechError> {
        let response = self
            .client
            .post(format!("{}{path}", self.config.api_url))
            .bearer_auth(&self.config.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SpeechError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}
