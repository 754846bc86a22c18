//! Thin REST adapter over reqwest.
//!
//! One job: POST a JSON body to an endpoint, hand back the parsed JSON
//! response body, and turn everything else (connect failures, non-2xx
//! statuses, non-JSON bodies) into the typed client errors.

use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult, StatusKind};

/// Async REST adapter holding the shared connection pool.
#[derive(Debug)]
pub struct RestAdapter {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RestAdapter {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(!config.tls_verify)
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url(),
            api_key: config.api_key.clone(),
        })
    }

    /// POST `body` to `endpoint` and return the parsed 2xx response body.
    pub async fn post(&self, endpoint: &str, body: &Value) -> ClientResult<Value> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!(method = "POST", url = %url, "sema api request");

        let response = self
            .client
            .post(&url)
            .header("api-key", &self.api_key)
            .json(body)
            .send()
            .await
            .inspect_err(|e| tracing::warn!(error = %e, url = %url, "sema api request failed"))?;

        let status = response.status().as_u16();
        let body: Value = response.json().await.map_err(|e| {
            tracing::warn!(error = %e, status, "sema api returned a non-JSON body");
            ClientError::MalformedResponse(format!("bad JSON in response: {e}"))
        })?;

        check_status(status, body)
    }
}

/// Pass a 2xx body through; map anything else to a typed status error.
pub(crate) fn check_status(status: u16, body: Value) -> ClientResult<Value> {
    if (200..300).contains(&status) {
        tracing::debug!(status, "sema api response");
        return Ok(body);
    }
    let message = error_message(&body, status);
    tracing::warn!(status, message = %message, "sema api error response");
    Err(ClientError::Status {
        kind: StatusKind::from_status(status),
        status,
        message,
    })
}

/// The service reports errors as `{"detail": "..."}`.
fn error_message(body: &Value, status: u16) -> String {
    body.get("detail")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_else(|| format!("HTTP {status}"))
}
