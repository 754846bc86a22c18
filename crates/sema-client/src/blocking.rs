//! Synchronous client facade (feature `blocking`).
//!
//! Mirrors [`crate::Client`] over `reqwest::blocking`. Must not be called
//! from inside an async runtime; use the async client there.

use serde_json::Value;

use sema_protocol::{
    ExtractorLimits, Field, FilterNode, Route, RouteResolution, RouterLimits,
    decode_filter_tree, decode_route_resolution, validate_extraction_request,
    validate_routing_request, wire,
};

use crate::client::extract_result;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::rest::check_status;

/// Blocking client for the Sema inference API.
pub struct BlockingClient {
    client: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
    router_limits: RouterLimits,
    extractor_limits: ExtractorLimits,
}

impl BlockingClient {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        if config.api_key.is_empty() {
            return Err(ClientError::MissingApiKey);
        }
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(!config.tls_verify)
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url(),
            api_key: config.api_key,
            router_limits: RouterLimits::default(),
            extractor_limits: ExtractorLimits::default(),
        })
    }

    /// Blocking counterpart of [`crate::Client::route_intent`].
    pub fn route_intent(
        &self,
        query: &str,
        routes: &[Route],
        allow_none: bool,
    ) -> ClientResult<RouteResolution> {
        validate_routing_request(query, routes, &self.router_limits)?;
        let body = wire::routing_request_body(query, routes, allow_none);
        let response = self.post("/intent-router", &body)?;
        let result = extract_result(&response)?;
        Ok(decode_route_resolution(result, routes)?)
    }

    /// Blocking counterpart of [`crate::Client::extract_filter`].
    pub fn extract_filter(
        &self,
        query: &str,
        field: &Field,
        required: bool,
    ) -> ClientResult<Option<FilterNode>> {
        validate_extraction_request(query, field, &self.extractor_limits)?;
        let body = wire::extraction_request_body(query, field, required);
        let response = self.post("/filter-extractor", &body)?;
        let result = extract_result(&response)?;
        Ok(decode_filter_tree(result)?)
    }

    fn post(&self, endpoint: &str, body: &Value) -> ClientResult<Value> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!(method = "POST", url = %url, "sema api request (blocking)");

        let response = self
            .client
            .post(&url)
            .header("api-key", &self.api_key)
            .json(body)
            .send()
            .inspect_err(|e| tracing::warn!(error = %e, url = %url, "sema api request failed"))?;

        let status = response.status().as_u16();
        let body: Value = response.json().map_err(|e| {
            tracing::warn!(error = %e, status, "sema api returned a non-JSON body");
            ClientError::MalformedResponse(format!("bad JSON in response: {e}"))
        })?;

        check_status(status, body)
    }
}
