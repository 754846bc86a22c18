//! Async client facade: validate, call, decode.

use serde_json::Value;

use sema_protocol::{
    ExtractorLimits, Field, FilterNode, Route, RouteResolution, RouterLimits,
    decode_filter_tree, decode_route_resolution, validate_extraction_request,
    validate_routing_request, wire,
};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::rest::RestAdapter;

/// Async client for the Sema inference API.
///
/// Each call is one independent request: local validation (fail fast, no
/// network call on violation), one POST, then decoding of the `result`
/// payload into the typed model.
#[derive(Debug)]
pub struct Client {
    rest: RestAdapter,
    router_limits: RouterLimits,
    extractor_limits: ExtractorLimits,
}

impl Client {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        if config.api_key.is_empty() {
            return Err(ClientError::MissingApiKey);
        }
        Ok(Self {
            rest: RestAdapter::new(&config)?,
            router_limits: RouterLimits::default(),
            extractor_limits: ExtractorLimits::default(),
        })
    }

    /// Match `query` against `routes`; returns the selected routes in the
    /// service's relevance order. Empty when nothing matched and
    /// `allow_none` permitted that outcome.
    pub async fn route_intent(
        &self,
        query: &str,
        routes: &[Route],
        allow_none: bool,
    ) -> ClientResult<RouteResolution> {
        validate_routing_request(query, routes, &self.router_limits)?;
        let body = wire::routing_request_body(query, routes, allow_none);
        let response = self.rest.post("/intent-router", &body).await?;
        let result = extract_result(&response)?;
        Ok(decode_route_resolution(result, routes)?)
    }

    /// Derive a boolean filter over `field` from `query`. `Ok(None)` means
    /// the service could derive no filter.
    pub async fn extract_filter(
        &self,
        query: &str,
        field: &Field,
        required: bool,
    ) -> ClientResult<Option<FilterNode>> {
        validate_extraction_request(query, field, &self.extractor_limits)?;
        let body = wire::extraction_request_body(query, field, required);
        let response = self.rest.post("/filter-extractor", &body).await?;
        let result = extract_result(&response)?;
        Ok(decode_filter_tree(result)?)
    }
}

/// Pull the `result` payload out of a response envelope.
pub(crate) fn extract_result(response: &Value) -> ClientResult<&Value> {
    response
        .get("result")
        .ok_or_else(|| ClientError::MalformedResponse("response has no \"result\" key".into()))
}
