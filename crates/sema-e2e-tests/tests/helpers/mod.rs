//! Shared test harness for E2E integration tests.
//!
//! Spins up a wiremock stand-in for the hosted Sema service and builds a
//! real `sema_client::Client` against it, exercising validation, transport,
//! and decoding through the public API surface.

use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sema_client::{Client, ClientConfig};
use sema_protocol::{Field, FieldType, Route};

/// End-to-end test harness: mock service + client wired to it.
pub struct TestHarness {
    /// Mock of the hosted inference service.
    pub server: MockServer,
    /// Client under test, pointed at the mock.
    pub client: Client,
}

impl TestHarness {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let mut config = ClientConfig::new("sk-e2e-test");
        config.hostname = server.uri();
        config.timeout_secs = 2;
        let client = Client::new(config).expect("client construction");
        Self { server, client }
    }

    /// Mount a 200 response for `/v1/intent-router` with the given `result`
    /// payload.
    pub async fn mock_routing_result(&self, result: Value) {
        Mock::given(method("POST"))
            .and(path("/v1/intent-router"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "result": result })),
            )
            .mount(&self.server)
            .await;
    }

    /// Mount a 200 response for `/v1/filter-extractor` with the given
    /// `result` payload.
    pub async fn mock_extraction_result(&self, result: Value) {
        Mock::given(method("POST"))
            .and(path("/v1/filter-extractor"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "result": result })),
            )
            .mount(&self.server)
            .await;
    }

    /// Mount an error response with the service's `detail` body on both
    /// endpoints.
    pub async fn mock_error(&self, status: u16, detail: &str) {
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(status)
                    .set_body_json(serde_json::json!({ "detail": detail })),
            )
            .mount(&self.server)
            .await;
    }

    /// Count of requests the mock service has received.
    pub async fn request_count(&self) -> usize {
        self.server.received_requests().await.unwrap().len()
    }
}

/// Two-route catalog used by most routing scenarios.
pub fn bookstore_routes() -> Vec<Route> {
    vec![
        Route::new("Search", "Find books, authors, or genres in the catalog")
            .with_utterances(vec!["find me a book".into(), "books about rust".into()]),
        Route::new("Help", "Questions about accounts, orders, or the site"),
    ]
}

/// Numeric price field used by extraction scenarios.
pub fn price_field() -> Field {
    Field::new("price", "Item price in US dollars", FieldType::Number)
}
