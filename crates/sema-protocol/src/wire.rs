//! Wire request bodies, bit-exact as the service consumes them.
//!
//! Routes are stamped with their position in the caller's list at
//! serialization time; the routing response refers back to these indices.

use serde::Serialize;
use serde_json::Value;

use crate::field::Field;
use crate::route::Route;

/// One route as transmitted: the caller's route plus its stamped index.
#[derive(Serialize)]
struct IndexedRoute<'a> {
    name: &'a str,
    description: &'a str,
    #[serde(skip_serializing_if = "slice_is_empty")]
    utterances: &'a [String],
    index: usize,
}

fn slice_is_empty(s: &&[String]) -> bool {
    s.is_empty()
}

/// Routing request body.
#[derive(Serialize)]
struct RoutingRequest<'a> {
    query: &'a str,
    routes: Vec<IndexedRoute<'a>>,
    allow_none: bool,
}

/// Extraction request body.
#[derive(Serialize)]
struct ExtractionRequest<'a> {
    query: &'a str,
    field: &'a Field,
    required: bool,
}

/// Build the intent-routing request body.
pub fn routing_request_body(query: &str, routes: &[Route], allow_none: bool) -> Value {
    let routes = routes
        .iter()
        .enumerate()
        .map(|(index, route)| IndexedRoute {
            name: &route.name,
            description: &route.description,
            utterances: &route.utterances,
            index,
        })
        .collect();
    serde_json::to_value(RoutingRequest {
        query,
        routes,
        allow_none,
    })
    .expect("routing request serialization cannot fail")
}

/// Build the filter-extraction request body.
pub fn extraction_request_body(query: &str, field: &Field, required: bool) -> Value {
    serde_json::to_value(ExtractionRequest {
        query,
        field,
        required,
    })
    .expect("extraction request serialization cannot fail")
}
