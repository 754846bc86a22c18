//! Intent-routing data model and response decoding.
//!
//! A request carries an ordered list of [`Route`]s; the service answers with
//! the indices of the routes it selected, ordered by relevance. The request
//! route list is the arena; the response holds indices into it, and every
//! index is bounds-checked at decode time rather than trusted.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DecodeError, DecodeResult};

/// A named intent category a query can be matched against.
///
/// Identity within a request is positional: the route's index in the slice
/// passed to the routing operation is stamped into the wire body and is what
/// the service's response refers back to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Route {
    /// Short route name (e.g. "Search").
    pub name: String,
    /// What kind of queries this route should capture.
    pub description: String,
    /// Example utterances for this route. May be empty.
    #[serde(default)]
    pub utterances: Vec<String>,
}

impl Route {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            utterances: Vec::new(),
        }
    }

    pub fn with_utterances(mut self, utterances: Vec<String>) -> Self {
        self.utterances = utterances;
        self
    }
}

/// A route the service selected, annotated with its index in the original
/// request. Constructed only by [`decode_route_resolution`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    /// Position of this route in the request's route list.
    pub index: usize,
    /// Copy of the originally supplied route.
    pub route: Route,
}

/// Decoded result of an intent-routing call: the selected routes in the
/// service's relevance order. Empty when no route matched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteResolution {
    pub routes: Vec<ResolvedRoute>,
}

impl RouteResolution {
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedRoute> {
        self.routes.iter()
    }
}

/// Decode the `result` payload of a routing response against the original
/// request's route list.
///
/// Two wire revisions are in the field and both are accepted here:
/// a bare index array `[2, 0]`, and the later `{"routes": [{"index": 2},
/// {"index": 0}]}`. Response order is preserved (the service orders by
/// relevance, not by request position). An empty payload decodes to an empty
/// resolution; an index with no corresponding route is a hard error.
pub fn decode_route_resolution(raw: &Value, routes: &[Route]) -> DecodeResult<RouteResolution> {
    let indices = decode_index_list(raw)?;

    let mut resolved = Vec::with_capacity(indices.len());
    for (path, index) in indices {
        let route =
            routes
                .get(index as usize)
                .ok_or_else(|| DecodeError::IndexOutOfRange {
                    path,
                    index,
                    route_count: routes.len(),
                })?;
        resolved.push(ResolvedRoute {
            index: index as usize,
            route: route.clone(),
        });
    }
    Ok(RouteResolution { routes: resolved })
}

/// Normalize both routing-result revisions into `(path, index)` pairs.
fn decode_index_list(raw: &Value) -> DecodeResult<Vec<(String, u64)>> {
    let entries: Vec<(String, &Value)> = match raw {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(pos, item)| (format!("result[{pos}]"), item))
            .collect(),
        Value::Object(map) => {
            let routes = map.get("routes").ok_or_else(|| DecodeError::MissingKey {
                path: "result".into(),
                key: "routes",
            })?;
            let Value::Array(items) = routes else {
                return Err(DecodeError::WrongShape {
                    path: "result.routes".into(),
                    expected: "an array of route entries",
                });
            };
            let mut out = Vec::with_capacity(items.len());
            for (pos, item) in items.iter().enumerate() {
                let path = format!("result.routes[{pos}]");
                let index = item.get("index").ok_or_else(|| DecodeError::MissingKey {
                    path: path.clone(),
                    key: "index",
                })?;
                out.push((path, index));
            }
            out
        }
        _ => {
            return Err(DecodeError::WrongShape {
                path: "result".into(),
                expected: "an index array or a {\"routes\": [...]} object",
            });
        }
    };

    entries
        .into_iter()
        .map(|(path, value)| match value.as_u64() {
            Some(index) => Ok((path, index)),
            None => Err(DecodeError::WrongShape {
                path,
                expected: "a non-negative integer route index",
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn three_routes() -> Vec<Route> {
        vec![
            Route::new("Search", "Find products in the catalog"),
            Route::new("Help", "Questions about using the site"),
            Route::new("Orders", "Order status and returns"),
        ]
    }

    #[test]
    fn route_roundtrip() {
        let route = Route::new("Search", "Find products")
            .with_utterances(vec!["find me a book".into(), "search shoes".into()]);
        let json = serde_json::to_string(&route).unwrap();
        let back: Route = serde_json::from_str(&json).unwrap();
        assert_eq!(back, route);
    }

    #[test]
    fn route_rejects_unknown_keys() {
        let json = r#"{"name": "Search", "description": "d", "priority": 1}"#;
        let result: Result<Route, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn route_utterances_default_empty() {
        let route: Route = serde_json::from_str(r#"{"name": "A", "description": "B"}"#).unwrap();
        assert!(route.utterances.is_empty());
    }

    // ── decode_route_resolution ──────────────────────────────────

    #[test]
    fn decode_index_array_preserves_service_order() {
        let resolution = decode_route_resolution(&json!([2, 0]), &three_routes()).unwrap();
        assert_eq!(resolution.len(), 2);
        assert_eq!(resolution.routes[0].index, 2);
        assert_eq!(resolution.routes[0].route.name, "Orders");
        assert_eq!(resolution.routes[1].index, 0);
        assert_eq!(resolution.routes[1].route.name, "Search");
    }

    #[test]
    fn decode_object_revision() {
        let raw = json!({"routes": [{"index": 1}]});
        let resolution = decode_route_resolution(&raw, &three_routes()).unwrap();
        assert_eq!(resolution.len(), 1);
        assert_eq!(resolution.routes[0].index, 1);
        assert_eq!(resolution.routes[0].route.name, "Help");
    }

    #[test]
    fn decode_empty_array_is_empty_resolution() {
        let resolution = decode_route_resolution(&json!([]), &three_routes()).unwrap();
        assert!(resolution.is_empty());
    }

    #[test]
    fn decode_out_of_range_index_fails_loud() {
        let err = decode_route_resolution(&json!([5]), &three_routes()).unwrap_err();
        assert_eq!(
            err,
            DecodeError::IndexOutOfRange {
                path: "result[0]".into(),
                index: 5,
                route_count: 3,
            }
        );
    }

    #[test]
    fn decode_negative_index_rejected() {
        let err = decode_route_resolution(&json!([-1]), &three_routes()).unwrap_err();
        assert!(matches!(err, DecodeError::WrongShape { .. }));
    }

    #[test]
    fn decode_object_missing_index_key() {
        let raw = json!({"routes": [{"idx": 0}]});
        let err = decode_route_resolution(&raw, &three_routes()).unwrap_err();
        assert_eq!(
            err,
            DecodeError::MissingKey {
                path: "result.routes[0]".into(),
                key: "index",
            }
        );
    }

    #[test]
    fn decode_wrong_shape_rejected() {
        let err = decode_route_resolution(&json!("nope"), &three_routes()).unwrap_err();
        assert!(matches!(err, DecodeError::WrongShape { .. }));
    }
}
