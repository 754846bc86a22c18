//! Filter-expression tree decoding for the extraction operation.
//!
//! The service answers with a recursive, type-discriminated JSON tree:
//! `{"type": "Filter", ...}` leaves under `{"type": "ConjunctedFilter", ...}`
//! internal nodes. The discriminator set is closed (exactly these two), so
//! the tree maps onto a tagged enum and decoding is a depth-first walk that
//! rejects anything outside the contract with a path into the response.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DecodeError, DecodeResult};

/// Comparison operator of a leaf predicate. Closed set; the service never
/// emits anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterOp {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = "CONTAIN")]
    Contain,
    #[serde(rename = "NOT CONTAIN")]
    NotContain,
}

impl FilterOp {
    /// Parse the wire spelling of an operator.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "=" => Some(Self::Eq),
            "!=" => Some(Self::Ne),
            ">" => Some(Self::Gt),
            ">=" => Some(Self::Ge),
            "<" => Some(Self::Lt),
            "<=" => Some(Self::Le),
            "CONTAIN" => Some(Self::Contain),
            "NOT CONTAIN" => Some(Self::NotContain),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Contain => "CONTAIN",
            Self::NotContain => "NOT CONTAIN",
        }
    }
}

/// Boolean connective of an internal node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Conjunction {
    #[serde(rename = "AND")]
    And,
    #[serde(rename = "OR")]
    Or,
}

impl Conjunction {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            _ => None,
        }
    }
}

/// A node in the decoded filter tree. Children are exclusively owned, so the
/// structure is a tree by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum FilterNode {
    /// Leaf predicate: `operator value`, e.g. `< "20"`.
    Filter { operator: FilterOp, value: String },
    /// Boolean combination of nested filters, in response order.
    ConjunctedFilter {
        conjunction: Conjunction,
        filters: Vec<FilterNode>,
    },
}

/// Hard ceiling on tree depth. The response comes off the network, so
/// recursion is bounded rather than trusted; observed service trees are
/// single-digit deep.
pub const MAX_FILTER_DEPTH: usize = 32;

impl FilterNode {
    /// Serialize back to the tagged wire shape. Inverse of
    /// [`decode_filter_tree`] for every valid tree.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).expect("filter tree serialization cannot fail")
    }
}

/// Decode the `result` payload of an extraction response.
///
/// `Ok(None)` means the service could derive no filter from the query (an
/// explicitly empty `{}` result). Some service revisions wrap the tree in a
/// JSON-encoded string; that is unwrapped here before decoding.
pub fn decode_filter_tree(raw: &Value) -> DecodeResult<Option<FilterNode>> {
    // Revision drift: the tree may arrive as an embedded JSON string.
    if let Value::String(s) = raw {
        let inner: Value =
            serde_json::from_str(s).map_err(|e| DecodeError::BadEmbeddedJson {
                detail: e.to_string(),
            })?;
        return decode_filter_tree(&inner);
    }

    let Value::Object(map) = raw else {
        return Err(DecodeError::WrongShape {
            path: "result".into(),
            expected: "a filter object or {}",
        });
    };

    // "No filter derivable" sentinel.
    if map.is_empty() {
        return Ok(None);
    }

    decode_node(raw, "result", 0).map(Some)
}

/// Depth-first decode of one node.
fn decode_node(node: &Value, path: &str, depth: usize) -> DecodeResult<FilterNode> {
    if depth > MAX_FILTER_DEPTH {
        return Err(DecodeError::DepthExceeded {
            max: MAX_FILTER_DEPTH,
        });
    }

    let Value::Object(map) = node else {
        return Err(DecodeError::WrongShape {
            path: path.into(),
            expected: "a filter object",
        });
    };

    let node_type = match map.get("type") {
        Some(Value::String(s)) => s.as_str(),
        Some(_) => {
            return Err(DecodeError::WrongShape {
                path: format!("{path}.type"),
                expected: "a string discriminator",
            });
        }
        None => {
            return Err(DecodeError::UnknownFilterType {
                path: path.into(),
                found: String::new(),
            });
        }
    };

    match node_type {
        "Filter" => {
            let operator = require_str(map, path, "operator")?;
            let operator = FilterOp::parse(operator).ok_or_else(|| DecodeError::UnknownOperator {
                path: format!("{path}.operator"),
                found: operator.to_string(),
            })?;
            let value = require_str(map, path, "value")?;
            Ok(FilterNode::Filter {
                operator,
                value: value.to_string(),
            })
        }
        "ConjunctedFilter" => {
            let conjunction = require_str(map, path, "conjunction")?;
            let conjunction =
                Conjunction::parse(conjunction).ok_or_else(|| DecodeError::UnknownConjunction {
                    path: format!("{path}.conjunction"),
                    found: conjunction.to_string(),
                })?;
            let filters = map.get("filters").ok_or_else(|| DecodeError::MissingKey {
                path: path.into(),
                key: "filters",
            })?;
            let Value::Array(items) = filters else {
                return Err(DecodeError::WrongShape {
                    path: format!("{path}.filters"),
                    expected: "an array of filter objects",
                });
            };
            let children = items
                .iter()
                .enumerate()
                .map(|(i, child)| decode_node(child, &format!("{path}.filters[{i}]"), depth + 1))
                .collect::<DecodeResult<Vec<_>>>()?;
            Ok(FilterNode::ConjunctedFilter {
                conjunction,
                filters: children,
            })
        }
        other => Err(DecodeError::UnknownFilterType {
            path: path.into(),
            found: other.to_string(),
        }),
    }
}

/// Read a required string-valued key from a node.
fn require_str<'a>(
    map: &'a serde_json::Map<String, Value>,
    path: &str,
    key: &'static str,
) -> DecodeResult<&'a str> {
    match map.get(key) {
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(DecodeError::WrongShape {
            path: format!("{path}.{key}"),
            expected: "a string",
        }),
        None => Err(DecodeError::MissingKey {
            path: path.into(),
            key,
        }),
    }
}
