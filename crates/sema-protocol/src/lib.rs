//! Typed protocol layer for the Sema inference API.
//!
//! Everything here is pure and synchronous: request validation against the
//! service's size limits, construction of wire request bodies, and decoding
//! of service responses into typed values:
//! - `Route` / `RouteResolution` for intent routing
//! - `Field` / `FilterNode` for filter extraction
//!
//! No I/O happens in this crate; the HTTP transport lives in `sema-client`.

pub mod error;
pub mod field;
pub mod filter;
pub mod limits;
pub mod route;
pub mod validate;
pub mod wire;

// Re-exports for convenience.
pub use error::{DecodeError, DecodeResult, ValidationFailure};
pub use field::{Field, FieldType};
pub use filter::{Conjunction, FilterNode, FilterOp, decode_filter_tree};
pub use limits::{ExtractorLimits, RouterLimits, TOKEN_STRING_LENGTH_RATIO};
pub use route::{ResolvedRoute, Route, RouteResolution, decode_route_resolution};
pub use validate::{validate_extraction_request, validate_routing_request};
