//! Pre-flight request validation.
//!
//! Runs entirely client-side, before any network call, and reports the first
//! violation under a fixed traversal order: query, then the route/field
//! structure in input order. Length limits are fractional (token budget ×
//! chars-per-token); a length strictly greater than the limit fails, equal
//! passes.

use crate::error::ValidationFailure;
use crate::field::Field;
use crate::limits::{ExtractorLimits, RouterLimits};
use crate::route::Route;

/// Validate an intent-routing request.
///
/// Order: query length, routes non-empty, routes count, then per route in
/// input order: name length, description length, utterances count, each
/// utterance length.
pub fn validate_routing_request(
    query: &str,
    routes: &[Route],
    limits: &RouterLimits,
) -> Result<(), ValidationFailure> {
    check_length("query", query, limits.max_query_length)?;

    if routes.is_empty() {
        return Err(ValidationFailure::new(
            "routes",
            "at least one route must be provided",
        ));
    }
    if routes.len() > limits.max_routes_num {
        return Err(ValidationFailure::new(
            "routes",
            format!(
                "too many routes ({} routes > {} routes)",
                routes.len(),
                limits.max_routes_num
            ),
        ));
    }

    for (i, route) in routes.iter().enumerate() {
        check_length(
            &format!("routes[{i}].name"),
            &route.name,
            limits.max_route_name_length,
        )?;
        check_length(
            &format!("routes[{i}].description"),
            &route.description,
            limits.max_route_description_length,
        )?;
        if route.utterances.len() > limits.max_route_utterances_num {
            return Err(ValidationFailure::new(
                format!("routes[{i}].utterances"),
                format!(
                    "too many utterances ({} > {})",
                    route.utterances.len(),
                    limits.max_route_utterances_num
                ),
            ));
        }
        for (j, utterance) in route.utterances.iter().enumerate() {
            check_length(
                &format!("routes[{i}].utterances[{j}]"),
                utterance,
                limits.max_route_utterance_length,
            )?;
        }
    }
    Ok(())
}

/// Validate a filter-extraction request.
///
/// Order: query length, field name length, field description length, then —
/// only when values are declared — values allowed for the field type, values
/// count, each value length.
pub fn validate_extraction_request(
    query: &str,
    field: &Field,
    limits: &ExtractorLimits,
) -> Result<(), ValidationFailure> {
    check_length("query", query, limits.max_query_length)?;
    check_length("field.name", &field.name, limits.max_field_name_length)?;
    check_length(
        "field.description",
        &field.description,
        limits.max_field_description_length,
    )?;

    if !field.values.is_empty() {
        if !field.field_type.supports_values() {
            return Err(ValidationFailure::new(
                "field.values",
                format!(
                    "values are not allowed when the field type is '{}'",
                    field.field_type.as_str()
                ),
            ));
        }
        if field.values.len() > limits.max_field_values_num {
            return Err(ValidationFailure::new(
                "field.values",
                format!(
                    "too many values ({} values > {} values)",
                    field.values.len(),
                    limits.max_field_values_num
                ),
            ));
        }
        for (i, value) in field.values.iter().enumerate() {
            check_length(
                &format!("field.values[{i}]"),
                value,
                limits.max_field_value_length,
            )?;
        }
    }
    Ok(())
}

/// Strictly-greater comparison against a fractional character limit.
fn check_length(path: &str, s: &str, limit: f64) -> Result<(), ValidationFailure> {
    if s.chars().count() as f64 > limit {
        return Err(ValidationFailure::new(
            path,
            format!("too long ({} chars > {} chars)", s.chars().count(), limit),
        ));
    }
    Ok(())
}
