//! Size limits the service enforces on request payloads.
//!
//! The service budgets inputs in tokens; limits here are the token budget
//! multiplied by an average chars-per-token ratio, so length limits are
//! non-integer. A length strictly greater than the limit fails; equal
//! passes.

/// Average string length per token, used to convert token budgets into
/// character limits.
pub const TOKEN_STRING_LENGTH_RATIO: f64 = 6.5;

/// Limits for intent-routing requests.
#[derive(Debug, Clone)]
pub struct RouterLimits {
    pub max_query_length: f64,
    pub max_routes_num: usize,
    pub max_route_name_length: f64,
    pub max_route_description_length: f64,
    pub max_route_utterances_num: usize,
    pub max_route_utterance_length: f64,
}

impl Default for RouterLimits {
    fn default() -> Self {
        Self {
            max_query_length: 50.0 * TOKEN_STRING_LENGTH_RATIO,
            max_routes_num: 5,
            max_route_name_length: 10.0 * TOKEN_STRING_LENGTH_RATIO,
            max_route_description_length: 100.0 * TOKEN_STRING_LENGTH_RATIO,
            max_route_utterances_num: 50,
            max_route_utterance_length: 50.0 * TOKEN_STRING_LENGTH_RATIO,
        }
    }
}

/// Limits for filter-extraction requests.
#[derive(Debug, Clone)]
pub struct ExtractorLimits {
    pub max_query_length: f64,
    pub max_field_name_length: f64,
    pub max_field_description_length: f64,
    pub max_field_values_num: usize,
    pub max_field_value_length: f64,
}

impl Default for ExtractorLimits {
    fn default() -> Self {
        Self {
            max_query_length: 50.0 * TOKEN_STRING_LENGTH_RATIO,
            max_field_name_length: 10.0 * TOKEN_STRING_LENGTH_RATIO,
            max_field_description_length: 50.0 * TOKEN_STRING_LENGTH_RATIO,
            max_field_values_num: 10,
            max_field_value_length: 50.0 * TOKEN_STRING_LENGTH_RATIO,
        }
    }
}
