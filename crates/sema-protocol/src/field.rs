//! Field schema for filter extraction.

use serde::{Deserialize, Serialize};

/// Declared type of a filterable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Number,
    List,
    Date,
}

impl FieldType {
    /// Whether this type may declare an enumerated `values` list.
    pub fn supports_values(self) -> bool {
        matches!(self, FieldType::List | FieldType::String)
    }

    /// Wire spelling of the type.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::List => "list",
            FieldType::Date => "date",
        }
    }
}

/// A declared, typed attribute the extraction operation may produce a
/// predicate over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Field {
    /// Field name as it appears in the caller's data (e.g. "price").
    pub name: String,
    /// What the field contains, for the inference model.
    pub description: String,
    /// Declared type of the field.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Enumerated values. Only meaningful for `list` and `string` fields;
    /// the validator rejects values on other types.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

impl Field {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        field_type: FieldType,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            field_type,
            values: Vec::new(),
        }
    }

    pub fn with_values(mut self, values: Vec<String>) -> Self {
        self.values = values;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_type_serialization() {
        assert_eq!(
            serde_json::to_string(&FieldType::String).unwrap(),
            r#""string""#
        );
        assert_eq!(
            serde_json::to_string(&FieldType::Number).unwrap(),
            r#""number""#
        );
        assert_eq!(serde_json::to_string(&FieldType::List).unwrap(), r#""list""#);
        assert_eq!(serde_json::to_string(&FieldType::Date).unwrap(), r#""date""#);
    }

    #[test]
    fn values_support_by_type() {
        assert!(FieldType::List.supports_values());
        assert!(FieldType::String.supports_values());
        assert!(!FieldType::Number.supports_values());
        assert!(!FieldType::Date.supports_values());
    }

    #[test]
    fn field_serializes_type_key() {
        let field = Field::new("price", "Item price in USD", FieldType::Number);
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["type"], "number");
        // Empty values are omitted from the wire body.
        assert!(json.get("values").is_none());
    }

    #[test]
    fn field_roundtrip_with_values() {
        let field = Field::new("genre", "Book genre", FieldType::List)
            .with_values(vec!["fiction".into(), "history".into()]);
        let json = serde_json::to_string(&field).unwrap();
        let back: Field = serde_json::from_str(&json).unwrap();
        assert_eq!(back, field);
    }

    #[test]
    fn field_rejects_unknown_keys() {
        let json = r#"{"name": "a", "description": "b", "type": "date", "format": "iso"}"#;
        let result: Result<Field, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
