//! TypeScript type tokens for frontend models.

use telar_core::ScalarType;

/// Model type token for a scalar property.
pub fn model_type(scalar: ScalarType) -> &'static str {
    match scalar {
        ScalarType::Integer | ScalarType::Number => "number",
        ScalarType::String => "string",
        ScalarType::Boolean => "boolean",
        ScalarType::Unspecified => "any",
    }
}

/// Type of a relation property: the related entity's identifier, which is
/// always an auto-assigned integer key.
pub fn relation_type() -> &'static str {
    "number"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_types() {
        assert_eq!(model_type(ScalarType::Integer), "number");
        assert_eq!(model_type(ScalarType::String), "string");
        assert_eq!(model_type(ScalarType::Boolean), "boolean");
        assert_eq!(model_type(ScalarType::Number), "number");
        assert_eq!(model_type(ScalarType::Unspecified), "any");
    }

    #[test]
    fn test_relation_type_is_identifier() {
        assert_eq!(relation_type(), "number");
    }
}
