//! Abstract property types understood by the generator.

/// Scalar type of a schema property.
///
/// This is a target-agnostic representation; the mappers in the codegen
/// crates convert it to concrete field constructors and type tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Integer,
    String,
    Boolean,
    Number,
    /// No `type` declared, or a value the generator does not recognize.
    /// Maps to the most permissive construct in every target.
    Unspecified,
}

impl ScalarType {
    /// Parse a schema `type` value. Unknown or missing values degrade to
    /// [`ScalarType::Unspecified`] rather than failing.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("integer") => ScalarType::Integer,
            Some("string") => ScalarType::String,
            Some("boolean") => ScalarType::Boolean,
            Some("number") => ScalarType::Number,
            _ => ScalarType::Unspecified,
        }
    }

    /// Get the schema type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarType::Integer => "integer",
            ScalarType::String => "string",
            ScalarType::Boolean => "boolean",
            ScalarType::Number => "number",
            ScalarType::Unspecified => "unspecified",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_types() {
        assert_eq!(ScalarType::parse(Some("integer")), ScalarType::Integer);
        assert_eq!(ScalarType::parse(Some("string")), ScalarType::String);
        assert_eq!(ScalarType::parse(Some("boolean")), ScalarType::Boolean);
        assert_eq!(ScalarType::parse(Some("number")), ScalarType::Number);
    }

    #[test]
    fn test_parse_is_permissive() {
        assert_eq!(ScalarType::parse(Some("array")), ScalarType::Unspecified);
        assert_eq!(ScalarType::parse(Some("object")), ScalarType::Unspecified);
        assert_eq!(ScalarType::parse(None), ScalarType::Unspecified);
    }

    #[test]
    fn test_as_str() {
        assert_eq!(ScalarType::Integer.as_str(), "integer");
        assert_eq!(ScalarType::Unspecified.as_str(), "unspecified");
    }
}
