//! Django model and DRF serializer construct tokens.

use telar_core::ScalarType;
use telar_schema::Relation;

/// Bound applied to string columns that do not declare a length.
pub const DEFAULT_MAX_LENGTH: u64 = 255;

/// Model field constructor for a scalar property.
pub fn model_field(scalar: ScalarType, max_length: Option<u64>) -> String {
    match scalar {
        ScalarType::Integer => "models.IntegerField()".to_string(),
        ScalarType::String => format!(
            "models.CharField(max_length={})",
            max_length.unwrap_or(DEFAULT_MAX_LENGTH)
        ),
        ScalarType::Boolean => "models.BooleanField()".to_string(),
        ScalarType::Number => "models.FloatField()".to_string(),
        ScalarType::Unspecified => "models.TextField()".to_string(),
    }
}

/// Foreign-key model field. Deletes cascade to the referencing rows; the
/// marker syntax carries no other policy.
pub fn model_relation_field(relation: &Relation) -> String {
    format!(
        "models.ForeignKey('{}', on_delete=models.CASCADE)",
        relation.target
    )
}

/// Serializer field constructor for a scalar property, optionally bound to
/// an internal field via `source`.
pub fn serializer_field(
    scalar: ScalarType,
    max_length: Option<u64>,
    source: Option<&str>,
) -> String {
    let mut args: Vec<String> = Vec::new();
    if let Some(source) = source {
        args.push(format!("source='{}'", source));
    }
    let constructor = match scalar {
        ScalarType::Integer => "serializers.IntegerField",
        ScalarType::Boolean => "serializers.BooleanField",
        ScalarType::Number => "serializers.FloatField",
        ScalarType::String | ScalarType::Unspecified => "serializers.CharField",
    };
    if scalar == ScalarType::String {
        args.push(format!(
            "max_length={}",
            max_length.unwrap_or(DEFAULT_MAX_LENGTH)
        ));
    }
    format!("{}({})", constructor, args.join(", "))
}

/// Relation serializer field binding the external name to the internal
/// column through the target's primary key.
pub fn serializer_relation_field(relation: &Relation, source: &str) -> String {
    format!(
        "serializers.PrimaryKeyRelatedField(source='{}', queryset={}.objects.all())",
        source, relation.target
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author_relation() -> Relation {
        Relation {
            target: "Author".to_string(),
            target_field: "id".to_string(),
        }
    }

    #[test]
    fn test_model_relation_field_cascades() {
        assert_eq!(
            model_relation_field(&author_relation()),
            "models.ForeignKey('Author', on_delete=models.CASCADE)"
        );
    }

    #[test]
    fn test_serializer_field_binds_source_first() {
        assert_eq!(
            serializer_field(ScalarType::String, Some(200), Some("full_name")),
            "serializers.CharField(source='full_name', max_length=200)"
        );
        assert_eq!(
            serializer_field(ScalarType::Boolean, None, Some("is_available")),
            "serializers.BooleanField(source='is_available')"
        );
    }

    #[test]
    fn test_serializer_relation_field() {
        assert_eq!(
            serializer_relation_field(&author_relation(), "author_id"),
            "serializers.PrimaryKeyRelatedField(source='author_id', queryset=Author.objects.all())"
        );
    }
}
