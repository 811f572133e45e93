//! Type mapping between abstract scalar types and target constructs.
//!
//! One mapping table drives every emitted artifact, so the three naming and
//! type conventions can never drift apart. Relations never pass through
//! [`map_scalar`]; the emitters request the dedicated relation tokens from
//! the per-target modules.

pub mod django;
pub mod typescript;

use telar_core::ScalarType;

/// The three places a property type can be emitted to.
///
/// The closed enum is the whole validity check for emission targets: an
/// unrecognized target cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitTarget {
    /// Backend persistence field (Django model).
    Persistence,
    /// Backend wire-format field (DRF serializer).
    Wire,
    /// Frontend model field (TypeScript interface).
    Model,
}

/// Map a scalar type to the construct for the given target.
pub fn map_scalar(scalar: ScalarType, target: EmitTarget, max_length: Option<u64>) -> String {
    match target {
        EmitTarget::Persistence => django::model_field(scalar, max_length),
        EmitTarget::Wire => django::serializer_field(scalar, max_length, None),
        EmitTarget::Model => typescript::model_type(scalar).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persistence_mapping_table() {
        assert_eq!(
            map_scalar(ScalarType::Integer, EmitTarget::Persistence, None),
            "models.IntegerField()"
        );
        assert_eq!(
            map_scalar(ScalarType::String, EmitTarget::Persistence, Some(120)),
            "models.CharField(max_length=120)"
        );
        assert_eq!(
            map_scalar(ScalarType::String, EmitTarget::Persistence, None),
            "models.CharField(max_length=255)"
        );
        assert_eq!(
            map_scalar(ScalarType::Boolean, EmitTarget::Persistence, None),
            "models.BooleanField()"
        );
        assert_eq!(
            map_scalar(ScalarType::Number, EmitTarget::Persistence, None),
            "models.FloatField()"
        );
    }

    #[test]
    fn test_wire_mapping_table() {
        assert_eq!(
            map_scalar(ScalarType::Integer, EmitTarget::Wire, None),
            "serializers.IntegerField()"
        );
        assert_eq!(
            map_scalar(ScalarType::String, EmitTarget::Wire, Some(120)),
            "serializers.CharField(max_length=120)"
        );
        assert_eq!(
            map_scalar(ScalarType::Boolean, EmitTarget::Wire, None),
            "serializers.BooleanField()"
        );
        assert_eq!(
            map_scalar(ScalarType::Number, EmitTarget::Wire, None),
            "serializers.FloatField()"
        );
    }

    #[test]
    fn test_model_mapping_table() {
        assert_eq!(map_scalar(ScalarType::Integer, EmitTarget::Model, None), "number");
        assert_eq!(map_scalar(ScalarType::String, EmitTarget::Model, None), "string");
        assert_eq!(map_scalar(ScalarType::Boolean, EmitTarget::Model, None), "boolean");
        assert_eq!(map_scalar(ScalarType::Number, EmitTarget::Model, None), "number");
    }

    #[test]
    fn test_unspecified_degrades_permissively() {
        assert_eq!(
            map_scalar(ScalarType::Unspecified, EmitTarget::Persistence, None),
            "models.TextField()"
        );
        assert_eq!(map_scalar(ScalarType::Unspecified, EmitTarget::Model, None), "any");
    }
}
