//! Relationship resolution over the loaded catalog.
//!
//! The resolver is the single place that decides whether a property is
//! relation-typed or scalar-typed. Emitters consult only the resolved
//! bindings, never the raw markers.

use std::collections::HashSet;

use crate::{Catalog, Error, Relation, Result};

/// How to treat foreign-key markers that point at entities missing from the
/// catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferenceMode {
    /// Fail fast on markers that point outside the catalog.
    #[default]
    Strict,
    /// Accept dangling markers unchanged. Legacy compatibility with the
    /// system this replaces; reachable only through an explicit CLI flag.
    Permissive,
}

/// Attach a [`Relation`] to every property carrying a foreign-key marker.
///
/// The marker is split on its first `.`; the leading segment names the
/// target entity. Under [`ReferenceMode::Strict`] a target missing from the
/// catalog aborts resolution.
pub fn resolve_relations(catalog: &mut Catalog, mode: ReferenceMode) -> Result<()> {
    let known: HashSet<String> = catalog.names().map(str::to_owned).collect();

    for entity in catalog.entities_mut() {
        let entity_name = entity.name.clone();
        for property in &mut entity.properties {
            let Some(marker) = property.foreign_key.as_deref() else {
                continue;
            };
            let (target, target_field) = split_marker(marker);
            if mode == ReferenceMode::Strict && !known.contains(target) {
                return Err(Box::new(Error::DanglingReference {
                    entity: entity_name.clone(),
                    property: property.name.clone(),
                    target: target.to_string(),
                }));
            }
            property.relation = Some(Relation {
                target: target.to_string(),
                target_field: target_field.to_string(),
            });
        }
    }
    Ok(())
}

/// Split a marker on its first separator: "Author.id" -> ("Author", "id").
/// A marker without a separator names the entity alone.
fn split_marker(marker: &str) -> (&str, &str) {
    match marker.split_once('.') {
        Some((target, field)) => (target, field),
        None => (marker, "id"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> Catalog {
        r#"{
            "Book": {
                "properties": {
                    "id": {"type": "integer"},
                    "authorId": {"type": "integer", "x-foreign-key": "Author.id"}
                }
            },
            "Author": {
                "properties": {"id": {"type": "integer"}}
            }
        }"#
        .parse()
        .unwrap()
    }

    #[test]
    fn test_attaches_relation_binding() {
        let mut catalog = library();
        resolve_relations(&mut catalog, ReferenceMode::Strict).unwrap();

        let book = catalog.get("Book").unwrap();
        let author_id = &book.properties[1];
        assert_eq!(
            author_id.relation,
            Some(Relation {
                target: "Author".to_string(),
                target_field: "id".to_string(),
            })
        );
        assert!(!book.properties[0].is_relation());
    }

    #[test]
    fn test_splits_marker_on_first_separator() {
        assert_eq!(split_marker("Author.id"), ("Author", "id"));
        assert_eq!(split_marker("Author.meta.id"), ("Author", "meta.id"));
        assert_eq!(split_marker("Author"), ("Author", "id"));
    }

    #[test]
    fn test_strict_mode_rejects_dangling_reference() {
        let mut catalog: Catalog = r#"{
            "Book": {
                "properties": {
                    "authorId": {"type": "integer", "x-foreign-key": "Ghost.id"}
                }
            }
        }"#
        .parse()
        .unwrap();

        let err = resolve_relations(&mut catalog, ReferenceMode::Strict).unwrap_err();
        assert!(matches!(
            *err,
            Error::DanglingReference { ref entity, ref property, ref target }
                if entity == "Book" && property == "authorId" && target == "Ghost"
        ));
    }

    #[test]
    fn test_permissive_mode_accepts_dangling_reference() {
        let mut catalog: Catalog = r#"{
            "Book": {
                "properties": {
                    "authorId": {"type": "integer", "x-foreign-key": "Ghost.id"}
                }
            }
        }"#
        .parse()
        .unwrap();

        resolve_relations(&mut catalog, ReferenceMode::Permissive).unwrap();
        let book = catalog.get("Book").unwrap();
        assert_eq!(book.properties[0].relation.as_ref().unwrap().target, "Ghost");
    }

    #[test]
    fn test_excluded_objects_cannot_anchor_references() {
        // BookInput is filtered out of the catalog, so a marker pointing at
        // it is dangling under strict resolution.
        let mut catalog: Catalog = r#"{
            "Review": {
                "properties": {
                    "bookId": {"type": "integer", "x-foreign-key": "BookInput.id"}
                }
            },
            "BookInput": {
                "properties": {"id": {"type": "integer"}}
            }
        }"#
        .parse()
        .unwrap();

        let err = resolve_relations(&mut catalog, ReferenceMode::Strict).unwrap_err();
        assert!(matches!(*err, Error::DanglingReference { .. }));
    }
}
