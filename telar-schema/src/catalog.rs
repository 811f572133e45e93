//! The in-memory entity catalog and its record types.

use indexmap::IndexMap;
use telar_core::{ScalarType, pluralize, to_pascal_case};

/// Name suffixes marking request-only or error-only payload objects.
///
/// Schema objects with these suffixes are filtered out before the catalog is
/// built and never reach an emitter.
pub const EXCLUDED_SUFFIXES: &[&str] = &["Input", "Error"];

/// The enriched set of entities a generator run operates on.
///
/// Iteration order is the insertion order of the source schema, which in
/// turn fixes the ordering of route registries and navigation menus in the
/// generated code.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entities: IndexMap<String, Entity>,
}

impl Catalog {
    pub(crate) fn new(entities: IndexMap<String, Entity>) -> Self {
        Self { entities }
    }

    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    pub(crate) fn entities_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.values_mut()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entities.keys().map(String::as_str)
    }

    pub fn get(&self, name: &str) -> Option<&Entity> {
        self.entities.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entities.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// A named record type from the schema.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Schema-declared identifier, PascalCase by convention.
    pub name: String,
    /// Properties in declaration order.
    pub properties: Vec<Property>,
}

impl Entity {
    /// Database table name: pluralized lowercase ("Book" -> "books").
    pub fn table_name(&self) -> String {
        pluralize(&self.name.to_lowercase())
    }

    /// Backend route segment, same convention as the table name.
    pub fn api_route(&self) -> String {
        self.table_name()
    }

    /// Class name for generated code.
    pub fn class_name(&self) -> String {
        to_pascal_case(&self.name)
    }

    /// Properties carrying a resolved relation binding.
    pub fn relations(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter().filter(|p| p.is_relation())
    }
}

/// One typed property of an entity.
#[derive(Debug, Clone)]
pub struct Property {
    /// External name as declared in the schema, typically camelCase.
    pub name: String,
    /// Internal snake_case name used for persistence fields.
    pub field_name: String,
    pub scalar: ScalarType,
    /// Bound only for string properties that declare a length.
    pub max_length: Option<u64>,
    /// Raw foreign-key marker ("Entity.field"), if declared.
    pub foreign_key: Option<String>,
    /// Relation binding attached by the resolver. Emitters consult only
    /// this, never the raw marker.
    pub relation: Option<Relation>,
}

impl Property {
    pub fn is_relation(&self) -> bool {
        self.relation.is_some()
    }

    /// Whether the external spelling differs from the internal field name.
    pub fn is_renamed(&self) -> bool {
        self.name != self.field_name
    }

    pub fn is_id(&self) -> bool {
        self.name == "id"
    }
}

/// A resolved (source property → target entity) binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    /// Target entity name; guaranteed to exist in the catalog under strict
    /// resolution.
    pub target: String,
    /// Field on the target the marker named. Informational: generated
    /// bindings go through the target's primary key.
    pub target_field: String,
}
