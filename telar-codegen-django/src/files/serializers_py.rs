//! serializers.py generator: the wire-format projections.

use std::path::PathBuf;

use telar_codegen::{CodeBuilder, mappers::django};
use telar_core::GeneratedFile;
use telar_schema::{Catalog, Entity, Property};

/// The projection-definitions file: one `ModelSerializer` per entity.
///
/// Properties are exposed under their external names. Whenever the external
/// spelling differs from the internal field name, an explicit serializer
/// field binds the two via `source=`; this rename binding is what lets the
/// wire format stay camelCase while storage stays snake_case.
pub struct SerializersFile<'a> {
    catalog: &'a Catalog,
}

impl<'a> SerializersFile<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Explicit serializer field for a property, if it needs one.
    fn explicit_field(property: &Property) -> Option<String> {
        if let Some(relation) = &property.relation {
            return Some(format!(
                "{} = {}",
                property.name,
                django::serializer_relation_field(relation, &property.field_name)
            ));
        }
        if property.is_renamed() {
            return Some(format!(
                "{} = {}",
                property.name,
                django::serializer_field(
                    property.scalar,
                    property.max_length,
                    Some(&property.field_name)
                )
            ));
        }
        None
    }

    fn fields_list(entity: &Entity) -> String {
        let names: Vec<String> = entity
            .properties
            .iter()
            .map(|p| format!("'{}'", p.name))
            .collect();
        format!("[{}]", names.join(", "))
    }

    fn render_entity(builder: CodeBuilder, entity: &Entity) -> CodeBuilder {
        let header = format!(
            "class {}Serializer(serializers.ModelSerializer):",
            entity.class_name()
        );
        builder.block(&header, |mut b| {
            let explicit: Vec<String> = entity
                .properties
                .iter()
                .filter_map(Self::explicit_field)
                .collect();
            for field in &explicit {
                b = b.line(field);
            }
            if !explicit.is_empty() {
                b = b.blank();
            }
            b.block("class Meta:", |m| {
                m.line(&format!("model = {}", entity.class_name()))
                    .line(&format!("fields = {}", Self::fields_list(entity)))
            })
        })
    }
}

impl GeneratedFile for SerializersFile<'_> {
    fn rel_path(&self) -> PathBuf {
        PathBuf::from("serializers.py")
    }

    fn render(&self) -> String {
        let mut builder = CodeBuilder::python().line("from rest_framework import serializers");
        if !self.catalog.is_empty() {
            builder = builder.line(&format!(
                "from .models import {}",
                super::class_list(self.catalog)
            ));
        }
        for entity in self.catalog.entities() {
            builder = builder.blank();
            builder = Self::render_entity(builder, entity);
        }
        builder.build()
    }
}
