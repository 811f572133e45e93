//! models.py generator: the persistence definitions.

use std::path::PathBuf;

use telar_codegen::{CodeBuilder, EmitTarget, map_scalar, mappers::django};
use telar_core::GeneratedFile;
use telar_schema::{Catalog, Entity};

/// The persistence-definitions file: one model class per entity.
///
/// A declared `id` property becomes the auto-assigned integer primary key;
/// scalar fields keep declaration order under their internal names; relation
/// properties become foreign keys with cascade delete.
pub struct ModelsFile<'a> {
    catalog: &'a Catalog,
}

impl<'a> ModelsFile<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    fn render_entity(builder: CodeBuilder, entity: &Entity) -> CodeBuilder {
        let header = format!("class {}(models.Model):", entity.class_name());
        builder.block(&header, |mut b| {
            for property in &entity.properties {
                if property.is_id() {
                    b = b.line("id = models.AutoField(primary_key=True)");
                } else if let Some(relation) = &property.relation {
                    b = b.line(&format!(
                        "{} = {}",
                        property.field_name,
                        django::model_relation_field(relation)
                    ));
                } else {
                    b = b.line(&format!(
                        "{} = {}",
                        property.field_name,
                        map_scalar(property.scalar, EmitTarget::Persistence, property.max_length)
                    ));
                }
            }
            b = b.blank();
            b = b.block("class Meta:", |m| {
                m.line(&format!("db_table = '{}'", entity.table_name()))
            });
            b = b.blank();
            b.block("def __str__(self):", |m| m.line("return str(self.id)"))
        })
    }
}

impl GeneratedFile for ModelsFile<'_> {
    fn rel_path(&self) -> PathBuf {
        PathBuf::from("models.py")
    }

    fn render(&self) -> String {
        let mut builder = CodeBuilder::python().line("from django.db import models");
        for entity in self.catalog.entities() {
            builder = builder.blank();
            builder = Self::render_entity(builder, entity);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use telar_schema::{ReferenceMode, resolve_relations};

    use super::*;

    #[test]
    fn test_field_count_matches_properties() {
        let mut catalog: Catalog = r#"{
            "Book": {
                "properties": {
                    "id": {"type": "integer"},
                    "title": {"type": "string", "maxLength": 120},
                    "authorId": {"type": "integer", "x-foreign-key": "Author.id"}
                }
            },
            "Author": {
                "properties": {"id": {"type": "integer"}, "name": {"type": "string"}}
            }
        }"#
        .parse()
        .unwrap();
        resolve_relations(&mut catalog, ReferenceMode::Strict).unwrap();

        let content = ModelsFile::new(&catalog).render();

        // One id, one scalar, one relation field for Book.
        assert_eq!(content.matches("models.AutoField").count(), 2);
        assert!(content.contains("title = models.CharField(max_length=120)"));
        assert!(
            content.contains("author_id = models.ForeignKey('Author', on_delete=models.CASCADE)")
        );
        // The relation property is emitted exclusively as a relation.
        assert!(!content.contains("author_id = models.IntegerField()"));
        assert!(content.contains("db_table = 'books'"));
        assert!(content.contains("db_table = 'authors'"));
    }
}
