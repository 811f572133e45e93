//! Entity model interface generator.

use std::path::PathBuf;

use telar_codegen::{CodeBuilder, EmitTarget, map_scalar, mappers::typescript};
use telar_core::GeneratedFile;
use telar_schema::{Entity, Property};

/// The structural model type for one entity.
pub struct ModelFile<'a> {
    entity: &'a Entity,
}

impl<'a> ModelFile<'a> {
    pub fn new(entity: &'a Entity) -> Self {
        Self { entity }
    }

    fn type_token(property: &Property) -> String {
        if property.is_relation() {
            typescript::relation_type().to_string()
        } else {
            map_scalar(property.scalar, EmitTarget::Model, None)
        }
    }
}

impl GeneratedFile for ModelFile<'_> {
    fn rel_path(&self) -> PathBuf {
        PathBuf::from("models").join(format!("{}.ts", self.entity.class_name()))
    }

    fn render(&self) -> String {
        let header = format!("export interface {} {{", self.entity.class_name());
        CodeBuilder::typescript()
            .block(&header, |mut b| {
                for property in &self.entity.properties {
                    b = b.line(&format!(
                        "{}: {};",
                        property.name,
                        Self::type_token(property)
                    ));
                }
                b
            })
            .line("}")
            .build()
    }
}

#[cfg(test)]
mod tests {
    use telar_schema::{Catalog, ReferenceMode, resolve_relations};

    use super::*;

    #[test]
    fn test_model_uses_external_names_and_frontend_tokens() {
        let mut catalog: Catalog = r#"{
            "Book": {
                "properties": {
                    "id": {"type": "integer"},
                    "title": {"type": "string"},
                    "inPrint": {"type": "boolean"},
                    "tags": {"type": "array"},
                    "authorId": {"type": "integer", "x-foreign-key": "Author.id"}
                }
            },
            "Author": {"properties": {"id": {"type": "integer"}}}
        }"#
        .parse()
        .unwrap();
        resolve_relations(&mut catalog, ReferenceMode::Strict).unwrap();

        let content = ModelFile::new(catalog.get("Book").unwrap()).render();

        assert!(content.contains("export interface Book {"));
        assert!(content.contains("id: number;"));
        assert!(content.contains("title: string;"));
        assert!(content.contains("inPrint: boolean;"));
        assert!(content.contains("tags: any;"));
        assert!(content.contains("authorId: number;"));
    }
}
