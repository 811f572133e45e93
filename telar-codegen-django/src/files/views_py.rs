//! views.py generator: the request-dispatch handlers.

use std::path::PathBuf;

use telar_codegen::CodeBuilder;
use telar_core::GeneratedFile;
use telar_schema::Catalog;

/// The request-dispatch file: one `ModelViewSet` per entity.
///
/// Every entity exposes the full standard operation set; there is no
/// per-entity customization.
pub struct ViewsFile<'a> {
    catalog: &'a Catalog,
}

impl<'a> ViewsFile<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }
}

impl GeneratedFile for ViewsFile<'_> {
    fn rel_path(&self) -> PathBuf {
        PathBuf::from("views.py")
    }

    fn render(&self) -> String {
        let mut builder = CodeBuilder::python().line("from rest_framework import viewsets");
        if !self.catalog.is_empty() {
            builder = builder.line(&format!(
                "from .models import {}",
                super::class_list(self.catalog)
            ));
            let serializers: Vec<String> = self
                .catalog
                .entities()
                .map(|e| format!("{}Serializer", e.class_name()))
                .collect();
            builder = builder.line(&format!(
                "from .serializers import {}",
                serializers.join(", ")
            ));
        }
        for entity in self.catalog.entities() {
            let class = entity.class_name();
            builder = builder.blank().block(
                &format!("class {}ViewSet(viewsets.ModelViewSet):", class),
                |b| {
                    b.line(&format!("queryset = {}.objects.all()", class))
                        .line(&format!("serializer_class = {}Serializer", class))
                },
            );
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_viewset_per_entity() {
        let catalog: Catalog = r#"{
            "Book": {"properties": {"id": {"type": "integer"}}},
            "Author": {"properties": {"id": {"type": "integer"}}}
        }"#
        .parse()
        .unwrap();

        let content = ViewsFile::new(&catalog).render();

        assert!(content.contains("class BookViewSet(viewsets.ModelViewSet):"));
        assert!(content.contains("class AuthorViewSet(viewsets.ModelViewSet):"));
        assert!(content.contains("queryset = Book.objects.all()"));
        assert!(content.contains("serializer_class = AuthorSerializer"));
    }
}
