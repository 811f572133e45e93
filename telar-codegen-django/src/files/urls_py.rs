//! urls.py generator: the route-registration table.

use std::path::PathBuf;

use telar_codegen::CodeBuilder;
use telar_core::GeneratedFile;
use telar_schema::Catalog;

/// The route-registration file: one router entry per entity at a pluralized
/// lower-case path segment, registration order = catalog order.
pub struct UrlsFile<'a> {
    catalog: &'a Catalog,
}

impl<'a> UrlsFile<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }
}

impl GeneratedFile for UrlsFile<'_> {
    fn rel_path(&self) -> PathBuf {
        PathBuf::from("urls.py")
    }

    fn render(&self) -> String {
        let mut builder = CodeBuilder::python()
            .line("from django.urls import path, include")
            .line("from rest_framework.routers import DefaultRouter");
        if !self.catalog.is_empty() {
            let viewsets: Vec<String> = self
                .catalog
                .entities()
                .map(|e| format!("{}ViewSet", e.class_name()))
                .collect();
            builder = builder.line(&format!("from .views import {}", viewsets.join(", ")));
        }
        builder = builder.blank().line("router = DefaultRouter()");
        for entity in self.catalog.entities() {
            builder = builder.line(&format!(
                "router.register(r'{}', {}ViewSet)",
                entity.api_route(),
                entity.class_name()
            ));
        }
        builder
            .blank()
            .line("urlpatterns = [")
            .indent()
            .line("path('', include(router.urls)),")
            .dedent()
            .line("]")
            .build()
    }
}
