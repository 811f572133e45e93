//! Feature route table generator.

use std::path::PathBuf;

use telar_codegen::CodeBuilder;
use telar_core::GeneratedFile;
use telar_schema::Catalog;

use super::{
    page_ts::page_class,
    PageMode, route_segment,
};

/// The feature route table: list/create/edit routes per entity, order =
/// catalog order.
pub struct RoutesFile<'a> {
    catalog: &'a Catalog,
    feature: &'a str,
}

impl<'a> RoutesFile<'a> {
    pub fn new(catalog: &'a Catalog, feature: &'a str) -> Self {
        Self { catalog, feature }
    }
}

impl GeneratedFile for RoutesFile<'_> {
    fn rel_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.routes.ts", self.feature))
    }

    fn render(&self) -> String {
        let mut builder = CodeBuilder::typescript().line("import { Routes } from '@angular/router';");

        builder = builder.blank();
        for entity in self.catalog.entities() {
            let class = entity.class_name();
            for mode in PageMode::ALL {
                builder = builder.line(&format!(
                    "import {{ {} }} from './pages/{}/{}.{}.page';",
                    page_class(entity, mode),
                    class,
                    class,
                    mode.as_str()
                ));
            }
        }

        builder = builder.blank().line("export const featureRoutes: Routes = [").indent();
        for entity in self.catalog.entities() {
            let segment = route_segment(entity);
            builder = builder
                .line(&format!(
                    "{{ path: '{}', component: {} }},",
                    segment,
                    page_class(entity, PageMode::List)
                ))
                .line(&format!(
                    "{{ path: '{}/create', component: {} }},",
                    segment,
                    page_class(entity, PageMode::Create)
                ))
                .line(&format!(
                    "{{ path: '{}/edit/:id', component: {} }},",
                    segment,
                    page_class(entity, PageMode::Edit)
                ));
        }
        builder.dedent().line("];").build()
    }
}
