//! Frontend generator: renders the full artifact set for one feature.

use std::path::PathBuf;

use telar_codegen::TargetCodegen;
use telar_core::{Artifact, GeneratedFile};
use telar_schema::Catalog;

use crate::files::{
    CardComponent, HomePageFile, LayoutFile, ModelFile, PageFile, PageMode, RoutesFile,
    ServiceFile, TableComponent, TrailingSlashInterceptor,
};

/// Angular frontend code generator.
///
/// Plans per-entity models, services, and pages under
/// `frontend/src/app/features/<feature>/`, plus the catalog-wide home page,
/// layout, and request interceptor.
pub struct Generator<'a> {
    catalog: &'a Catalog,
    feature: String,
}

impl<'a> Generator<'a> {
    pub fn new(catalog: &'a Catalog, feature: impl Into<String>) -> Self {
        Self {
            catalog,
            feature: feature.into(),
        }
    }
}

impl TargetCodegen for Generator<'_> {
    fn target(&self) -> &'static str {
        "angular"
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn plan(&self) -> Vec<Artifact> {
        let app = PathBuf::from("frontend/src/app");
        let feature_dir = app.join("features").join(&self.feature);

        let mut artifacts = vec![
            CardComponent.artifact().under(&feature_dir),
            TableComponent.artifact().under(&feature_dir),
        ];

        for entity in self.catalog.entities() {
            artifacts.push(ModelFile::new(entity).artifact().under(&feature_dir));
            artifacts.push(ServiceFile::new(entity).artifact().under(&feature_dir));
            for mode in PageMode::ALL {
                artifacts.push(PageFile::new(entity, mode).artifact().under(&feature_dir));
            }
        }

        artifacts.push(
            RoutesFile::new(self.catalog, &self.feature)
                .artifact()
                .under(&feature_dir),
        );
        artifacts.push(HomePageFile::new(self.catalog).artifact().under(&app));
        artifacts.push(LayoutFile::new(self.catalog).artifact().under(&app));
        artifacts.push(TrailingSlashInterceptor.artifact().under(&app));
        artifacts
    }
}
