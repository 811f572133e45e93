//! Backend generator: renders the full artifact set for one domain.

use std::path::PathBuf;

use telar_codegen::TargetCodegen;
use telar_core::{Artifact, GeneratedFile};
use telar_schema::Catalog;

use crate::files::{DomainInit, ModelsFile, SerializersFile, UrlsFile, ViewsFile};

/// Django backend code generator.
///
/// Consumes a resolved catalog and plans the per-domain artifact set under
/// `backend/domains/<domain>/`.
pub struct Generator<'a> {
    catalog: &'a Catalog,
    domain: String,
}

impl<'a> Generator<'a> {
    pub fn new(catalog: &'a Catalog, domain: impl Into<String>) -> Self {
        Self {
            catalog,
            domain: domain.into(),
        }
    }

    fn domain_dir(&self) -> PathBuf {
        PathBuf::from("backend").join("domains").join(&self.domain)
    }
}

impl TargetCodegen for Generator<'_> {
    fn target(&self) -> &'static str {
        "django"
    }

    fn file_extension(&self) -> &'static str {
        "py"
    }

    fn plan(&self) -> Vec<Artifact> {
        let dir = self.domain_dir();
        vec![
            ModelsFile::new(self.catalog).artifact().under(&dir),
            SerializersFile::new(self.catalog).artifact().under(&dir),
            ViewsFile::new(self.catalog).artifact().under(&dir),
            UrlsFile::new(self.catalog).artifact().under(&dir),
            DomainInit::new(&self.domain).artifact().under(&dir),
        ]
    }
}
