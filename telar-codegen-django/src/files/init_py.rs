//! __init__.py generator for the domain package.

use std::path::PathBuf;

use telar_core::{FileRules, GeneratedFile};

/// The domain package marker. Created once and left to hand edits.
pub struct DomainInit {
    domain: String,
}

impl DomainInit {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
        }
    }
}

impl GeneratedFile for DomainInit {
    fn rel_path(&self) -> PathBuf {
        PathBuf::from("__init__.py")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        format!("# Domain package for {}\n", self.domain)
    }
}
