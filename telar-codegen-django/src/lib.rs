//! Django REST Framework backend emitter.
//!
//! Consumes the resolved entity catalog and renders one backend domain:
//! models, serializers, viewsets, and router registrations, plus the domain
//! package marker. Every per-entity artifact follows one uniform template
//! parameterized only by entity name, property list, and relation list.

mod files;
mod generator;

pub use files::{DomainInit, ModelsFile, SerializersFile, UrlsFile, ViewsFile};
pub use generator::Generator;
pub use telar_codegen::TargetCodegen;
