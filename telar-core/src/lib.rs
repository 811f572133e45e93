//! Core utilities and types for the telar scaffolding generator.
//!
//! This crate provides the pieces shared by every emitter: rendered-artifact
//! handling with per-file overwrite rules, identifier transforms between the
//! schema's naming convention and each target's, and the abstract scalar
//! type vocabulary.

mod file;
mod naming;
mod types;

// Artifact writing
pub use file::{Artifact, FileRules, GeneratedFile, Overwrite, WriteResult, WriteSummary, write_all};
// Identifier transforms
pub use naming::{pluralize, to_camel_case, to_kebab_case, to_pascal_case, to_snake_case};
// Abstract property types
pub use types::ScalarType;
