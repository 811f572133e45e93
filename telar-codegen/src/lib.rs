//! Shared code generation utilities for the telar generator.
//!
//! Both target emitters build on the pieces here: the indentation-aware
//! [`CodeBuilder`] used to render artifacts, the type [`mappers`] from
//! abstract scalar types to target constructs, and the [`TargetCodegen`]
//! trait with its plan-then-write contract.

mod builder;
pub mod mappers;
mod target;

pub use builder::{CodeBuilder, Indent};
pub use mappers::{EmitTarget, map_scalar};
pub use target::{PreviewFile, TargetCodegen};
