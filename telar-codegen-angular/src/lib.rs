//! Angular frontend emitter.
//!
//! Consumes the resolved entity catalog and renders one frontend feature:
//! typed models, injectable data-access services, CRUD page components,
//! the feature route table, home page, layout with sidebar, and the
//! trailing-slash request interceptor. Page components and the generic UI
//! components are create-once scaffolds; everything else is regenerated on
//! every run.

mod files;
mod generator;

pub use files::{
    CardComponent, HomePageFile, LayoutFile, ModelFile, PageFile, PageMode, RoutesFile,
    ServiceFile, TableComponent, TrailingSlashInterceptor,
};
pub use generator::Generator;
pub use telar_codegen::TargetCodegen;
