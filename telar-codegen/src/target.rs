//! Target-agnostic code generation traits.

use std::path::Path;

use eyre::Result;
use telar_core::{Artifact, WriteSummary, write_all};

/// Trait for target-ecosystem code generators.
///
/// Implementations render their complete artifact set in [`plan`] and never
/// touch the filesystem there; [`generate`] writes only a fully rendered
/// plan, so a failed run cannot leave a half-written artifact set.
///
/// [`plan`]: TargetCodegen::plan
/// [`generate`]: TargetCodegen::generate
pub trait TargetCodegen {
    /// Target identifier (e.g., "django", "angular").
    fn target(&self) -> &'static str;

    /// File extension of generated source files (e.g., "py", "ts").
    fn file_extension(&self) -> &'static str;

    /// Render the complete artifact set for one run, paths relative to the
    /// output root.
    fn plan(&self) -> Vec<Artifact>;

    /// Preview generated files without writing to disk.
    fn preview(&self) -> Vec<PreviewFile> {
        self.plan()
            .into_iter()
            .map(|artifact| PreviewFile {
                path: artifact.path().display().to_string(),
                content: artifact.content().to_string(),
            })
            .collect()
    }

    /// Render everything, then write under `output_dir`.
    fn generate(&self, output_dir: &Path) -> Result<WriteSummary> {
        let artifacts = self.plan();
        write_all(&artifacts, output_dir)
    }
}

/// A generated file for preview.
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from the output directory.
    pub path: String,
    /// File content.
    pub content: String,
}
