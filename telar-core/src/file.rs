use std::path::{Path, PathBuf};

use eyre::Result;

/// How to handle an existing file at an artifact's path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Regenerate on every run (purely derived files).
    Always,
    /// Only create when no file exists yet (hand-edit scaffolds).
    IfMissing,
}

/// Rules that determine how an artifact is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    /// Rules for files that are fully derived from the catalog.
    pub fn regenerate() -> Self {
        Self {
            overwrite: Overwrite::Always,
        }
    }

    /// Rules for scaffold files meant as hand-edit starting points.
    pub fn create_once() -> Self {
        Self {
            overwrite: Overwrite::IfMissing,
        }
    }
}

impl Default for FileRules {
    fn default() -> Self {
        Self::regenerate()
    }
}

/// Result of writing one artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written.
    Written,
    /// File was left untouched (already exists).
    Skipped,
}

/// One rendered output file, not yet on disk.
///
/// Artifacts are constructed fresh on every generator run and never read
/// back in. The path is relative to the output root passed to [`write_all`].
#[derive(Debug, Clone)]
pub struct Artifact {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl Artifact {
    /// Create an artifact with default rules (always regenerate).
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self::with_rules(path, content, FileRules::default())
    }

    pub fn with_rules(
        path: impl Into<PathBuf>,
        content: impl Into<String>,
        rules: FileRules,
    ) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules,
        }
    }

    /// Path relative to the output root.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the same artifact with its path nested under `prefix`.
    pub fn under(mut self, prefix: &Path) -> Self {
        self.path = prefix.join(&self.path);
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn rules(&self) -> FileRules {
        self.rules
    }

    /// Write this artifact under `base` according to its rules.
    pub fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = base.join(&self.path);
        match self.rules.overwrite {
            Overwrite::Always => {
                write_file(&path, &self.content)?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing => {
                if path.exists() {
                    Ok(WriteResult::Skipped)
                } else {
                    write_file(&path, &self.content)?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

/// Trait for types that render one generated file.
pub trait GeneratedFile {
    /// Output path relative to the target's output root.
    fn rel_path(&self) -> PathBuf;

    /// Rules for writing this file.
    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    /// Render the file content.
    fn render(&self) -> String;

    /// Render into an [`Artifact`] ready for the writer.
    fn artifact(&self) -> Artifact {
        Artifact::with_rules(self.rel_path(), self.render(), self.rules())
    }
}

/// Totals of one writer pass.
#[derive(Debug, Default)]
pub struct WriteSummary {
    /// Paths that were written this run.
    pub written: Vec<PathBuf>,
    /// Paths that were left untouched (create-once files that already exist).
    pub skipped: Vec<PathBuf>,
}

impl WriteSummary {
    pub fn total(&self) -> usize {
        self.written.len() + self.skipped.len()
    }
}

/// Write every artifact under `base`, honoring each artifact's rules.
///
/// Callers render the complete artifact set before invoking this, so a run
/// that fails earlier in the pipeline writes nothing.
pub fn write_all(artifacts: &[Artifact], base: &Path) -> Result<WriteSummary> {
    let mut summary = WriteSummary::default();
    for artifact in artifacts {
        match artifact.write(base)? {
            WriteResult::Written => summary.written.push(artifact.path().to_path_buf()),
            WriteResult::Skipped => summary.skipped.push(artifact.path().to_path_buf()),
        }
    }
    Ok(summary)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let artifact = Artifact::new("a/b/c.txt", "nested");

        let result = artifact.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("a/b/c.txt")).unwrap(),
            "nested"
        );
    }

    #[test]
    fn test_always_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("out.txt"), "original").unwrap();

        let artifact = Artifact::new("out.txt", "updated");
        let result = artifact.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("out.txt")).unwrap(),
            "updated"
        );
    }

    #[test]
    fn test_if_missing_creates_new() {
        let temp = TempDir::new().unwrap();

        let artifact = Artifact::with_rules("stub.txt", "stub", FileRules::create_once());
        let result = artifact.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("stub.txt")).unwrap(),
            "stub"
        );
    }

    #[test]
    fn test_if_missing_preserves_existing() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("stub.txt"), "hand edited").unwrap();

        let artifact = Artifact::with_rules("stub.txt", "regenerated", FileRules::create_once());
        let result = artifact.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(
            fs::read_to_string(temp.path().join("stub.txt")).unwrap(),
            "hand edited"
        );
    }

    #[test]
    fn test_write_all_reports_written_and_skipped() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("kept.txt"), "edited").unwrap();

        let artifacts = vec![
            Artifact::new("derived.txt", "derived"),
            Artifact::with_rules("kept.txt", "stub", FileRules::create_once()),
        ];
        let summary = write_all(&artifacts, temp.path()).unwrap();

        assert_eq!(summary.written, vec![PathBuf::from("derived.txt")]);
        assert_eq!(summary.skipped, vec![PathBuf::from("kept.txt")]);
        assert_eq!(summary.total(), 2);
        assert_eq!(
            fs::read_to_string(temp.path().join("kept.txt")).unwrap(),
            "edited"
        );
    }

    #[test]
    fn test_rerun_is_byte_stable() {
        let temp = TempDir::new().unwrap();
        let artifact = Artifact::new("models.py", "class Book: pass\n");

        artifact.write(temp.path()).unwrap();
        let first = fs::read_to_string(temp.path().join("models.py")).unwrap();
        artifact.write(temp.path()).unwrap();
        let second = fs::read_to_string(temp.path().join("models.py")).unwrap();

        assert_eq!(first, second);
    }
}
