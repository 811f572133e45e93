use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for telar-schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the schema content and filename so error construction does not have
/// to thread both through every parsing function.
#[derive(Debug, Clone)]
pub(crate) struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub(crate) fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    pub(crate) fn parse_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = span_for(&self.src, &source);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    pub(crate) fn not_a_mapping(&self) -> Box<Error> {
        Box::new(Error::NotAMapping {
            src: self.named_source(),
        })
    }

    pub(crate) fn invalid_object(&self, entity: impl Into<String>) -> Box<Error> {
        Box::new(Error::InvalidObject {
            src: self.named_source(),
            entity: entity.into(),
        })
    }

    pub(crate) fn invalid_properties(&self, entity: impl Into<String>) -> Box<Error> {
        Box::new(Error::InvalidProperties {
            src: self.named_source(),
            entity: entity.into(),
        })
    }

    pub(crate) fn invalid_property(
        &self,
        entity: impl Into<String>,
        property: impl Into<String>,
    ) -> Box<Error> {
        Box::new(Error::InvalidProperty {
            src: self.named_source(),
            entity: entity.into(),
            property: property.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(telar::schema_load),
        help("check the path passed to --schema")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema")]
    #[diagnostic(code(telar::schema_load))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("schema root is not a mapping of schema objects")]
    #[diagnostic(
        code(telar::schema_load),
        help(
            "the schema must map entity names to definitions, either at the top level or under components.schemas"
        )
    )]
    NotAMapping {
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("schema object '{entity}' must be a mapping")]
    #[diagnostic(code(telar::schema_shape))]
    InvalidObject {
        #[source_code]
        src: NamedSource<String>,
        entity: String,
    },

    #[error("properties of schema object '{entity}' must be a mapping")]
    #[diagnostic(
        code(telar::schema_shape),
        help("declare properties as a map of property name to {{ type, maxLength, x-foreign-key }}")
    )]
    InvalidProperties {
        #[source_code]
        src: NamedSource<String>,
        entity: String,
    },

    #[error("property '{property}' of '{entity}' must be a mapping")]
    #[diagnostic(code(telar::schema_shape))]
    InvalidProperty {
        #[source_code]
        src: NamedSource<String>,
        entity: String,
        property: String,
    },

    #[error("property '{property}' of '{entity}' references unknown entity '{target}'")]
    #[diagnostic(
        code(telar::dangling_reference),
        help(
            "declare '{target}' in the schema or fix the x-foreign-key marker; pass --allow-dangling-refs to keep the legacy permissive behavior"
        )
    )]
    DanglingReference {
        entity: String,
        property: String,
        target: String,
    },
}

/// Best-effort span for a serde_json error, derived from its line/column.
fn span_for(content: &str, err: &serde_json::Error) -> Option<SourceSpan> {
    if err.line() == 0 || content.is_empty() {
        return None;
    }
    let mut offset = 0usize;
    for (index, line) in content.split_inclusive('\n').enumerate() {
        if index + 1 == err.line() {
            let column = err.column().saturating_sub(1).min(line.len());
            let at = (offset + column).min(content.len().saturating_sub(1));
            return Some((at, 1).into());
        }
        offset += line.len();
    }
    None
}
