//! Code builder utility for generating properly indented code.

/// Indentation unit for a generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(&'static str);

impl Indent {
    /// 4-space indentation (Python).
    pub const PYTHON: Indent = Indent("    ");
    /// 2-space indentation (TypeScript).
    pub const TYPESCRIPT: Indent = Indent("  ");

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use telar_codegen::CodeBuilder;
///
/// let code = CodeBuilder::python()
///     .block("class Book(models.Model):", |b| {
///         b.line("id = models.AutoField(primary_key=True)")
///     })
///     .build();
///
/// assert_eq!(
///     code,
///     "class Book(models.Model):\n    id = models.AutoField(primary_key=True)\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation (Python default).
    pub fn python() -> Self {
        Self::new(Indent::PYTHON)
    }

    /// Create a new CodeBuilder with 2-space indentation (TS default).
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Add pre-rendered text verbatim.
    pub fn raw(mut self, s: &str) -> Self {
        self.buffer.push_str(s);
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a header line and run `f` one level deeper.
    pub fn block<F>(self, header: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent()
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_and_blank() {
        let code = CodeBuilder::python()
            .line("from django.db import models")
            .blank()
            .line("x = 1")
            .build();

        assert_eq!(code, "from django.db import models\n\nx = 1\n");
    }

    #[test]
    fn test_nested_blocks() {
        let code = CodeBuilder::python()
            .block("class Meta:", |b| b.line("db_table = 'books'"))
            .build();

        assert_eq!(code, "class Meta:\n    db_table = 'books'\n");
    }

    #[test]
    fn test_typescript_indentation() {
        let code = CodeBuilder::typescript()
            .block("export interface Book {", |b| b.line("id: number;"))
            .line("}")
            .build();

        assert_eq!(code, "export interface Book {\n  id: number;\n}\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let code = CodeBuilder::python().dedent().line("top").build();
        assert_eq!(code, "top\n");
    }
}
