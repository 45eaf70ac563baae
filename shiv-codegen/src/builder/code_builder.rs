//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use shiv_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::java();
/// builder
///     .push_line("void bind() {")
///     .push_indent()
///     .push_line("target.title = null;")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "void bind() {\n    target.title = null;\n}\n");
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

    /// Create a new CodeBuilder with 4-space indentation.
    pub fn java() -> Self {
        Self::new(Indent::JAVA)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a Javadoc comment.
    pub fn push_javadoc(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str("/** ");
        self.buffer.push_str(text);
        self.buffer.push_str(" */\n");
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
            CodeFragment::JavaDoc(text) => {
                self.push_javadoc(&text);
            }
        }
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::java()
    }
}
