//! Validation utilities for Java identifiers

use miette::SourceSpan;

use crate::{Error, Result};

/// Source information carried through manifest validation.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ParseContext<'a> {
    src: &'a str,
    filename: &'a str,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self { src, filename }
    }

    pub fn src(&self) -> &'a str {
        self.src
    }

    pub fn filename(&self) -> &'a str {
        self.filename
    }

    /// Span of the quoted string `value`, searching from byte offset `from`.
    pub fn find_span(&self, value: &str, from: usize) -> Option<SourceSpan> {
        find_quoted_span(self.src, value, from)
    }

    /// Validate a single Java identifier (a field name or a name segment).
    pub fn validate_name(&self, name: &str, context: &str, from: usize) -> Result<()> {
        if is_java_keyword(name) {
            return Err(Error::reserved_keyword(
                name,
                context,
                self.src,
                self.filename,
                self.find_span(name, from),
            ));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(Error::invalid_identifier(
                name,
                context,
                reason,
                self.src,
                self.filename,
                self.find_span(name, from),
            ));
        }

        Ok(())
    }

    /// Validate a dotted name such as `com.example.MainActivity`.
    pub fn validate_qualified_name(&self, name: &str, context: &str, from: usize) -> Result<()> {
        if name.is_empty() {
            return Err(Error::invalid_identifier(
                name,
                context,
                "name cannot be empty",
                self.src,
                self.filename,
                None,
            ));
        }

        for segment in name.split('.') {
            if is_java_keyword(segment) {
                return Err(Error::reserved_keyword(
                    segment,
                    context,
                    self.src,
                    self.filename,
                    self.find_span(name, from),
                ));
            }
            if let Some(reason) = validate_identifier(segment) {
                return Err(Error::invalid_identifier(
                    name,
                    context,
                    reason,
                    self.src,
                    self.filename,
                    self.find_span(name, from),
                ));
            }
        }

        Ok(())
    }
}

/// Java reserved keywords and literals that cannot be used as identifiers
pub(crate) const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while",
    // Literals
    "true", "false", "null",
    // Reserved since Java 9
    "_",
];

/// Check if a name is a Java reserved keyword
pub(crate) fn is_java_keyword(name: &str) -> bool {
    JAVA_KEYWORDS.contains(&name)
}

/// Find the span of `"value"` in the TOML source, excluding the quotes.
pub(crate) fn find_quoted_span(src: &str, value: &str, from: usize) -> Option<SourceSpan> {
    let pattern = format!("\"{}\"", value);
    let rest = src.get(from..)?;
    rest.find(&pattern)
        .map(|pos| SourceSpan::from((from + pos + 1, value.len())))
}

/// Validate that a name is a valid Java identifier.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    let Some(first) = chars.next() else {
        return Some("name cannot be empty");
    };

    if first.is_ascii_digit() {
        return Some("name cannot start with a digit");
    }

    if !is_identifier_char(first) {
        return Some("name must start with a letter, '_' or '$'");
    }

    if !chars.all(is_identifier_char) {
        return Some("name contains invalid characters");
    }

    None
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
