//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! This module provides abstractions that allow specs to be composed
//! and rendered without direct coupling to CodeBuilder.

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line.
    Blank,
    /// A block with header, body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// A sequence of fragments.
    Sequence(Vec<CodeFragment>),
    /// A Javadoc comment.
    JavaDoc(String),
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a blank line fragment.
    pub fn blank() -> Self {
        Self::Blank
    }

    /// Create a block fragment.
    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    /// Create a sequence of fragments.
    pub fn sequence(fragments: Vec<CodeFragment>) -> Self {
        Self::Sequence(fragments)
    }

    /// Create a Javadoc comment fragment.
    pub fn javadoc(s: impl Into<String>) -> Self {
        Self::JavaDoc(s.into())
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

/// Blanket implementation for references.
impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}
