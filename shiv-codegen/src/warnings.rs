//! Suppressed-warning aggregation.

use indexmap::IndexSet;

use crate::builder::AnnotationSpec;

/// Qualified name of the annotation carrying suppressed warnings.
pub const SUPPRESS_WARNINGS: &str = "java.lang.SuppressWarnings";

const VALUE: &str = "value";

/// Tracks suppressed-warning tokens and deduplicates them.
///
/// Maintains first-insertion order for deterministic output.
///
/// # Example
///
/// ```
/// use shiv_codegen::SuppressedWarnings;
///
/// let mut warnings = SuppressedWarnings::new();
/// warnings.insert("unchecked");
/// warnings.insert("ResourceType");
/// warnings.insert("unchecked");
///
/// assert_eq!(warnings.to_value(), "{\"unchecked\", \"ResourceType\"}");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuppressedWarnings {
    tokens: IndexSet<String>,
}

impl SuppressedWarnings {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a token. Returns false if it was already present.
    pub fn insert(&mut self, token: &str) -> bool {
        self.tokens.insert(token.to_string())
    }

    /// Merge another set into this one, keeping existing tokens first.
    pub fn merge(&mut self, other: &SuppressedWarnings) {
        for token in &other.tokens {
            self.insert(token);
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// Iterate over the tokens in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Render the annotation value: quoted tokens, comma-joined, in braces.
    pub fn to_value(&self) -> String {
        let quoted: Vec<String> = self.iter().map(|t| format!("\"{}\"", t)).collect();
        format!("{{{}}}", quoted.join(", "))
    }

    /// The `@SuppressWarnings` annotation, or None if the set is empty.
    pub fn to_annotation(&self) -> Option<AnnotationSpec> {
        if self.is_empty() {
            return None;
        }
        Some(AnnotationSpec::new(SUPPRESS_WARNINGS).member(VALUE, self.to_value()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_deduplicates() {
        let mut warnings = SuppressedWarnings::new();
        assert!(warnings.insert("unchecked"));
        assert!(!warnings.insert("unchecked"));
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut warnings = SuppressedWarnings::new();
        warnings.insert("ResourceType");
        warnings.insert("unchecked");
        assert!(!warnings.insert("ResourceType"));
        assert_eq!(
            warnings.iter().collect::<Vec<_>>(),
            vec!["ResourceType", "unchecked"]
        );
    }

    #[test]
    fn test_merge_keeps_first_insertion_order() {
        let mut merged = SuppressedWarnings::new();
        merged.insert("ResourceType");

        let mut other = SuppressedWarnings::new();
        other.insert("unchecked");
        other.insert("ResourceType");
        merged.merge(&other);

        let tokens: Vec<_> = merged.iter().collect();
        assert_eq!(tokens, vec!["ResourceType", "unchecked"]);
    }

    #[test]
    fn test_empty_has_no_annotation() {
        assert!(SuppressedWarnings::new().to_annotation().is_none());
    }

    #[test]
    fn test_annotation_value() {
        let mut warnings = SuppressedWarnings::new();
        warnings.insert("unchecked");
        let annotation = warnings.to_annotation().unwrap();
        assert_eq!(annotation.name, SUPPRESS_WARNINGS);
        assert_eq!(annotation.value("value"), Some("{\"unchecked\"}"));
    }
}
