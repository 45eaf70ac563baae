//! Host type declarations.

use std::fmt;

use serde::Deserialize;

/// The framework role of a host type.
///
/// Holders use it to reject hosts that cannot carry their bindings
/// (e.g. extras outside an activity or fragment).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostKind {
    Activity,
    Fragment,
    View,
    Service,
    #[default]
    Other,
}

impl fmt::Display for HostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HostKind::Activity => "activity",
            HostKind::Fragment => "fragment",
            HostKind::View => "view",
            HostKind::Service => "service",
            HostKind::Other => "other",
        };
        f.write_str(name)
    }
}

/// The type declaration a binder is generated for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostType {
    /// Fully qualified name (e.g. `com.example.Outer.Inner`).
    pub qualified_name: String,
    /// Enclosing package (e.g. `com.example`).
    pub package: String,
    /// Simple name (e.g. `Inner`).
    pub simple_name: String,
    /// Framework role of the host.
    pub kind: HostKind,
}

impl HostType {
    /// Create a host from its qualified name and package.
    pub fn new(qualified_name: impl Into<String>, package: impl Into<String>) -> Self {
        let qualified_name = qualified_name.into();
        let simple_name = qualified_name
            .rsplit('.')
            .next()
            .unwrap_or(&qualified_name)
            .to_string();
        Self {
            qualified_name,
            package: package.into(),
            simple_name,
            kind: HostKind::Other,
        }
    }

    /// Create a host, deriving the package from the qualified name.
    ///
    /// Leading segments that start with a lowercase letter form the package,
    /// so `com.example.Outer.Inner` lives in `com.example`. The last segment
    /// is always the type itself.
    pub fn from_qualified(qualified_name: impl Into<String>) -> Self {
        let qualified_name = qualified_name.into();
        let segments: Vec<&str> = qualified_name.split('.').collect();
        let package = segments[..segments.len() - 1]
            .iter()
            .copied()
            .take_while(|segment| segment.starts_with(|c: char| c.is_ascii_lowercase()))
            .collect::<Vec<_>>()
            .join(".");
        Self::new(qualified_name, package)
    }

    /// Set the host kind.
    pub fn kind(mut self, kind: HostKind) -> Self {
        self.kind = kind;
        self
    }

    /// The name relative to the package, with nested types joined by `$`.
    pub fn binary_name(&self) -> String {
        let relative = if self.package.is_empty() {
            self.qualified_name.as_str()
        } else {
            self.qualified_name
                .strip_prefix(&self.package)
                .and_then(|rest| rest.strip_prefix('.'))
                .unwrap_or(&self.qualified_name)
        };
        relative.replace('.', "$")
    }
}

impl fmt::Display for HostType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_qualified_top_level() {
        let host = HostType::from_qualified("com.example.MainActivity");
        assert_eq!(host.package, "com.example");
        assert_eq!(host.simple_name, "MainActivity");
        assert_eq!(host.binary_name(), "MainActivity");
        assert_eq!(host.kind, HostKind::Other);
    }

    #[test]
    fn test_from_qualified_nested() {
        let host = HostType::from_qualified("com.example.Outer.Inner");
        assert_eq!(host.package, "com.example");
        assert_eq!(host.simple_name, "Inner");
        assert_eq!(host.binary_name(), "Outer$Inner");
    }

    #[test]
    fn test_lowercase_type_name_stays_out_of_package() {
        let host = HostType::from_qualified("com.example.mainActivity");
        assert_eq!(host.package, "com.example");
        assert_eq!(host.simple_name, "mainActivity");
        assert_eq!(host.binary_name(), "mainActivity");

        let host = HostType::from_qualified("widget");
        assert_eq!(host.package, "");
        assert_eq!(host.binary_name(), "widget");
    }

    #[test]
    fn test_default_package() {
        let host = HostType::from_qualified("Foo");
        assert_eq!(host.package, "");
        assert_eq!(host.binary_name(), "Foo");
    }

    #[test]
    fn test_explicit_package() {
        let host = HostType::new("org.Acme.ui.Screen", "org.Acme.ui").kind(HostKind::Fragment);
        assert_eq!(host.binary_name(), "Screen");
        assert_eq!(host.kind, HostKind::Fragment);
    }
}
