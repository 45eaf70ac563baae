//! Marked fields and type name helpers.

use std::fmt;

use serde::Deserialize;

/// A Java modifier that matters for field binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldModifier {
    Private,
    Static,
    Final,
}

impl fmt::Display for FieldModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldModifier::Private => "private",
            FieldModifier::Static => "static",
            FieldModifier::Final => "final",
        };
        f.write_str(name)
    }
}

/// Arguments carried by the binding marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingArgs {
    /// Resource id (views).
    pub id: Option<i64>,
    /// Lookup key (preferences, extras) or service name (services).
    pub key: Option<String>,
    /// Skip the null check when the value is absent.
    pub optional: bool,
}

/// A field of a host type selected by a binding marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundField {
    /// Field name.
    pub name: String,
    /// Declared type, fully qualified (e.g. `java.util.List<java.lang.String>`).
    pub ty: String,
    /// Declared modifiers.
    pub modifiers: Vec<FieldModifier>,
    /// Marker arguments.
    pub args: BindingArgs,
}

impl BoundField {
    /// Create a package-private field with no marker arguments.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            modifiers: Vec::new(),
            args: BindingArgs::default(),
        }
    }

    /// Add a modifier.
    pub fn modifier(mut self, modifier: FieldModifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Set the resource id.
    pub fn id(mut self, id: i64) -> Self {
        self.args.id = Some(id);
        self
    }

    /// Set the lookup key.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.args.key = Some(key.into());
        self
    }

    /// Mark the binding as optional.
    pub fn optional(mut self) -> Self {
        self.args.optional = true;
        self
    }

    pub fn has_modifier(&self, modifier: FieldModifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    /// The explicit key if set and non-empty.
    pub fn key_or_none(&self) -> Option<&str> {
        self.args.key.as_deref().filter(|key| !key.is_empty())
    }
}

const PRIMITIVES: [(&str, &str); 8] = [
    ("boolean", "java.lang.Boolean"),
    ("byte", "java.lang.Byte"),
    ("char", "java.lang.Character"),
    ("short", "java.lang.Short"),
    ("int", "java.lang.Integer"),
    ("long", "java.lang.Long"),
    ("float", "java.lang.Float"),
    ("double", "java.lang.Double"),
];

/// Whether `ty` names a Java primitive.
pub fn is_primitive(ty: &str) -> bool {
    PRIMITIVES.iter().any(|(primitive, _)| *primitive == ty)
}

/// Whether `ty` carries type arguments.
pub fn is_generic(ty: &str) -> bool {
    ty.contains('<')
}

/// The reference type for `ty`, boxing primitives.
pub fn boxed_type(ty: &str) -> &str {
    PRIMITIVES
        .iter()
        .find(|(primitive, _)| *primitive == ty)
        .map_or(ty, |(_, boxed)| boxed)
}
