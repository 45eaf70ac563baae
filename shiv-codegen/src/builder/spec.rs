//! Declarative specifications for generated types.
//!
//! A binder is described as a [`TypeSpec`]: a class with modifiers, a
//! superclass, annotations and an ordered list of members. Specs carry no
//! rendering logic; language crates turn them into source text.

use std::fmt;

/// A class-level or member-level modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Static,
    Final,
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            Modifier::Static => "static",
            Modifier::Final => "final",
        };
        f.write_str(keyword)
    }
}

/// An annotation with optional `key = value` members.
///
/// Member values are source snippets and are emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationSpec {
    /// Fully qualified annotation type (e.g. `java.lang.Override`).
    pub name: String,
    /// Members in declaration order.
    pub members: Vec<(String, String)>,
}

impl AnnotationSpec {
    /// Create a marker annotation with no members.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// The `@Override` annotation.
    pub fn override_() -> Self {
        Self::new("java.lang.Override")
    }

    /// Add a member.
    pub fn member(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.members.push((key.into(), value.into()));
        self
    }

    /// Look up a member value by key.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.members
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// A statement in a method body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Expression or declaration, terminated with `;` when rendered.
    Expr(String),
    /// `return <expr>;`
    Return(String),
    /// `if (<condition>) { ... } else { ... }`
    If {
        condition: String,
        then_branch: Vec<Statement>,
        else_branch: Option<Vec<Statement>>,
    },
}

impl Statement {
    /// Create an expression statement.
    pub fn expr(code: impl Into<String>) -> Self {
        Self::Expr(code.into())
    }

    /// Create a return statement.
    pub fn return_(code: impl Into<String>) -> Self {
        Self::Return(code.into())
    }

    /// Create an if statement.
    pub fn if_(condition: impl Into<String>, then_branch: Vec<Statement>) -> Self {
        Self::If {
            condition: condition.into(),
            then_branch,
            else_branch: None,
        }
    }

    /// Create an if-else statement.
    pub fn if_else(
        condition: impl Into<String>,
        then_branch: Vec<Statement>,
        else_branch: Vec<Statement>,
    ) -> Self {
        Self::If {
            condition: condition.into(),
            then_branch,
            else_branch: Some(else_branch),
        }
    }
}

/// A method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: String,
    pub ty: String,
}

impl ParamSpec {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// A method on a generated type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSpec {
    /// Method name.
    pub name: String,
    /// Documentation comment.
    pub doc: Option<String>,
    /// Annotations, rendered above the signature.
    pub annotations: Vec<AnnotationSpec>,
    /// Modifiers.
    pub modifiers: Vec<Modifier>,
    /// Parameters.
    pub params: Vec<ParamSpec>,
    /// Return type (None for void).
    pub returns: Option<String>,
    /// Body statements.
    pub body: Vec<Statement>,
}

impl MethodSpec {
    /// Create a new method with no modifiers.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            annotations: Vec::new(),
            modifiers: Vec::new(),
            params: Vec::new(),
            returns: None,
            body: Vec::new(),
        }
    }

    /// Set documentation comment.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add an annotation.
    pub fn annotation(mut self, annotation: AnnotationSpec) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Add a modifier.
    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Add a parameter.
    pub fn param(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.params.push(ParamSpec::new(name, ty));
        self
    }

    /// Set return type.
    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.returns = Some(ty.into());
        self
    }

    /// Add a statement to the body.
    pub fn statement(mut self, stmt: Statement) -> Self {
        self.body.push(stmt);
        self
    }

    /// Add multiple statements to the body.
    pub fn statements(mut self, stmts: impl IntoIterator<Item = Statement>) -> Self {
        self.body.extend(stmts);
        self
    }
}

/// A field on a generated type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub ty: String,
    pub modifiers: Vec<Modifier>,
    /// Initializer expression.
    pub initializer: Option<String>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            modifiers: Vec::new(),
            initializer: None,
        }
    }

    /// Add modifiers.
    pub fn modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    /// Set the initializer.
    pub fn initializer(mut self, init: impl Into<String>) -> Self {
        self.initializer = Some(init.into());
        self
    }
}

/// A member of a generated type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberSpec {
    Field(FieldSpec),
    Method(MethodSpec),
}

impl MemberSpec {
    pub fn name(&self) -> &str {
        match self {
            MemberSpec::Field(field) => &field.name,
            MemberSpec::Method(method) => &method.name,
        }
    }
}

impl From<FieldSpec> for MemberSpec {
    fn from(field: FieldSpec) -> Self {
        MemberSpec::Field(field)
    }
}

impl From<MethodSpec> for MemberSpec {
    fn from(method: MethodSpec) -> Self {
        MemberSpec::Method(method)
    }
}

/// A finished generated type.
///
/// Produced once by [`TypeBuilder::build`](super::TypeBuilder::build) and
/// immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSpec {
    /// Simple (binary) class name, e.g. `MainActivity$$Binder`.
    pub name: String,
    pub modifiers: Vec<Modifier>,
    /// Fully qualified superclass.
    pub superclass: Option<String>,
    pub annotations: Vec<AnnotationSpec>,
    /// Members in emission order.
    pub members: Vec<MemberSpec>,
}

impl TypeSpec {
    /// Iterate over the methods, in emission order.
    pub fn methods(&self) -> impl Iterator<Item = &MethodSpec> {
        self.members.iter().filter_map(|member| match member {
            MemberSpec::Method(method) => Some(method),
            MemberSpec::Field(_) => None,
        })
    }

    /// Iterate over the fields, in emission order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.members.iter().filter_map(|member| match member {
            MemberSpec::Field(field) => Some(field),
            MemberSpec::Method(_) => None,
        })
    }

    /// Find a method by name.
    pub fn method(&self, name: &str) -> Option<&MethodSpec> {
        self.methods().find(|method| method.name == name)
    }

    /// Find an annotation by qualified name.
    pub fn annotation(&self, name: &str) -> Option<&AnnotationSpec> {
        self.annotations.iter().find(|a| a.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotation_members() {
        let annotation = AnnotationSpec::new("java.lang.SuppressWarnings")
            .member("value", "{\"unchecked\"}");
        assert_eq!(annotation.value("value"), Some("{\"unchecked\"}"));
        assert_eq!(annotation.value("missing"), None);
    }

    #[test]
    fn test_type_spec_lookup() {
        let spec = TypeSpec {
            name: "Foo$$Binder".to_string(),
            modifiers: vec![Modifier::Public, Modifier::Final],
            superclass: None,
            annotations: Vec::new(),
            members: vec![
                FieldSpec::new("KEY", "java.lang.String").into(),
                MethodSpec::new("bindViews").into(),
            ],
        };
        assert_eq!(spec.fields().count(), 1);
        assert_eq!(spec.methods().count(), 1);
        assert!(spec.method("bindViews").is_some());
        assert!(spec.method("KEY").is_none());
        assert_eq!(spec.members[0].name(), "KEY");
    }
}
