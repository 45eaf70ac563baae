//! The output builder holders write into.

use super::{AnnotationSpec, MemberSpec, Modifier, TypeSpec};

/// Builder for a single generated type.
///
/// The manager opens one builder per binder, sets its modifiers and
/// superclass, hands it to every holder in turn and finally calls
/// [`build`](TypeBuilder::build).
pub trait TypeBuilder {
    /// Append class modifiers.
    fn add_modifiers(&mut self, modifiers: &[Modifier]);

    /// Set the superclass.
    fn superclass(&mut self, superclass: &str);

    /// Append a member.
    fn add_member(&mut self, member: MemberSpec);

    /// Append a type annotation.
    fn add_annotation(&mut self, annotation: AnnotationSpec);

    /// Finish the type.
    fn build(self: Box<Self>) -> TypeSpec;
}

/// The default [`TypeBuilder`], accumulating a [`TypeSpec`] in memory.
#[derive(Debug, Clone)]
pub struct TypeSpecBuilder {
    spec: TypeSpec,
}

impl TypeSpecBuilder {
    /// Start a class with the given simple name.
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            spec: TypeSpec {
                name: name.into(),
                modifiers: Vec::new(),
                superclass: None,
                annotations: Vec::new(),
                members: Vec::new(),
            },
        }
    }
}

impl TypeBuilder for TypeSpecBuilder {
    fn add_modifiers(&mut self, modifiers: &[Modifier]) {
        self.spec.modifiers.extend_from_slice(modifiers);
    }

    fn superclass(&mut self, superclass: &str) {
        self.spec.superclass = Some(superclass.to_string());
    }

    fn add_member(&mut self, member: MemberSpec) {
        self.spec.members.push(member);
    }

    fn add_annotation(&mut self, annotation: AnnotationSpec) {
        self.spec.annotations.push(annotation);
    }

    fn build(self: Box<Self>) -> TypeSpec {
        self.spec
    }
}
