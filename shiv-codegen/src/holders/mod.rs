//! Per-category binding holders.
//!
//! Each holder owns the fields for one [`BindingKind`], validates them as
//! they are added and emits the binder methods for its category:
//! - [`ViewBindingHolder`] - `bindViews` / `unbindViews`
//! - [`PreferenceBindingHolder`] - `bindPreferences`
//! - [`ExtraBindingHolder`] - `bindExtras`
//! - [`InstanceBindingHolder`] - `saveInstance` / `restoreInstance`
//! - [`NonConfigurationInstanceBindingHolder`] - `saveNonConfigurationInstance` /
//!   `restoreNonConfigurationInstance`
//! - [`ServiceBindingHolder`] - `bindServices`

mod extra;
mod instance;
mod non_config;
mod preference;
mod service;
mod view;

use std::{fmt, sync::Arc};

pub use extra::ExtraBindingHolder;
pub use instance::InstanceBindingHolder;
pub use non_config::NonConfigurationInstanceBindingHolder;
pub use preference::PreferenceBindingHolder;
pub use service::ServiceBindingHolder;
use shiv_core::{
    BindingKind, BoundField, CodegenOptions, Error, FieldModifier, HostKind, HostType, Result,
    ValidationReason,
};
pub use view::ViewBindingHolder;

use crate::{
    SuppressedWarnings,
    builder::{AnnotationSpec, MethodSpec, Modifier, Statement, TypeBuilder},
};

/// A holder for one binding category.
pub trait BindingHolder: fmt::Debug + Send + Sync {
    /// The category this holder owns.
    fn kind(&self) -> BindingKind;

    /// Validate `field` and append it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the field cannot carry this binding.
    /// The holder is unchanged on error.
    fn add_element(&mut self, field: BoundField) -> Result<()>;

    /// Warning tokens the generated binder must suppress for this holder.
    fn suppressed_warnings(&self) -> &SuppressedWarnings;

    /// Accepted fields, in insertion order.
    fn elements(&self) -> &[BoundField];

    /// Emit this category's members into `builder`.
    ///
    /// Emits nothing if the holder is empty. Call at most once per builder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedHost`] if the host cannot carry this
    /// category.
    fn add_bindings_to_class(&self, builder: &mut dyn TypeBuilder) -> Result<()>;
}

/// Create the holder for `kind`.
pub fn new_holder(
    kind: BindingKind,
    host: Arc<HostType>,
    options: Arc<CodegenOptions>,
) -> Box<dyn BindingHolder> {
    match kind {
        BindingKind::View => Box::new(ViewBindingHolder::new(host, options)),
        BindingKind::Preference => Box::new(PreferenceBindingHolder::new(host, options)),
        BindingKind::Extra => Box::new(ExtraBindingHolder::new(host, options)),
        BindingKind::Instance => Box::new(InstanceBindingHolder::new(host, options)),
        BindingKind::NonConfigurationInstance => {
            Box::new(NonConfigurationInstanceBindingHolder::new(host, options))
        }
        BindingKind::Service => Box::new(ServiceBindingHolder::new(host, options)),
    }
}

/// State shared by every holder: the host, accepted fields and warnings.
#[derive(Debug)]
struct HolderState {
    kind: BindingKind,
    host: Arc<HostType>,
    options: Arc<CodegenOptions>,
    elements: Vec<BoundField>,
    warnings: SuppressedWarnings,
}

impl HolderState {
    fn new(kind: BindingKind, host: Arc<HostType>, options: Arc<CodegenOptions>) -> Self {
        Self {
            kind,
            host,
            options,
            elements: Vec::new(),
            warnings: SuppressedWarnings::new(),
        }
    }

    /// Rules every category shares: the binder assigns the field directly,
    /// and a field is bound at most once per category.
    fn check_field(&self, field: &BoundField) -> Result<()> {
        if field.has_modifier(FieldModifier::Private) {
            return Err(self.reject(field, ValidationReason::Private));
        }
        if field.has_modifier(FieldModifier::Static) {
            return Err(self.reject(field, ValidationReason::Static));
        }
        if field.has_modifier(FieldModifier::Final) {
            return Err(self.reject(field, ValidationReason::Final));
        }
        if self.elements.iter().any(|e| e.name == field.name) {
            return Err(self.reject(field, ValidationReason::Duplicate));
        }
        Ok(())
    }

    fn reject(&self, field: &BoundField, reason: ValidationReason) -> Box<Error> {
        Error::validation(self.kind, &self.host, field, reason)
    }

    fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn require_host(&self, allowed: &[HostKind]) -> Result<()> {
        if allowed.contains(&self.host.kind) {
            Ok(())
        } else {
            Err(Error::unsupported_host(self.kind, &self.host))
        }
    }

    /// A public `@Override` method taking `Object object`, starting with the
    /// cast to the host type.
    fn binding_method(&self, name: &str) -> MethodSpec {
        MethodSpec::new(name)
            .annotation(AnnotationSpec::override_())
            .modifier(Modifier::Public)
            .param("object", "java.lang.Object")
            .statement(Statement::expr(format!(
                "{0} target = ({0}) object",
                self.host.qualified_name
            )))
    }

    fn throw(&self, message: &str) -> Statement {
        Statement::expr(format!(
            "throw new {}({})",
            self.options.exception_class(),
            java_string(message)
        ))
    }
}

/// Quote `s` as a Java string literal.
fn java_string(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_holder_matches_kind() {
        let host = Arc::new(HostType::from_qualified("com.example.Foo"));
        let options = Arc::new(CodegenOptions::default());
        for kind in BindingKind::ALL {
            let holder = new_holder(kind, host.clone(), options.clone());
            assert_eq!(holder.kind(), kind);
            assert!(holder.elements().is_empty());
            assert!(holder.suppressed_warnings().is_empty());
        }
    }

    #[test]
    fn test_common_rules_apply_to_every_holder() {
        let host = Arc::new(HostType::from_qualified("com.example.Foo"));
        let options = Arc::new(CodegenOptions::default());
        for kind in BindingKind::ALL {
            let mut holder = new_holder(kind, host.clone(), options.clone());
            let field = BoundField::new("hidden", "android.view.View")
                .modifier(FieldModifier::Private)
                .id(1)
                .key("hidden");
            let err = holder.add_element(field).unwrap_err();
            assert!(matches!(
                *err,
                Error::Validation {
                    reason: ValidationReason::Private,
                    ..
                }
            ));
            assert!(holder.elements().is_empty());
        }
    }

    #[test]
    fn test_java_string_escapes() {
        assert_eq!(java_string("plain"), "\"plain\"");
        assert_eq!(java_string("a \"b\""), "\"a \\\"b\\\"\"");
        assert_eq!(java_string("c:\\d"), "\"c:\\\\d\"");
    }
}
