use std::sync::Arc;

use shiv_core::{
    BindingKind, BoundField, CodegenOptions, HostKind, HostType, Result, boxed_type, is_generic,
};
use tracing::debug;

use super::{BindingHolder, HolderState, java_string};
use crate::{
    SuppressedWarnings,
    builder::{FieldSpec, Modifier, Statement, TypeBuilder},
};

const ALLOWED_HOSTS: [HostKind; 3] = [HostKind::Activity, HostKind::Fragment, HostKind::View];
const BUNDLE: &str = "android.os.Bundle";
const KEY_PREFIX_FIELD: &str = "INSTANCE_KEY_PREFIX";
const KEY_PREFIX: &str = "shiv:instance:";

/// Saves and restores fields through the instance state bundle.
#[derive(Debug)]
pub struct InstanceBindingHolder {
    state: HolderState,
}

impl InstanceBindingHolder {
    pub fn new(host: Arc<HostType>, options: Arc<CodegenOptions>) -> Self {
        Self {
            state: HolderState::new(BindingKind::Instance, host, options),
        }
    }
}

fn key_expr(field: &BoundField) -> String {
    format!("{} + {}", KEY_PREFIX_FIELD, java_string(&field.name))
}

impl BindingHolder for InstanceBindingHolder {
    fn kind(&self) -> BindingKind {
        BindingKind::Instance
    }

    fn add_element(&mut self, field: BoundField) -> Result<()> {
        self.state.check_field(&field)?;
        if is_generic(&field.ty) {
            self.state.warnings.insert("unchecked");
        }
        self.state.elements.push(field);
        Ok(())
    }

    fn suppressed_warnings(&self) -> &SuppressedWarnings {
        &self.state.warnings
    }

    fn elements(&self) -> &[BoundField] {
        &self.state.elements
    }

    fn add_bindings_to_class(&self, builder: &mut dyn TypeBuilder) -> Result<()> {
        if self.state.is_empty() {
            return Ok(());
        }
        self.state.require_host(&ALLOWED_HOSTS)?;

        let prefix = FieldSpec::new(KEY_PREFIX_FIELD, "java.lang.String")
            .modifiers([Modifier::Private, Modifier::Static, Modifier::Final])
            .initializer(java_string(KEY_PREFIX));
        let mut save = self
            .state
            .binding_method("saveInstance")
            .param("bundle", BUNDLE);
        let mut restore = self
            .state
            .binding_method("restoreInstance")
            .param("bundle", BUNDLE);

        for field in &self.state.elements {
            let key = key_expr(field);
            save = save.statement(Statement::expr(format!(
                "putInstance(bundle, {}, target.{})",
                key, field.name
            )));
            restore = restore.statement(Statement::if_(
                format!("bundle.containsKey({})", key),
                vec![Statement::expr(format!(
                    "target.{} = ({}) getInstance(bundle, {})",
                    field.name,
                    boxed_type(&field.ty),
                    key
                ))],
            ));
        }

        debug!(host = %self.state.host, fields = self.state.elements.len(), "emitting instance bindings");
        builder.add_member(prefix.into());
        builder.add_member(save.into());
        builder.add_member(restore.into());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::MemberSpec, testing::RecordingBuilder};

    fn holder(kind: HostKind) -> InstanceBindingHolder {
        let host = HostType::from_qualified("com.example.EditorFragment").kind(kind);
        InstanceBindingHolder::new(Arc::new(host), Arc::new(CodegenOptions::default()))
    }

    #[test]
    fn test_emits_prefix_then_save_and_restore() {
        let mut holder = holder(HostKind::Fragment);
        holder
            .add_element(BoundField::new("draft", "java.lang.String"))
            .unwrap();
        holder
            .add_element(BoundField::new("cursor", "int"))
            .unwrap();

        let mut builder = RecordingBuilder::new("EditorFragment$$Binder");
        holder.add_bindings_to_class(&mut builder).unwrap();

        assert_eq!(
            builder.log().member_names(),
            vec![KEY_PREFIX_FIELD, "saveInstance", "restoreInstance"]
        );
        let MemberSpec::Field(prefix) = &builder.log().members()[0] else {
            panic!("expected key prefix field");
        };
        assert_eq!(prefix.initializer.as_deref(), Some("\"shiv:instance:\""));

        let save = builder.log().method("saveInstance").unwrap();
        assert_eq!(save.params.len(), 2);
        assert_eq!(save.params[1].ty, BUNDLE);
        assert_eq!(
            save.body[1],
            Statement::expr("putInstance(bundle, INSTANCE_KEY_PREFIX + \"draft\", target.draft)")
        );

        let restore = builder.log().method("restoreInstance").unwrap();
        assert_eq!(
            restore.body[2],
            Statement::if_(
                "bundle.containsKey(INSTANCE_KEY_PREFIX + \"cursor\")",
                vec![Statement::expr(
                    "target.cursor = (java.lang.Integer) getInstance(bundle, INSTANCE_KEY_PREFIX + \"cursor\")"
                )],
            )
        );
    }

    #[test]
    fn test_generic_type_requires_unchecked() {
        let mut holder = holder(HostKind::Activity);
        holder
            .add_element(BoundField::new("history", "java.util.ArrayList<java.lang.Integer>"))
            .unwrap();
        assert!(holder.suppressed_warnings().contains("unchecked"));
    }

    #[test]
    fn test_other_host_is_unsupported() {
        let mut holder = holder(HostKind::Other);
        holder
            .add_element(BoundField::new("draft", "java.lang.String"))
            .unwrap();
        let mut builder = RecordingBuilder::new("EditorFragment$$Binder");
        assert!(holder.add_bindings_to_class(&mut builder).is_err());
    }
}
