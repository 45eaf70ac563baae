use std::sync::Arc;

use shiv_core::{BindingKind, BoundField, CodegenOptions, HostKind, HostType, Result, boxed_type};
use tracing::debug;

use super::{BindingHolder, HolderState, java_string};
use crate::{
    SuppressedWarnings,
    builder::{Statement, TypeBuilder},
};

/// Carries fields across configuration changes in a non-configuration
/// instance map.
#[derive(Debug)]
pub struct NonConfigurationInstanceBindingHolder {
    state: HolderState,
}

impl NonConfigurationInstanceBindingHolder {
    pub fn new(host: Arc<HostType>, options: Arc<CodegenOptions>) -> Self {
        Self {
            state: HolderState::new(BindingKind::NonConfigurationInstance, host, options),
        }
    }
}

impl BindingHolder for NonConfigurationInstanceBindingHolder {
    fn kind(&self) -> BindingKind {
        BindingKind::NonConfigurationInstance
    }

    fn add_element(&mut self, field: BoundField) -> Result<()> {
        self.state.check_field(&field)?;
        // restoring casts out of an untyped map
        self.state.warnings.insert("unchecked");
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
        self.state.require_host(&[HostKind::Activity])?;

        let mut save = self
            .state
            .binding_method("saveNonConfigurationInstance")
            .returns("java.lang.Object")
            .statement(Statement::expr(
                "java.util.HashMap<String, Object> instance = new java.util.HashMap<>()",
            ));
        let mut restore = self
            .state
            .binding_method("restoreNonConfigurationInstance")
            .param("instance", "java.lang.Object")
            .statement(Statement::expr(
                "java.util.Map<String, Object> map = (java.util.Map<String, Object>) instance",
            ));

        for field in &self.state.elements {
            let key = java_string(&field.name);
            save = save.statement(Statement::expr(format!(
                "instance.put({}, target.{})",
                key, field.name
            )));
            restore = restore.statement(Statement::if_(
                format!("map.containsKey({})", key),
                vec![Statement::expr(format!(
                    "target.{} = ({}) map.get({})",
                    field.name,
                    boxed_type(&field.ty),
                    key
                ))],
            ));
        }
        save = save.statement(Statement::return_("instance"));

        debug!(host = %self.state.host, fields = self.state.elements.len(), "emitting non-configuration instance bindings");
        builder.add_member(save.into());
        builder.add_member(restore.into());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use shiv_core::Error;

    use super::*;
    use crate::testing::RecordingBuilder;

    fn holder(kind: HostKind) -> NonConfigurationInstanceBindingHolder {
        let host = HostType::from_qualified("com.example.PlayerActivity").kind(kind);
        NonConfigurationInstanceBindingHolder::new(
            Arc::new(host),
            Arc::new(CodegenOptions::default()),
        )
    }

    #[test]
    fn test_always_requires_unchecked() {
        let mut holder = holder(HostKind::Activity);
        assert!(holder.suppressed_warnings().is_empty());
        holder
            .add_element(BoundField::new("player", "com.example.Player"))
            .unwrap();
        assert!(holder.suppressed_warnings().contains("unchecked"));
    }

    #[test]
    fn test_save_returns_instance_map() {
        let mut holder = holder(HostKind::Activity);
        holder
            .add_element(BoundField::new("player", "com.example.Player"))
            .unwrap();

        let mut builder = RecordingBuilder::new("PlayerActivity$$Binder");
        holder.add_bindings_to_class(&mut builder).unwrap();

        let save = builder.log().method("saveNonConfigurationInstance").unwrap();
        assert_eq!(save.returns.as_deref(), Some("java.lang.Object"));
        assert_eq!(
            save.body.last(),
            Some(&Statement::return_("instance"))
        );
        assert_eq!(
            save.body[2],
            Statement::expr("instance.put(\"player\", target.player)")
        );

        let restore = builder
            .log()
            .method("restoreNonConfigurationInstance")
            .unwrap();
        assert_eq!(restore.params.len(), 2);
        assert_eq!(
            restore.body[2],
            Statement::if_(
                "map.containsKey(\"player\")",
                vec![Statement::expr(
                    "target.player = (com.example.Player) map.get(\"player\")"
                )],
            )
        );
    }

    #[test]
    fn test_fragment_host_is_unsupported() {
        let mut holder = holder(HostKind::Fragment);
        holder
            .add_element(BoundField::new("player", "com.example.Player"))
            .unwrap();
        let mut builder = RecordingBuilder::new("PlayerActivity$$Binder");
        let err = holder.add_bindings_to_class(&mut builder).unwrap_err();
        assert!(matches!(*err, Error::UnsupportedHost { .. }));
    }
}
