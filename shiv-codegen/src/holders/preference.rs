use std::sync::Arc;

use shiv_core::{BindingKind, BoundField, CodegenOptions, HostType, Result, ValidationReason};
use tracing::debug;

use super::{BindingHolder, HolderState, java_string};
use crate::{
    SuppressedWarnings,
    builder::{Statement, TypeBuilder},
};

const STRING_SET: &str = "java.util.Set<java.lang.String>";

/// Getter and default argument for each storable preference type.
fn accessor(ty: &str) -> Option<(&'static str, &'static str)> {
    let accessor = match ty {
        "boolean" | "java.lang.Boolean" => ("getBoolean", "false"),
        "int" | "java.lang.Integer" => ("getInt", "0"),
        "long" | "java.lang.Long" => ("getLong", "0L"),
        "float" | "java.lang.Float" => ("getFloat", "0f"),
        "java.lang.String" => ("getString", "null"),
        STRING_SET => ("getStringSet", "null"),
        _ => return None,
    };
    Some(accessor)
}

/// Binds fields to values stored in shared preferences.
#[derive(Debug)]
pub struct PreferenceBindingHolder {
    state: HolderState,
}

impl PreferenceBindingHolder {
    pub fn new(host: Arc<HostType>, options: Arc<CodegenOptions>) -> Self {
        Self {
            state: HolderState::new(BindingKind::Preference, host, options),
        }
    }
}

impl BindingHolder for PreferenceBindingHolder {
    fn kind(&self) -> BindingKind {
        BindingKind::Preference
    }

    fn add_element(&mut self, field: BoundField) -> Result<()> {
        self.state.check_field(&field)?;
        if field.key_or_none().is_none() {
            return Err(self.state.reject(&field, ValidationReason::MissingKey));
        }
        if accessor(&field.ty).is_none() {
            let reason = ValidationReason::UnsupportedType(field.ty.clone());
            return Err(self.state.reject(&field, reason));
        }

        if field.ty == STRING_SET {
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

        let mut bind = self
            .state
            .binding_method("bindPreferences")
            .statement(Statement::expr(
                "android.content.SharedPreferences preferences = getPreferences(target)",
            ));

        for field in &self.state.elements {
            let Some((getter, default)) = accessor(&field.ty) else {
                continue;
            };
            let key = java_string(field.key_or_none().unwrap_or(&field.name));
            bind = bind.statement(Statement::if_(
                format!("preferences.contains({})", key),
                vec![Statement::expr(format!(
                    "target.{} = preferences.{}({}, {})",
                    field.name, getter, key, default
                ))],
            ));
        }

        debug!(host = %self.state.host, fields = self.state.elements.len(), "emitting preference bindings");
        builder.add_member(bind.into());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use shiv_core::HostKind;

    use super::*;
    use crate::testing::{RecordingBuilder, validation_reason};

    fn holder() -> PreferenceBindingHolder {
        // any host kind can read preferences
        let host = HostType::from_qualified("com.example.SettingsView").kind(HostKind::Other);
        PreferenceBindingHolder::new(Arc::new(host), Arc::new(CodegenOptions::default()))
    }

    #[test]
    fn test_requires_key() {
        let mut holder = holder();
        let err = holder
            .add_element(BoundField::new("enabled", "boolean"))
            .unwrap_err();
        assert_eq!(validation_reason(err), ValidationReason::MissingKey);
    }

    #[test]
    fn test_rejects_unsupported_type() {
        let mut holder = holder();
        let err = holder
            .add_element(BoundField::new("ratio", "double").key("ratio"))
            .unwrap_err();
        assert_eq!(
            validation_reason(err),
            ValidationReason::UnsupportedType("double".into())
        );
    }

    #[test]
    fn test_string_set_requires_unchecked() {
        let mut holder = holder();
        holder
            .add_element(BoundField::new("name", "java.lang.String").key("name"))
            .unwrap();
        assert!(holder.suppressed_warnings().is_empty());

        holder
            .add_element(BoundField::new("tags", STRING_SET).key("tags"))
            .unwrap();
        assert!(holder.suppressed_warnings().contains("unchecked"));
    }

    #[test]
    fn test_emits_guarded_reads() {
        let mut holder = holder();
        holder
            .add_element(BoundField::new("enabled", "boolean").key("pref_enabled"))
            .unwrap();
        holder
            .add_element(BoundField::new("limit", "java.lang.Long").key("pref_limit"))
            .unwrap();

        let mut builder = RecordingBuilder::new("SettingsView$$Binder");
        holder.add_bindings_to_class(&mut builder).unwrap();

        assert_eq!(builder.log().member_names(), vec!["bindPreferences"]);
        let bind = builder.log().method("bindPreferences").unwrap();
        assert_eq!(bind.body.len(), 4);
        assert_eq!(
            bind.body[2],
            Statement::if_(
                "preferences.contains(\"pref_enabled\")",
                vec![Statement::expr(
                    "target.enabled = preferences.getBoolean(\"pref_enabled\", false)"
                )],
            )
        );
        assert_eq!(
            bind.body[3],
            Statement::if_(
                "preferences.contains(\"pref_limit\")",
                vec![Statement::expr(
                    "target.limit = preferences.getLong(\"pref_limit\", 0L)"
                )],
            )
        );
    }
}
