use std::sync::Arc;

use shiv_core::{
    BindingKind, BoundField, CodegenOptions, HostKind, HostType, Result, boxed_type, is_generic,
};
use tracing::debug;

use super::{BindingHolder, HolderState, java_string};
use crate::{
    SuppressedWarnings,
    builder::{Statement, TypeBuilder},
};

const ALLOWED_HOSTS: [HostKind; 2] = [HostKind::Activity, HostKind::Fragment];

/// Binds fields to intent extras (activities) or arguments (fragments).
#[derive(Debug)]
pub struct ExtraBindingHolder {
    state: HolderState,
}

impl ExtraBindingHolder {
    pub fn new(host: Arc<HostType>, options: Arc<CodegenOptions>) -> Self {
        Self {
            state: HolderState::new(BindingKind::Extra, host, options),
        }
    }
}

impl BindingHolder for ExtraBindingHolder {
    fn kind(&self) -> BindingKind {
        BindingKind::Extra
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

        let mut bind = self.state.binding_method("bindExtras");
        for field in &self.state.elements {
            let raw_key = field.key_or_none().unwrap_or(&field.name);
            let key = java_string(raw_key);
            let condition = format!("hasExtra(target, {})", key);
            let assign = vec![Statement::expr(format!(
                "target.{} = ({}) getExtra(target, {})",
                field.name,
                boxed_type(&field.ty),
                key
            ))];

            bind = bind.statement(if field.args.optional {
                Statement::if_(condition, assign)
            } else {
                let message = format!("Required extra '{}' for field {} not found", raw_key, field.name);
                Statement::if_else(condition, assign, vec![self.state.throw(&message)])
            });
        }

        debug!(host = %self.state.host, fields = self.state.elements.len(), "emitting extra bindings");
        builder.add_member(bind.into());
        Ok(())
    }
}
