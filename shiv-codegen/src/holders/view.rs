use std::sync::Arc;

use shiv_core::{
    BindingKind, BoundField, CodegenOptions, HostKind, HostType, Result, ValidationReason,
    is_primitive,
};
use tracing::debug;

use super::{BindingHolder, HolderState};
use crate::{
    SuppressedWarnings,
    builder::{Statement, TypeBuilder},
};

const ALLOWED_HOSTS: [HostKind; 3] = [HostKind::Activity, HostKind::Fragment, HostKind::View];

/// Binds fields to views found by resource id.
#[derive(Debug)]
pub struct ViewBindingHolder {
    state: HolderState,
}

impl ViewBindingHolder {
    pub fn new(host: Arc<HostType>, options: Arc<CodegenOptions>) -> Self {
        Self {
            state: HolderState::new(BindingKind::View, host, options),
        }
    }

    /// The view hierarchy root expression for the host.
    fn root(&self) -> &'static str {
        match self.state.host.kind {
            HostKind::Fragment => "target.getView()",
            _ => "target",
        }
    }
}

impl BindingHolder for ViewBindingHolder {
    fn kind(&self) -> BindingKind {
        BindingKind::View
    }

    fn add_element(&mut self, field: BoundField) -> Result<()> {
        self.state.check_field(&field)?;
        match field.args.id {
            None => return Err(self.state.reject(&field, ValidationReason::MissingViewId)),
            // resource ids are Java ints
            Some(id) if id <= 0 || id > i64::from(i32::MAX) => {
                return Err(self.state.reject(&field, ValidationReason::InvalidViewId(id)));
            }
            Some(_) => {}
        }
        if is_primitive(&field.ty) {
            let reason = ValidationReason::PrimitiveType(field.ty.clone());
            return Err(self.state.reject(&field, reason));
        }

        self.state.warnings.insert("ResourceType");
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

        let root = self.root();
        let mut bind = self.state.binding_method("bindViews");
        let mut unbind = self.state.binding_method("unbindViews");

        for field in &self.state.elements {
            // ids were checked in add_element
            let id = field.args.id.unwrap_or_default();
            bind = bind.statement(Statement::expr(format!(
                "target.{} = ({}) {}.findViewById({})",
                field.name, field.ty, root, id
            )));
            if !field.args.optional {
                let message = format!("View with id {} for field {} not found", id, field.name);
                bind = bind.statement(Statement::if_(
                    format!("target.{} == null", field.name),
                    vec![self.state.throw(&message)],
                ));
            }
            unbind = unbind.statement(Statement::expr(format!("target.{} = null", field.name)));
        }

        debug!(host = %self.state.host, fields = self.state.elements.len(), "emitting view bindings");
        builder.add_member(bind.into());
        builder.add_member(unbind.into());
        Ok(())
    }
}
