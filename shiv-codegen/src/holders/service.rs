use std::sync::Arc;

use shiv_core::{
    BindingKind, BoundField, CodegenOptions, HostKind, HostType, Result, ValidationReason,
    is_primitive,
};
use tracing::debug;

use super::{BindingHolder, HolderState, java_string};
use crate::{
    SuppressedWarnings,
    builder::{Statement, TypeBuilder},
};

const ALLOWED_HOSTS: [HostKind; 4] = [
    HostKind::Activity,
    HostKind::Fragment,
    HostKind::View,
    HostKind::Service,
];

/// The `android.content.Context` constant naming the system service of type `ty`.
fn service_constant(ty: &str) -> Option<&'static str> {
    let constant = match ty {
        "android.view.LayoutInflater" => "LAYOUT_INFLATER_SERVICE",
        "android.app.NotificationManager" => "NOTIFICATION_SERVICE",
        "android.app.AlarmManager" => "ALARM_SERVICE",
        "android.net.ConnectivityManager" => "CONNECTIVITY_SERVICE",
        "android.view.inputmethod.InputMethodManager" => "INPUT_METHOD_SERVICE",
        "android.os.Vibrator" => "VIBRATOR_SERVICE",
        "android.view.WindowManager" => "WINDOW_SERVICE",
        "android.content.ClipboardManager" => "CLIPBOARD_SERVICE",
        "android.media.AudioManager" => "AUDIO_SERVICE",
        "android.location.LocationManager" => "LOCATION_SERVICE",
        _ => return None,
    };
    Some(constant)
}

/// Binds fields to system services.
#[derive(Debug)]
pub struct ServiceBindingHolder {
    state: HolderState,
}

impl ServiceBindingHolder {
    pub fn new(host: Arc<HostType>, options: Arc<CodegenOptions>) -> Self {
        Self {
            state: HolderState::new(BindingKind::Service, host, options),
        }
    }

    /// Explicit keys are passed as string literals, known types as constants.
    fn service_name(field: &BoundField) -> Option<String> {
        match field.key_or_none() {
            Some(key) => Some(java_string(key)),
            None => service_constant(&field.ty)
                .map(|constant| format!("android.content.Context.{}", constant)),
        }
    }
}

impl BindingHolder for ServiceBindingHolder {
    fn kind(&self) -> BindingKind {
        BindingKind::Service
    }

    fn add_element(&mut self, field: BoundField) -> Result<()> {
        self.state.check_field(&field)?;
        if is_primitive(&field.ty) {
            let reason = ValidationReason::PrimitiveType(field.ty.clone());
            return Err(self.state.reject(&field, reason));
        }
        if Self::service_name(&field).is_none() {
            let reason = ValidationReason::UnknownService(field.ty.clone());
            return Err(self.state.reject(&field, reason));
        }

        if field.key_or_none().is_some() {
            self.state.warnings.insert("WrongConstant");
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

        let mut bind = self.state.binding_method("bindServices");
        for field in &self.state.elements {
            let Some(service) = Self::service_name(field) else {
                continue;
            };
            bind = bind.statement(Statement::expr(format!(
                "target.{} = ({}) getSystemService(target, {})",
                field.name, field.ty, service
            )));
        }

        debug!(host = %self.state.host, fields = self.state.elements.len(), "emitting service bindings");
        builder.add_member(bind.into());
        Ok(())
    }
}
