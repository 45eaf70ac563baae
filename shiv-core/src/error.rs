use miette::Diagnostic;
use thiserror::Error;

use crate::{BindingKind, BoundField, HostKind, HostType};

/// Result type for binder planning (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("unknown binding marker '{marker}'")]
    #[diagnostic(
        code(shiv::unknown_category),
        help(
            "valid markers are: BindView, BindPreference, BindExtra, BindInstance, BindNonConfigurationInstance, BindService"
        )
    )]
    UnknownCategory { marker: String },

    #[error("invalid {kind} binding '{field}' in {host}: {reason}")]
    #[diagnostic(code(shiv::validation))]
    Validation {
        kind: BindingKind,
        host: String,
        field: String,
        reason: ValidationReason,
    },

    #[error("{kind} bindings are not supported in {host_kind} host {host}")]
    #[diagnostic(
        code(shiv::unsupported_host),
        help("move the binding to a host type that supports {kind} bindings")
    )]
    UnsupportedHost {
        kind: BindingKind,
        host: String,
        host_kind: HostKind,
    },
}

impl Error {
    /// Create an unknown category error for the given marker.
    pub fn unknown_category(marker: impl Into<String>) -> Box<Self> {
        Box::new(Error::UnknownCategory {
            marker: marker.into(),
        })
    }

    /// Create a validation error for a field rejected by a holder.
    pub fn validation(
        kind: BindingKind,
        host: &HostType,
        field: &BoundField,
        reason: ValidationReason,
    ) -> Box<Self> {
        Box::new(Error::Validation {
            kind,
            host: host.qualified_name.clone(),
            field: field.name.clone(),
            reason,
        })
    }

    /// Create an unsupported host error.
    pub fn unsupported_host(kind: BindingKind, host: &HostType) -> Box<Self> {
        Box::new(Error::UnsupportedHost {
            kind,
            host: host.qualified_name.clone(),
            host_kind: host.kind,
        })
    }
}

/// Why a holder rejected a field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationReason {
    #[error("field must not be private")]
    Private,
    #[error("field must not be static")]
    Static,
    #[error("field must not be final")]
    Final,
    #[error("field is already bound")]
    Duplicate,
    #[error("missing view id")]
    MissingViewId,
    #[error("view id {0} is not a valid resource id")]
    InvalidViewId(i64),
    #[error("missing key")]
    MissingKey,
    #[error("type '{0}' is not supported")]
    UnsupportedType(String),
    #[error("primitive type '{0}' cannot be bound")]
    PrimitiveType(String),
    #[error("no system service is known for type '{0}'; set an explicit key")]
    UnknownService(String),
}
