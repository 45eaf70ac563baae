//! Core utilities and types for the Shiv binder generator.
//!
//! This crate provides the vocabulary shared by every other crate in the
//! workspace: host declarations, binding markers, bound fields and the
//! error taxonomy reported while planning a binder.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod codegen;
mod error;
mod field;
mod file;
mod host;
mod kind;
mod options;

// Generation traits
pub use codegen::{GenerateResult, HostFailure, LanguageCodegen, PreviewFile};
// Errors
pub use error::{Error, Result, ValidationReason};
// Binding inputs
pub use field::{BindingArgs, BoundField, FieldModifier, boxed_type, is_generic, is_primitive};
// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult};
pub use host::{HostKind, HostType};
pub use kind::BindingKind;
pub use options::CodegenOptions;
