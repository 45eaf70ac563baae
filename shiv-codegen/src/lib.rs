//! Binding dispatch and binder assembly for the Shiv generator.
//!
//! This crate turns the bound fields of one host class into a
//! language-neutral [`TypeSpec`](builder::TypeSpec) describing the host's
//! binder. Rendering that type into source is left to language crates
//! (e.g., `shiv-codegen-java`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, TypeSpec, TypeBuilder, etc.)
//! - [`context`] - Naming and builder services (CodegenContext, DefaultContext)
//! - [`holders`] - Per-category binding holders
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
pub mod context;
pub mod holders;
mod manager;
mod warnings;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use context::{CodegenContext, DefaultContext};
pub use manager::{BINDER_SUFFIX, BindingManager, process_host};
pub use warnings::{SUPPRESS_WARNINGS, SuppressedWarnings};
