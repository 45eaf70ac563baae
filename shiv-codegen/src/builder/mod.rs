//! Code generation building blocks.
//!
//! - [`TypeSpec`] and friends - Declarative description of a generated type
//! - [`TypeBuilder`] - The builder holders emit members into
//! - [`CodeBuilder`] - Fluent API for building indented code
//! - [`CodeFragment`] / [`Renderable`] - Intermediate representation for code pieces
//! - [`Indent`] - Indentation configuration

mod code_builder;
mod indent;
mod renderable;
mod spec;
mod type_builder;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
pub use spec::{
    AnnotationSpec, FieldSpec, MemberSpec, MethodSpec, Modifier, ParamSpec, Statement, TypeSpec,
};
pub use type_builder::{TypeBuilder, TypeSpecBuilder};
