//! Test utilities for binder generation.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests. It provides a [`TypeBuilder`] that records every call
//! so dispatch and assembly can be checked without rendering source.

use std::{cell::RefCell, rc::Rc};

use shiv_core::{CodegenOptions, Error, HostType, ValidationReason};

use crate::{
    builder::{AnnotationSpec, MemberSpec, MethodSpec, Modifier, TypeBuilder, TypeSpec, TypeSpecBuilder},
    context::{CodegenContext, DefaultContext},
};

/// A call made against a [`RecordingBuilder`].
#[derive(Debug, Clone, PartialEq)]
pub enum BuilderCall {
    Open(String),
    AddModifiers(Vec<Modifier>),
    Superclass(String),
    AddMember(MemberSpec),
    AddAnnotation(AnnotationSpec),
    Build,
}

/// Shared log of builder calls.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Rc<RefCell<Vec<BuilderCall>>>);

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, call: BuilderCall) {
        self.0.borrow_mut().push(call);
    }

    /// All calls, in order.
    pub fn calls(&self) -> Vec<BuilderCall> {
        self.0.borrow().clone()
    }

    /// Members added so far, in order.
    pub fn members(&self) -> Vec<MemberSpec> {
        self.0
            .borrow()
            .iter()
            .filter_map(|call| match call {
                BuilderCall::AddMember(member) => Some(member.clone()),
                _ => None,
            })
            .collect()
    }

    /// Names of the members added so far, in order.
    pub fn member_names(&self) -> Vec<String> {
        self.members()
            .iter()
            .map(|member| member.name().to_string())
            .collect()
    }

    /// The first method added with the given name.
    pub fn method(&self, name: &str) -> Option<MethodSpec> {
        self.members().into_iter().find_map(|member| match member {
            MemberSpec::Method(method) if method.name == name => Some(method),
            _ => None,
        })
    }

    /// Annotations added so far, in order.
    pub fn annotations(&self) -> Vec<AnnotationSpec> {
        self.0
            .borrow()
            .iter()
            .filter_map(|call| match call {
                BuilderCall::AddAnnotation(annotation) => Some(annotation.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

/// A [`TypeBuilder`] that logs every call and still produces a [`TypeSpec`].
#[derive(Debug)]
pub struct RecordingBuilder {
    inner: TypeSpecBuilder,
    log: CallLog,
}

impl RecordingBuilder {
    /// Create a builder with its own log.
    ///
    /// Opening is not recorded; use [`RecordingContext`] to see it.
    pub fn new(name: &str) -> Self {
        Self::with_log(name, CallLog::new())
    }

    /// Create a builder writing into an existing log.
    pub fn with_log(name: &str, log: CallLog) -> Self {
        Self {
            inner: TypeSpecBuilder::class(name),
            log,
        }
    }

    pub fn log(&self) -> &CallLog {
        &self.log
    }
}

impl TypeBuilder for RecordingBuilder {
    fn add_modifiers(&mut self, modifiers: &[Modifier]) {
        self.log.push(BuilderCall::AddModifiers(modifiers.to_vec()));
        self.inner.add_modifiers(modifiers);
    }

    fn superclass(&mut self, superclass: &str) {
        self.log.push(BuilderCall::Superclass(superclass.to_string()));
        self.inner.superclass(superclass);
    }

    fn add_member(&mut self, member: MemberSpec) {
        self.log.push(BuilderCall::AddMember(member.clone()));
        self.inner.add_member(member);
    }

    fn add_annotation(&mut self, annotation: AnnotationSpec) {
        self.log.push(BuilderCall::AddAnnotation(annotation.clone()));
        self.inner.add_annotation(annotation);
    }

    fn build(self: Box<Self>) -> TypeSpec {
        self.log.push(BuilderCall::Build);
        Box::new(self.inner).build()
    }
}

/// A [`CodegenContext`] whose builders record into one shared log.
#[derive(Debug, Default)]
pub struct RecordingContext {
    inner: DefaultContext,
    log: CallLog,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> &CallLog {
        &self.log
    }
}

impl CodegenContext for RecordingContext {
    fn options(&self) -> &CodegenOptions {
        self.inner.options()
    }

    fn package_name(&self, host: &HostType) -> String {
        self.inner.package_name(host)
    }

    fn class_name(&self, host: &HostType, package: &str) -> String {
        self.inner.class_name(host, package)
    }

    fn type_builder(&self, name: &str) -> Box<dyn TypeBuilder> {
        self.log.push(BuilderCall::Open(name.to_string()));
        Box::new(RecordingBuilder::with_log(name, self.log.clone()))
    }
}

/// Unwrap the reason of a validation error.
///
/// # Panics
///
/// Panics if `err` is not [`Error::Validation`].
pub fn validation_reason(err: Box<Error>) -> ValidationReason {
    match *err {
        Error::Validation { reason, .. } => reason,
        other => panic!("expected validation error, got {other:?}"),
    }
}
