//! Code generation context.

use shiv_core::{CodegenOptions, HostType};

use crate::builder::{TypeBuilder, TypeSpecBuilder};

/// Naming and builder services the manager relies on.
///
/// Implementations must be deterministic: the same host always yields the
/// same names.
pub trait CodegenContext {
    /// Generation options for this run.
    fn options(&self) -> &CodegenOptions;

    /// Package the binder for `host` is generated into.
    fn package_name(&self, host: &HostType) -> String;

    /// Binary class name of `host` relative to `package`.
    fn class_name(&self, host: &HostType, package: &str) -> String;

    /// Open a builder for a class with the given simple name.
    fn type_builder(&self, name: &str) -> Box<dyn TypeBuilder>;
}

/// Context placing each binder next to its host.
#[derive(Debug, Clone, Default)]
pub struct DefaultContext {
    options: CodegenOptions,
}

impl DefaultContext {
    pub fn new(options: CodegenOptions) -> Self {
        Self { options }
    }
}

impl CodegenContext for DefaultContext {
    fn options(&self) -> &CodegenOptions {
        &self.options
    }

    fn package_name(&self, host: &HostType) -> String {
        host.package.clone()
    }

    fn class_name(&self, host: &HostType, package: &str) -> String {
        if package == host.package {
            return host.binary_name();
        }
        HostType::new(host.qualified_name.clone(), package).binary_name()
    }

    fn type_builder(&self, name: &str) -> Box<dyn TypeBuilder> {
        Box::new(TypeSpecBuilder::class(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_class_name() {
        let ctx = DefaultContext::default();
        let host = HostType::from_qualified("com.example.Outer.Inner");
        let package = ctx.package_name(&host);
        assert_eq!(package, "com.example");
        assert_eq!(ctx.class_name(&host, &package), "Outer$Inner");
    }

    #[test]
    fn test_class_name_with_other_package() {
        let ctx = DefaultContext::default();
        let host = HostType::from_qualified("com.example.ui.Screen");
        assert_eq!(ctx.class_name(&host, "com.example"), "ui$Screen");
    }
}
