use serde::Deserialize;

/// Generation options shared by every binder in a run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodegenOptions {
    /// Package holding the runtime `Binder` base class and `ShivException`.
    pub runtime_package: String,
}

impl CodegenOptions {
    /// Fully qualified name of the binder base class.
    pub fn binder_class(&self) -> String {
        self.runtime_class("Binder")
    }

    /// Fully qualified name of the runtime exception type.
    pub fn exception_class(&self) -> String {
        self.runtime_class("ShivException")
    }

    fn runtime_class(&self, name: &str) -> String {
        if self.runtime_package.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.runtime_package, name)
        }
    }
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            runtime_package: "me.oriley.shiv".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_runtime_classes() {
        let options = CodegenOptions::default();
        assert_eq!(options.binder_class(), "me.oriley.shiv.Binder");
        assert_eq!(options.exception_class(), "me.oriley.shiv.ShivException");
    }

    #[test]
    fn test_empty_runtime_package() {
        let options = CodegenOptions {
            runtime_package: String::new(),
        };
        assert_eq!(options.binder_class(), "Binder");
    }
}
