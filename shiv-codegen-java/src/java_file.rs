use std::path::{Path, PathBuf};

use shiv_codegen::builder::{CodeBuilder, Indent, TypeSpec};
use shiv_core::{FileRules, GeneratedFile, Overwrite};

use crate::Java;

/// First line of every generated binder.
pub const HEADER: &str = "// Generated by Shiv. Do not modify!";

/// A generated `.java` compilation unit holding one binder.
#[derive(Debug, Clone)]
pub struct JavaFile {
    pub package: String,
    pub type_spec: TypeSpec,
    pub indent: Indent,
}

impl JavaFile {
    pub fn new(package: impl Into<String>, type_spec: TypeSpec) -> Self {
        Self {
            package: package.into(),
            type_spec,
            indent: Indent::JAVA,
        }
    }

    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Path relative to the source root, e.g. `com/example/Foo$$Binder.java`.
    pub fn relative_path(&self) -> PathBuf {
        let mut path: PathBuf = self
            .package
            .split('.')
            .filter(|segment| !segment.is_empty())
            .collect();
        path.push(format!("{}.java", self.type_spec.name));
        path
    }
}

impl GeneratedFile for JavaFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.relative_path())
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: Overwrite::Always,
            header: Some(HEADER),
        }
    }

    fn render(&self) -> String {
        let mut builder = CodeBuilder::new(self.indent);
        if let Some(header) = self.rules().header {
            builder.push_line(header).push_blank();
        }
        if !self.package.is_empty() {
            builder
                .push_line(&format!("package {};", self.package))
                .push_blank();
        }
        builder.emit(&Java(&self.type_spec));
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use shiv_codegen::builder::Modifier;
    use shiv_core::WriteResult;
    use tempfile::TempDir;

    use super::*;

    fn empty_binder(name: &str) -> TypeSpec {
        TypeSpec {
            name: name.into(),
            modifiers: vec![Modifier::Public, Modifier::Final],
            superclass: Some("me.oriley.shiv.Binder".into()),
            annotations: Vec::new(),
            members: Vec::new(),
        }
    }

    #[test]
    fn test_render_empty_binder() {
        let file = JavaFile::new("com.example", empty_binder("Foo$$Binder"));
        assert_eq!(
            file.render(),
            "// Generated by Shiv. Do not modify!\n\npackage com.example;\n\npublic final class Foo$$Binder extends me.oriley.shiv.Binder {\n}\n"
        );
    }

    #[test]
    fn test_default_package_has_no_package_line() {
        let file = JavaFile::new("", empty_binder("Foo$$Binder"));
        assert!(!file.render().contains("package"));
        assert_eq!(file.relative_path(), PathBuf::from("Foo$$Binder.java"));
    }

    #[test]
    fn test_path_follows_package() {
        let file = JavaFile::new("com.example.ui", empty_binder("Outer$Inner$$Binder"));
        assert_eq!(
            file.path(Path::new("out")),
            Path::new("out")
                .join("com")
                .join("example")
                .join("ui")
                .join("Outer$Inner$$Binder.java")
        );
    }

    #[test]
    fn test_write_overwrites() {
        let temp = TempDir::new().unwrap();
        let file = JavaFile::new("com.example", empty_binder("Foo$$Binder"));
        let path = file.path(temp.path());
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "stale").unwrap();

        assert_eq!(file.write(temp.path()).unwrap(), WriteResult::Written);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), file.render());
    }
}
