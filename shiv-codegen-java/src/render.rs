//! Java source rendering for binder specs.
//!
//! [`Java`] wraps a spec from `shiv_codegen::builder` and renders it as
//! [`CodeFragment`]s, so a whole class can be emitted through a
//! [`CodeBuilder`](shiv_codegen::builder::CodeBuilder).

use shiv_codegen::builder::{
    AnnotationSpec, CodeFragment, FieldSpec, MemberSpec, MethodSpec, Modifier, Renderable,
    Statement, TypeSpec,
};

/// Renders the wrapped spec as Java source.
#[derive(Debug, Clone, Copy)]
pub struct Java<'a, T>(pub &'a T);

/// Types in `java.lang` are written by simple name.
fn simple_java_lang(name: &str) -> &str {
    match name.strip_prefix("java.lang.") {
        Some(simple) if !simple.contains('.') => simple,
        _ => name,
    }
}

/// Modifiers followed by a trailing space, or nothing.
fn modifier_prefix(modifiers: &[Modifier]) -> String {
    modifiers.iter().map(|m| format!("{} ", m)).collect()
}

impl Renderable for Java<'_, AnnotationSpec> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let name = simple_java_lang(&self.0.name);
        let line = if self.0.members.is_empty() {
            format!("@{}", name)
        } else {
            let members = self
                .0
                .members
                .iter()
                .map(|(key, value)| format!("{} = {}", key, value))
                .collect::<Vec<_>>()
                .join(", ");
            format!("@{}({})", name, members)
        };
        vec![CodeFragment::Line(line)]
    }
}

impl Renderable for Java<'_, Statement> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self.0 {
            Statement::Expr(code) => vec![CodeFragment::line(format!("{};", code))],
            Statement::Return(code) => vec![CodeFragment::line(format!("return {};", code))],
            Statement::If {
                condition,
                then_branch,
                else_branch,
            } => {
                let header = format!("if ({}) {{", condition);
                let then_body = statements(then_branch);
                match else_branch {
                    None => vec![CodeFragment::block(header, then_body, Some("}".into()))],
                    Some(else_branch) => vec![
                        CodeFragment::block(header, then_body, None),
                        CodeFragment::block(
                            "} else {",
                            statements(else_branch),
                            Some("}".into()),
                        ),
                    ],
                }
            }
        }
    }
}

fn statements(body: &[Statement]) -> Vec<CodeFragment> {
    body.iter().flat_map(|stmt| Java(stmt).to_fragments()).collect()
}

impl Renderable for Java<'_, FieldSpec> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let field = self.0;
        let declaration = format!(
            "{}{} {}",
            modifier_prefix(&field.modifiers),
            simple_java_lang(&field.ty),
            field.name
        );
        let line = match &field.initializer {
            Some(init) => format!("{} = {};", declaration, init),
            None => format!("{};", declaration),
        };
        vec![CodeFragment::Line(line)]
    }
}

impl Renderable for Java<'_, MethodSpec> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let method = self.0;
        let mut fragments = Vec::new();

        if let Some(doc) = &method.doc {
            fragments.push(CodeFragment::javadoc(doc.clone()));
        }
        for annotation in &method.annotations {
            fragments.extend(Java(annotation).to_fragments());
        }

        let params = method
            .params
            .iter()
            .map(|p| format!("{} {}", simple_java_lang(&p.ty), p.name))
            .collect::<Vec<_>>()
            .join(", ");
        let returns = method
            .returns
            .as_deref()
            .map(simple_java_lang)
            .unwrap_or("void");
        let header = format!(
            "{}{} {}({}) {{",
            modifier_prefix(&method.modifiers),
            returns,
            method.name,
            params
        );

        fragments.push(CodeFragment::block(
            header,
            statements(&method.body),
            Some("}".into()),
        ));
        fragments
    }
}

impl Renderable for Java<'_, MemberSpec> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self.0 {
            MemberSpec::Field(field) => Java(field).to_fragments(),
            MemberSpec::Method(method) => Java(method).to_fragments(),
        }
    }
}

impl Renderable for Java<'_, TypeSpec> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let spec = self.0;
        let mut fragments = Vec::new();

        for annotation in &spec.annotations {
            fragments.extend(Java(annotation).to_fragments());
        }

        let mut header = format!("{}class {}", modifier_prefix(&spec.modifiers), spec.name);
        if let Some(superclass) = &spec.superclass {
            header.push_str(" extends ");
            header.push_str(superclass);
        }
        header.push_str(" {");

        let mut body = Vec::new();
        for (i, member) in spec.members.iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::blank());
            }
            body.extend(Java(member).to_fragments());
        }

        fragments.push(CodeFragment::block(header, body, Some("}".into())));
        fragments
    }
}
