use serde::Deserialize;
use shiv_core::{BindingArgs, BoundField, FieldModifier, HostKind, HostType};

use crate::{Error, Result, validate::ParseContext};

/// A `[[host]]` table: one type to generate a binder for.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HostDecl {
    /// Fully qualified name, nested types joined with `.`
    pub name: String,

    /// Framework role of the host
    #[serde(default)]
    pub kind: HostKind,

    /// Enclosing package; derived from the name when omitted
    pub package: Option<String>,

    /// Bound fields, in declaration order
    #[serde(default, rename = "field")]
    pub fields: Vec<FieldDecl>,
}

impl HostDecl {
    /// The host type this declaration describes.
    pub fn host_type(&self) -> HostType {
        let host = match &self.package {
            Some(package) => HostType::new(self.name.clone(), package.clone()),
            None => HostType::from_qualified(self.name.clone()),
        };
        host.kind(self.kind)
    }

    /// `(marker, field)` pairs in declaration order.
    pub fn bindings(&self) -> impl Iterator<Item = (&str, BoundField)> {
        self.fields
            .iter()
            .map(|field| (field.bind.as_str(), field.to_field()))
    }

    pub(crate) fn validate(&self, ctx: &ParseContext<'_>, offset: usize) -> Result<()> {
        if let Some(package) = &self.package {
            let encloses = package.is_empty()
                || self
                    .name
                    .strip_prefix(package.as_str())
                    .is_some_and(|rest| rest.starts_with('.'));
            if !encloses {
                return Err(Error::validation(
                    format!("package '{}' does not enclose host '{}'", package, self.name),
                    ctx.src(),
                    ctx.filename(),
                    ctx.find_span(package, offset),
                ));
            }
        }

        let context = format!("field in '{}'", self.name);
        for field in &self.fields {
            ctx.validate_name(&field.name, &context, offset)?;
            if field.ty.trim().is_empty() {
                return Err(Error::validation(
                    format!("field '{}' in '{}' has an empty type", field.name, self.name),
                    ctx.src(),
                    ctx.filename(),
                    ctx.find_span(&field.name, offset),
                ));
            }
        }
        Ok(())
    }
}

/// A `[[host.field]]` table: one bound field.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDecl {
    pub name: String,

    /// Declared Java type, fully qualified
    #[serde(rename = "type")]
    pub ty: String,

    /// Binding marker, e.g. `BindView` or `me.oriley.shiv.BindView`
    pub bind: String,

    /// Resource id (views)
    pub id: Option<i64>,

    /// Lookup key (preferences, extras, services)
    pub key: Option<String>,

    #[serde(default)]
    pub optional: bool,

    #[serde(default)]
    pub modifiers: Vec<FieldModifier>,
}

impl FieldDecl {
    /// The bound field this declaration describes.
    pub fn to_field(&self) -> BoundField {
        BoundField {
            name: self.name.clone(),
            ty: self.ty.clone(),
            modifiers: self.modifiers.clone(),
            args: BindingArgs {
                id: self.id,
                key: self.key.clone(),
                optional: self.optional,
            },
        }
    }
}
