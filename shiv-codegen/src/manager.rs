//! Per-host binding dispatch and binder assembly.

use std::sync::Arc;

use shiv_core::{BindingKind, BoundField, HostType, Result};
use tracing::{debug, instrument};

use crate::{
    SuppressedWarnings,
    builder::{Modifier, TypeSpec},
    context::CodegenContext,
    holders::{BindingHolder, new_holder},
};

/// Suffix appended to the host's binary name to name its binder.
pub const BINDER_SUFFIX: &str = "$$Binder";

/// Collects the bindings of one host and assembles its binder.
///
/// A manager owns exactly one holder per [`BindingKind`], created up front
/// in [`BindingKind::ALL`] order. That order is the emission order of the
/// binder's members.
///
/// # Example
///
/// ```
/// use shiv_codegen::{BindingManager, DefaultContext};
/// use shiv_core::{BoundField, HostKind, HostType};
///
/// let ctx = DefaultContext::default();
/// let host = HostType::from_qualified("com.example.MainActivity").kind(HostKind::Activity);
///
/// let mut manager = BindingManager::new(&ctx, host);
/// manager
///     .add_binding("BindView", BoundField::new("title", "android.widget.TextView").id(7))
///     .unwrap();
///
/// let binder = manager.create_binder(&ctx).unwrap();
/// assert_eq!(binder.name, "MainActivity$$Binder");
/// ```
#[derive(Debug)]
pub struct BindingManager {
    host: Arc<HostType>,
    holders: [Box<dyn BindingHolder>; 6],
}

impl BindingManager {
    /// Create a manager for `host` with one empty holder per category.
    pub fn new(ctx: &dyn CodegenContext, host: HostType) -> Self {
        let host = Arc::new(host);
        let options = Arc::new(ctx.options().clone());
        let holders =
            BindingKind::ALL.map(|kind| new_holder(kind, Arc::clone(&host), Arc::clone(&options)));
        Self { host, holders }
    }

    pub fn host(&self) -> &HostType {
        &self.host
    }

    /// The holder for `kind`.
    pub fn holder(&self, kind: BindingKind) -> &dyn BindingHolder {
        self.holders[kind.index()].as_ref()
    }

    /// All holders, in emission order.
    pub fn holders(&self) -> impl Iterator<Item = &dyn BindingHolder> {
        self.holders.iter().map(|holder| holder.as_ref())
    }

    /// Add a field selected by the marker named `marker`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCategory`](shiv_core::Error::UnknownCategory)
    /// if `marker` is not a binding marker; no holder is touched in that
    /// case. Validation errors from the holder are returned unchanged.
    pub fn add_binding(&mut self, marker: &str, field: BoundField) -> Result<()> {
        let kind: BindingKind = marker.parse()?;
        self.add(kind, field)
    }

    /// Add a field to the holder for `kind`.
    pub fn add(&mut self, kind: BindingKind, field: BoundField) -> Result<()> {
        debug!(host = %self.host, %kind, field = %field.name, "adding binding");
        self.holders[kind.index()].add_element(field)
    }

    /// Assemble the binder from the bindings added so far.
    ///
    /// Each call derives a fresh [`TypeSpec`] from the current state; nothing
    /// is cached.
    ///
    /// # Errors
    ///
    /// Returns the first emission error raised by a holder.
    #[instrument(skip_all, fields(host = %self.host))]
    pub fn create_binder(&self, ctx: &dyn CodegenContext) -> Result<TypeSpec> {
        let package = ctx.package_name(&self.host);
        let class_name = ctx.class_name(&self.host, &package);

        let mut builder = ctx.type_builder(&format!("{}{}", class_name, BINDER_SUFFIX));
        builder.add_modifiers(&[Modifier::Public, Modifier::Final]);
        builder.superclass(&ctx.options().binder_class());

        let mut warnings = SuppressedWarnings::new();
        for holder in &self.holders {
            warnings.merge(holder.suppressed_warnings());
            holder.add_bindings_to_class(builder.as_mut())?;
        }

        if let Some(annotation) = warnings.to_annotation() {
            builder.add_annotation(annotation);
        }

        let binder = builder.build();
        debug!(binder = %binder.name, members = binder.members.len(), "created binder");
        Ok(binder)
    }
}

/// Run one host through a fresh manager.
///
/// Bindings are `(marker, field)` pairs, added in iteration order. The
/// first error aborts this host.
pub fn process_host<I, M>(ctx: &dyn CodegenContext, host: HostType, bindings: I) -> Result<TypeSpec>
where
    I: IntoIterator<Item = (M, BoundField)>,
    M: AsRef<str>,
{
    let mut manager = BindingManager::new(ctx, host);
    for (marker, field) in bindings {
        manager.add_binding(marker.as_ref(), field)?;
    }
    manager.create_binder(ctx)
}

#[cfg(test)]
mod tests {
    use shiv_core::{Error, HostKind};

    use super::*;
    use crate::{
        builder::AnnotationSpec,
        context::DefaultContext,
        testing::{BuilderCall, RecordingContext},
        warnings::SUPPRESS_WARNINGS,
    };

    fn activity(name: &str) -> HostType {
        HostType::from_qualified(name).kind(HostKind::Activity)
    }

    fn view(name: &str, id: i64) -> BoundField {
        BoundField::new(name, "android.view.View").id(id)
    }

    #[test]
    fn test_holders_follow_kind_order() {
        let ctx = DefaultContext::default();
        let manager = BindingManager::new(&ctx, activity("com.example.Foo"));
        let kinds: Vec<_> = manager.holders().map(|h| h.kind()).collect();
        assert_eq!(kinds, BindingKind::ALL.to_vec());
    }

    #[test]
    fn test_each_field_lands_in_its_kind_only() {
        let ctx = DefaultContext::default();
        let mut manager = BindingManager::new(&ctx, activity("com.example.Foo"));
        manager.add(BindingKind::View, view("title", 1)).unwrap();
        manager
            .add_binding("BindExtra", BoundField::new("id", "long"))
            .unwrap();
        manager
            .add_binding(
                "me.oriley.shiv.BindService",
                BoundField::new("inflater", "android.view.LayoutInflater"),
            )
            .unwrap();

        for holder in manager.holders() {
            let names: Vec<_> = holder.elements().iter().map(|f| f.name.as_str()).collect();
            let expected: &[&str] = match holder.kind() {
                BindingKind::View => &["title"],
                BindingKind::Extra => &["id"],
                BindingKind::Service => &["inflater"],
                _ => &[],
            };
            assert_eq!(names, expected, "{}", holder.kind());
        }
    }

    #[test]
    fn test_unknown_marker_leaves_state_unchanged() {
        let ctx = DefaultContext::default();
        let mut manager = BindingManager::new(&ctx, activity("com.example.Foo"));
        manager.add(BindingKind::View, view("title", 1)).unwrap();

        let err = manager
            .add_binding("BindEverything", view("other", 2))
            .unwrap_err();

        assert!(matches!(*err, Error::UnknownCategory { ref marker } if marker == "BindEverything"));
        let total: usize = manager.holders().map(|h| h.elements().len()).sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn test_empty_manager_builds_trivial_binder() {
        let ctx = RecordingContext::new();
        let manager = BindingManager::new(&ctx, activity("com.example.Foo"));

        let binder = manager.create_binder(&ctx).unwrap();

        assert_eq!(binder.name, "Foo$$Binder");
        assert_eq!(binder.modifiers, vec![Modifier::Public, Modifier::Final]);
        assert_eq!(binder.superclass.as_deref(), Some("me.oriley.shiv.Binder"));
        assert!(binder.members.is_empty());
        assert!(binder.annotations.is_empty());
        assert_eq!(
            ctx.log().calls(),
            vec![
                BuilderCall::Open("Foo$$Binder".into()),
                BuilderCall::AddModifiers(vec![Modifier::Public, Modifier::Final]),
                BuilderCall::Superclass("me.oriley.shiv.Binder".into()),
                BuilderCall::Build,
            ]
        );
    }

    #[test]
    fn test_shared_warning_appears_once() {
        let ctx = DefaultContext::default();
        let mut manager = BindingManager::new(&ctx, activity("com.example.Foo"));
        manager
            .add(
                BindingKind::Extra,
                BoundField::new("items", "java.util.List<java.lang.String>"),
            )
            .unwrap();
        manager
            .add(
                BindingKind::Instance,
                BoundField::new("history", "java.util.List<java.lang.Integer>"),
            )
            .unwrap();
        manager.add(BindingKind::View, view("title", 1)).unwrap();

        let binder = manager.create_binder(&ctx).unwrap();

        assert_eq!(binder.annotations.len(), 1);
        assert_eq!(
            binder.annotation(SUPPRESS_WARNINGS),
            Some(
                &AnnotationSpec::new(SUPPRESS_WARNINGS)
                    .member("value", "{\"ResourceType\", \"unchecked\"}")
            )
        );
    }

    #[test]
    fn test_members_follow_kind_then_insertion_order() {
        let ctx = DefaultContext::default();
        let mut manager = BindingManager::new(&ctx, activity("com.example.Foo"));
        // added out of kind order on purpose
        manager
            .add(
                BindingKind::Service,
                BoundField::new("alarms", "android.app.AlarmManager"),
            )
            .unwrap();
        manager
            .add(
                BindingKind::NonConfigurationInstance,
                BoundField::new("cache", "com.example.Cache"),
            )
            .unwrap();
        manager.add(BindingKind::View, view("second", 2)).unwrap();
        manager.add(BindingKind::View, view("first", 1)).unwrap();
        manager
            .add(
                BindingKind::Preference,
                BoundField::new("enabled", "boolean").key("enabled"),
            )
            .unwrap();

        let binder = manager.create_binder(&ctx).unwrap();

        let names: Vec<_> = binder.members.iter().map(|m| m.name()).collect();
        assert_eq!(
            names,
            vec![
                "bindViews",
                "unbindViews",
                "bindPreferences",
                "saveNonConfigurationInstance",
                "restoreNonConfigurationInstance",
                "bindServices",
            ]
        );

        let unbind = binder.method("unbindViews").unwrap();
        assert_eq!(
            &unbind.body[1..],
            &[
                crate::builder::Statement::expr("target.second = null"),
                crate::builder::Statement::expr("target.first = null"),
            ]
        );
    }

    #[test]
    fn test_create_binder_twice_yields_equal_output() {
        let ctx = DefaultContext::default();
        let mut manager = BindingManager::new(&ctx, activity("com.example.Foo"));
        manager.add(BindingKind::View, view("title", 1)).unwrap();
        manager
            .add(
                BindingKind::Extra,
                BoundField::new("items", "java.util.List<java.lang.String>"),
            )
            .unwrap();

        let first = manager.create_binder(&ctx).unwrap();
        let second = manager.create_binder(&ctx).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_emission_error_aborts_assembly() {
        let ctx = RecordingContext::new();
        let host = HostType::from_qualified("com.example.Widget").kind(HostKind::View);
        let mut manager = BindingManager::new(&ctx, host);
        manager.add(BindingKind::View, view("icon", 4)).unwrap();
        manager
            .add(BindingKind::Extra, BoundField::new("id", "long"))
            .unwrap();
        manager
            .add(
                BindingKind::Service,
                BoundField::new("inflater", "android.view.LayoutInflater"),
            )
            .unwrap();

        let err = manager.create_binder(&ctx).unwrap_err();

        assert!(matches!(
            *err,
            Error::UnsupportedHost {
                kind: BindingKind::Extra,
                ..
            }
        ));
        // views were emitted before the extra holder failed, services never ran
        assert_eq!(ctx.log().member_names(), vec!["bindViews", "unbindViews"]);
        assert!(!ctx.log().calls().contains(&BuilderCall::Build));
    }

    #[test]
    fn test_foo_scenario() {
        let ctx = RecordingContext::new();
        let mut manager = BindingManager::new(&ctx, activity("Foo"));
        manager.add_binding("BindView", view("v", 10)).unwrap();

        let err = manager
            .add_binding("BindSomethingElse", view("w", 11))
            .unwrap_err();
        assert!(matches!(*err, Error::UnknownCategory { .. }));
        assert_eq!(manager.holder(BindingKind::View).elements().len(), 1);

        let binder = manager.create_binder(&ctx).unwrap();
        assert_eq!(binder.name, "Foo$$Binder");
        let names: Vec<_> = binder.members.iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["bindViews", "unbindViews"]);
        assert!(
            binder
                .method("bindViews")
                .unwrap()
                .body
                .iter()
                .all(|stmt| !format!("{stmt:?}").contains("target.w"))
        );
    }

    #[test]
    fn test_process_host_stops_at_first_error() {
        let ctx = DefaultContext::default();
        let bindings = vec![
            ("BindView", view("title", 1)),
            ("BindView", view("title", 2)),
            ("BindUnknown", view("never", 3)),
        ];
        let err = process_host(&ctx, activity("com.example.Foo"), bindings).unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_manager_is_send() {
        fn assert_send<T: Send + Sync>() {}
        assert_send::<BindingManager>();
    }
}
