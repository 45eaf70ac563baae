//! Binding marker kinds.

use std::{fmt, str::FromStr};

use crate::{Error, Result};

/// Package the binding markers are declared in.
const MARKER_PACKAGE: &str = "me.oriley.shiv.";

/// The closed set of binding categories.
///
/// Variant order is significant: binders emit their members in this order
/// and the manager consults holders in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingKind {
    View,
    Preference,
    Extra,
    Instance,
    NonConfigurationInstance,
    Service,
}

impl BindingKind {
    /// Every kind, in emission order.
    pub const ALL: [BindingKind; 6] = [
        BindingKind::View,
        BindingKind::Preference,
        BindingKind::Extra,
        BindingKind::Instance,
        BindingKind::NonConfigurationInstance,
        BindingKind::Service,
    ];

    /// Position of this kind within [`BindingKind::ALL`].
    pub fn index(self) -> usize {
        match self {
            BindingKind::View => 0,
            BindingKind::Preference => 1,
            BindingKind::Extra => 2,
            BindingKind::Instance => 3,
            BindingKind::NonConfigurationInstance => 4,
            BindingKind::Service => 5,
        }
    }

    /// The simple name of the marker annotation (e.g. `BindView`).
    pub fn marker_name(self) -> &'static str {
        match self {
            BindingKind::View => "BindView",
            BindingKind::Preference => "BindPreference",
            BindingKind::Extra => "BindExtra",
            BindingKind::Instance => "BindInstance",
            BindingKind::NonConfigurationInstance => "BindNonConfigurationInstance",
            BindingKind::Service => "BindService",
        }
    }
}

impl fmt::Display for BindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BindingKind::View => "view",
            BindingKind::Preference => "preference",
            BindingKind::Extra => "extra",
            BindingKind::Instance => "instance",
            BindingKind::NonConfigurationInstance => "non-configuration instance",
            BindingKind::Service => "service",
        };
        f.write_str(name)
    }
}

impl FromStr for BindingKind {
    type Err = Box<Error>;

    /// Parse a marker name, either simple (`BindView`) or qualified
    /// (`me.oriley.shiv.BindView`).
    fn from_str(s: &str) -> Result<Self> {
        let simple = s.strip_prefix(MARKER_PACKAGE).unwrap_or(s);
        BindingKind::ALL
            .into_iter()
            .find(|kind| kind.marker_name() == simple)
            .ok_or_else(|| Error::unknown_category(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_all_order() {
        for (i, kind) in BindingKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_parse_simple_and_qualified() {
        assert_eq!(
            "BindView".parse::<BindingKind>().unwrap(),
            BindingKind::View
        );
        assert_eq!(
            "me.oriley.shiv.BindNonConfigurationInstance"
                .parse::<BindingKind>()
                .unwrap(),
            BindingKind::NonConfigurationInstance
        );
    }

    #[test]
    fn test_parse_unknown_marker() {
        let err = "BindFoo".parse::<BindingKind>().unwrap_err();
        assert!(matches!(*err, Error::UnknownCategory { ref marker } if marker == "BindFoo"));
    }

    #[test]
    fn test_parse_rejects_foreign_package() {
        assert!("com.example.BindView".parse::<BindingKind>().is_err());
    }
}
