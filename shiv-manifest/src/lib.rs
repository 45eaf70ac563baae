//! Parsing and validation of `shiv.toml` manifests.
//!
//! A manifest declares the host types to generate binders for and the
//! bound fields of each host:
//!
//! ```
//! use std::str::FromStr;
//!
//! use shiv_manifest::Manifest;
//!
//! let manifest = Manifest::from_str(
//!     r#"
//!     [[host]]
//!     name = "com.example.MainActivity"
//!     kind = "activity"
//!
//!     [[host.field]]
//!     name = "title"
//!     type = "android.widget.TextView"
//!     bind = "BindView"
//!     id = 7
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(manifest.hosts.len(), 1);
//! assert_eq!(manifest.hosts[0].fields[0].bind, "BindView");
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod validate;

pub use error::{Error, Result};
pub use manifest::{FieldDecl, HostDecl, Manifest, ShivToml};
