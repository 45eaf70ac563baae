use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the manifest location with --config"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse shiv.toml")]
    #[diagnostic(code(shiv::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(shiv::manifest_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("host '{name}' is declared more than once")]
    #[diagnostic(
        code(shiv::duplicate_host),
        help("merge the fields of both declarations into one [[host]] table")
    )]
    DuplicateHost {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: Option<SourceSpan>,
        #[label("declared again here")]
        second_span: Option<SourceSpan>,
        name: String,
    },

    #[error("'{name}' is a Java reserved keyword")]
    #[diagnostic(help("rename the {context} in the Java source and in shiv.toml"))]
    ReservedKeyword {
        #[source_code]
        src: NamedSource<String>,
        #[label("reserved keyword used here")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(help(
        "{reason}. Use only letters, digits, '_' and '$', not starting with a digit."
    ))]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a validation error with an optional span
    pub fn validation(
        message: impl Into<String>,
        src: &str,
        filename: &str,
        span: Option<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::Validation {
            src: NamedSource::new(filename, src.to_string()),
            span,
            message: message.into(),
        })
    }

    /// Create a duplicate host error
    pub fn duplicate_host(
        name: impl Into<String>,
        src: &str,
        filename: &str,
        first_span: Option<SourceSpan>,
        second_span: Option<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::DuplicateHost {
            src: NamedSource::new(filename, src.to_string()),
            first_span,
            second_span,
            name: name.into(),
        })
    }

    /// Create a reserved keyword error
    pub fn reserved_keyword(
        name: impl Into<String>,
        context: impl Into<String>,
        src: &str,
        filename: &str,
        span: Option<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::ReservedKeyword {
            src: NamedSource::new(filename, src.to_string()),
            span,
            name: name.into(),
            context: context.into(),
        })
    }

    /// Create an invalid identifier error
    pub fn invalid_identifier(
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        src: &str,
        filename: &str,
        span: Option<SourceSpan>,
    ) -> Box<Self> {
        Box::new(Error::InvalidIdentifier {
            src: NamedSource::new(filename, src.to_string()),
            span,
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }
}
