//! # Error Handling
//!
//! This module defines the single error type raised by the workspace
//! aggregation core. It uses the `thiserror` library to create an `Error`
//! enum whose variants carry enough context (the offending element, file or
//! location) to be reported to the user verbatim.
//!
//! ## Key Components
//!
//! - **`Error`**: The enum covering every failure mode of decoding, loading
//!   and aggregating workspace descriptions.
//!
//! - **`ErrorKind`**: A coarse classification of an `Error`, so callers can
//!   branch on the failure category without matching message text.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! None of these errors is recovered from inside the crate. The aggregator
//! aborts on the first one and wraps it in `Error::Location` so the message
//! names the source that caused it.

use thiserror::Error;

/// Main error type for workspace aggregation
#[derive(Error, Debug)]
pub enum Error {
    /// An element did not have one of the recognized legacy shapes.
    ///
    /// Raised for multi-key mappings, unrecognized type keys, non-mapping
    /// elements and unsupported value types.
    #[error("Config element structure not recognized: {message}")]
    Format { message: String },

    /// An element mapping carried a sub-key outside the accepted set.
    #[error("Unknown key '{key}' in {element}")]
    UnknownKey { key: String, element: String },

    /// A required field was absent: `local-name` on any element, or `uri`
    /// on a version-controlled element.
    #[error("Missing required field '{field}' in {element}")]
    MissingField { field: String, element: String },

    /// A non version-controlled element carried a version-control field.
    #[error("Field '{field}' provided in non-scm entry {element}")]
    Inconsistent { field: String, element: String },

    /// A local file exists but could not be read.
    #[error("Error opening file [{path}]: {message}")]
    Read { path: String, message: String },

    /// A location is neither a local file nor something that could be
    /// downloaded.
    #[error("Is not a local file, nor able to download as a URL [{uri}]: {message}")]
    Fetch { uri: String, message: String },

    /// The loaded content is not valid YAML.
    #[error("Invalid multiproject yaml format in [{uri}]: {message}")]
    Parse { uri: String, message: String },

    /// An error raised while resolving one source location.
    ///
    /// The inner message is shown unchanged, prefixed with the location.
    #[error("{location}: {source}")]
    Location {
        location: String,
        #[source]
        source: Box<Error>,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML serialization error, wrapped from `serde_yaml::Error`.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Failure category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unrecognized element shape or unknown sub-key.
    Format,
    /// `local-name` absent, or a version-controlled element without `uri`.
    MissingField,
    /// A plain element carrying `uri` or `version`.
    Inconsistent,
    /// Unreadable file, failed download, invalid YAML or failed write.
    Load,
}

impl Error {
    /// Classify this error. `Location` reports the kind of the wrapped error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Format { .. } | Error::UnknownKey { .. } => ErrorKind::Format,
            Error::MissingField { .. } => ErrorKind::MissingField,
            Error::Inconsistent { .. } => ErrorKind::Inconsistent,
            Error::Read { .. }
            | Error::Fetch { .. }
            | Error::Parse { .. }
            | Error::Io(_)
            | Error::Yaml(_) => ErrorKind::Load,
            Error::Location { source, .. } => source.kind(),
        }
    }

    /// Wrap this error with the source location it was raised for.
    pub fn at(self, location: impl Into<String>) -> Self {
        Error::Location {
            location: location.into(),
            source: Box::new(self),
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
