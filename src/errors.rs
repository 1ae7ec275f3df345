use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for identifier generation
#[derive(Debug)]
pub enum Error {
    /// The converter was set up with an unusable value
    Configuration { root: String, detail: String },
    /// Input that cannot be turned into an identifier
    MalformedInput { input: String, detail: String },
    /// Path does not live under the namespace root
    PrefixMismatch { path: String, root: String },
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// Generic error with a message
    Generic { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Configuration { root, detail } => {
                write!(f, "Invalid namespace root '{root}': {detail}")
            }
            Error::MalformedInput { input, detail } => {
                write!(f, "Malformed input '{input}': {detail}")
            }
            Error::PrefixMismatch { path, root } => {
                write!(f, "Path '{path}' is not under namespace root '{root}'")
            }
            Error::FileOperation {
                path, operation, ..
            } => {
                write!(f, "Failed to {} file: {}", operation, path.display())
            }
            Error::Generic { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::FileOperation { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result alias used by the naming core
///
/// # Examples
/// ```
/// use pathid::prelude::{Result, malformed_input_error};
///
/// fn first_segment(path: &str) -> Result<&str> {
///     path.split('/')
///         .find(|segment| !segment.is_empty())
///         .ok_or_else(|| malformed_input_error(path, "no segments"))
/// }
///
/// assert_eq!(first_segment("/sitecore/templates").unwrap(), "sitecore");
/// assert!(first_segment("//").is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a configuration error
pub fn configuration_error(root: &str, detail: &str) -> Error {
    Error::Configuration {
        root: root.to_string(),
        detail: detail.to_string(),
    }
}

/// Helper function to create a malformed input error
pub fn malformed_input_error(input: &str, detail: &str) -> Error {
    Error::MalformedInput {
        input: input.to_string(),
        detail: detail.to_string(),
    }
}

/// Helper function to create a prefix mismatch error
pub fn prefix_mismatch_error(path: &str, root: &str) -> Error {
    Error::PrefixMismatch {
        path: path.to_string(),
        root: root.to_string(),
    }
}

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}
