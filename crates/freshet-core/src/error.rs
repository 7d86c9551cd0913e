//! Error types for runtime parameter lookup.

use std::error::Error;
use std::fmt;

/// Errors from [`ParameterTable`](crate::ParameterTable) lookups.
///
/// A missing required parameter is fatal to the construction of the
/// component that asked for it; no partial object is produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParameterError {
    /// The requested key does not exist in the given section.
    Missing {
        /// Section the key was looked up in.
        section: String,
        /// The missing key.
        key: String,
    },
    /// The value exists but does not parse as a real number.
    NotReal {
        /// Section the key was looked up in.
        section: String,
        /// The offending key.
        key: String,
        /// The raw stored value.
        value: String,
    },
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { section, key } => {
                write!(f, "parameter '{section}/{key}' is missing")
            }
            Self::NotReal {
                section,
                key,
                value,
            } => {
                write!(
                    f,
                    "parameter '{section}/{key}' is not a real number: \"{value}\""
                )
            }
        }
    }
}

impl Error for ParameterError {}
