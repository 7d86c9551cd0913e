//! Error types for equation-of-state construction and conversion calls.

use freshet_core::ParameterError;
use std::error::Error;
use std::fmt;

/// Errors from equation-of-state construction or conversion entry points.
///
/// Construction failures are fatal to the owning block: no partial
/// equation of state is ever produced. Conversion calls can only fail on
/// a domain mismatch between the supplied arrays and the requested index
/// box — never on the state values themselves, which are silently floored
/// where physics requires it.
#[derive(Clone, Debug, PartialEq)]
pub enum EosError {
    /// A required parameter was missing or malformed.
    Parameter(ParameterError),
    /// The configured isothermal sound speed is not finite and positive.
    InvalidSoundSpeed {
        /// The rejected value.
        value: f64,
    },
    /// The configured density floor is not finite and positive.
    InvalidDensityFloor {
        /// The rejected value.
        value: f64,
    },
    /// A supplied array does not match the layout or contain the
    /// requested index box.
    Domain {
        /// Description of the mismatch.
        reason: String,
    },
}

impl fmt::Display for EosError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parameter(e) => write!(f, "parameter: {e}"),
            Self::InvalidSoundSpeed { value } => {
                write!(f, "iso_sound_speed must be finite and positive, got {value}")
            }
            Self::InvalidDensityFloor { value } => {
                write!(f, "dfloor must be finite and positive, got {value}")
            }
            Self::Domain { reason } => write!(f, "domain mismatch: {reason}"),
        }
    }
}

impl Error for EosError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parameter(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParameterError> for EosError {
    fn from(e: ParameterError) -> Self {
        Self::Parameter(e)
    }
}
