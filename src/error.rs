//! The error type shared by every fallible operation in the crate.

use crate::resolution::Resolution;


/// Everything that can go wrong when building or adjusting an interval.
///
/// None of these are transient: each one follows from the input or from
/// the call itself, so there is nothing to retry.
#[derive(PartialEq, Eq, Debug, Clone, thiserror::Error)]
pub enum Error {

    /// A component or a piece of text did not describe a valid value, such
    /// as month 13, the 31st of April, or the text `"99999"` as a date.
    #[error("{0}")]
    Invalid(String),

    /// The operation has no meaning at this resolution, such as moving a
    /// month interval by a number of days.
    #[error("{operation} is not supported at {resolution} resolution")]
    Unsupported {
        operation: &'static str,
        resolution: Resolution,
    },

    /// An interval was asked whether it contains one at a coarser
    /// resolution than its own.
    #[error("{target} is broader than {container}")]
    IncompatibleResolution {
        container: Resolution,
        target: Resolution,
    },
}

impl Error {

    /// Whether this error came from a bad component or bad text.
    pub fn is_validation(&self) -> bool {
        matches!(*self, Error::Invalid(_))
    }

    /// Whether this error came from calling an operation at a resolution
    /// that does not support it.
    pub fn is_unsupported(&self) -> bool {
        !self.is_validation()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
