//! Error type for symbol encoding lookups

use thiserror::Error;

use crate::models::{ECLevel, Mode};

/// Errors raised by the code-table lookups
///
/// These are fatal to the current encode attempt: retrying with the same
/// input cannot succeed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// Mode has no standard mode indicator (unset or out of table)
    #[error("no mode indicator for {0:?}")]
    UnencodableMode(Mode),

    /// Error correction level has no standard level indicator
    #[error("no level indicator for {0:?}")]
    UnencodableEcLevel(ECLevel),
}
