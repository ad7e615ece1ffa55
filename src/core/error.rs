//! Lamp configuration errors.

use super::lamp::{LampColor, LampPosition};
use thiserror::Error;

/// Errors raised when a lamp vector breaks the signal head's constraints.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum LampError {
    /// The position cannot display the requested color
    #[error("{position} cannot show {color:?}")]
    ColorNotAllowed {
        position: LampPosition,
        color: LampColor,
    },

    /// A lamp vector had the wrong number of entries
    #[error("Expected {expected} lamps, found {found}")]
    WrongLampCount { expected: usize, found: usize },
}
