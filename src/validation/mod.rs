//! Accumulating validation of raw lamp vectors.
//!
//! Lamp vectors arriving from outside the crate (a UI layer, a lesson file,
//! a test fixture) may break several position constraints at once. Using
//! Stillwater's `Validation`, every violation is reported in one pass
//! instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use departure_signal::core::LampColor;
//! use departure_signal::validation::validate_lamps;
//! use stillwater::validation::Validation;
//!
//! let raw = [LampColor::Red, LampColor::Green, LampColor::Off, LampColor::Off];
//!
//! match validate_lamps(&raw) {
//!     Validation::Failure(errors) => assert_eq!(errors.len(), 2),
//!     Validation::Success(_) => panic!("lamps 1 and 2 are both wrong"),
//! }
//! ```

use crate::core::{LampColor, LampError, LampPosition, SignalState, LAMP_COUNT};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result of validating a lamp vector.
pub type LampValidation<T> = Validation<T, NonEmptyVec<LampError>>;

/// Check a single lamp against its position.
pub fn validate_lamp(position: LampPosition, color: LampColor) -> LampValidation<LampColor> {
    if position.accepts(color) {
        Validation::success(color)
    } else {
        Validation::fail(LampError::ColorNotAllowed { position, color })
    }
}

/// Validate a raw lamp vector, lamp 1 first.
///
/// A vector of the wrong length fails with a single
/// [`LampError::WrongLampCount`]; otherwise every disallowed color is
/// reported, in position order.
pub fn validate_lamps(colors: &[LampColor]) -> LampValidation<SignalState> {
    if colors.len() != LAMP_COUNT {
        return Validation::fail(LampError::WrongLampCount {
            expected: LAMP_COUNT,
            found: colors.len(),
        });
    }

    let checks: Vec<LampValidation<LampColor>> = LampPosition::ALL
        .iter()
        .zip(colors)
        .map(|(position, color)| validate_lamp(*position, *color))
        .collect();

    Validation::all_vec(checks).map(|checked| {
        let mut lamps = [LampColor::Off; LAMP_COUNT];
        for (slot, color) in lamps.iter_mut().zip(checked) {
            *slot = color;
        }
        SignalState::from_checked(lamps)
    })
}
