//! The four-lamp configuration of a departure signal.
//!
//! A `SignalState` can only hold colors its positions accept. Every way of
//! building one (constructors, per-lamp replacement, deserialization) checks
//! the positions, so code holding a `SignalState` never re-validates it.

use super::error::LampError;
use super::lamp::{LampColor, LampPosition, LAMP_COUNT};
use serde::{Deserialize, Serialize};

/// Ordered colors of lamps 1 through 4.
///
/// The default state is fully dark, which is how the widget starts.
///
/// # Example
///
/// ```rust
/// use departure_signal::core::{LampColor, LampPosition, SignalState};
///
/// let state = SignalState::dark()
///     .with_lamp(LampPosition::Third, LampColor::Green)
///     .unwrap();
/// assert_eq!(state.lamp(LampPosition::Third), LampColor::Green);
///
/// // Lamp 2 is the red lamp; it cannot show green.
/// assert!(SignalState::dark()
///     .with_lamp(LampPosition::Second, LampColor::Green)
///     .is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "[LampColor; 4]", into = "[LampColor; 4]")]
pub struct SignalState {
    lamps: [LampColor; LAMP_COUNT],
}

impl SignalState {
    /// Build a state from four colors, failing on the first position
    /// whose color is not allowed.
    ///
    /// Use [`crate::validation::validate_lamps`] to collect every violation
    /// at once instead.
    pub fn new(lamps: [LampColor; LAMP_COUNT]) -> Result<Self, LampError> {
        for position in LampPosition::ALL {
            let color = lamps[position.index()];
            if !position.accepts(color) {
                return Err(LampError::ColorNotAllowed { position, color });
            }
        }
        Ok(Self { lamps })
    }

    /// All four lamps off.
    pub const fn dark() -> Self {
        Self {
            lamps: [LampColor::Off; LAMP_COUNT],
        }
    }

    /// Build a state from colors already checked by the caller.
    pub(crate) const fn from_checked(lamps: [LampColor; LAMP_COUNT]) -> Self {
        Self { lamps }
    }

    /// Color of a single lamp.
    pub fn lamp(&self, position: LampPosition) -> LampColor {
        self.lamps[position.index()]
    }

    /// All four colors, lamp 1 first.
    pub fn lamps(&self) -> &[LampColor; LAMP_COUNT] {
        &self.lamps
    }

    /// Return a copy with one lamp replaced.
    ///
    /// The original state is left untouched.
    pub fn with_lamp(&self, position: LampPosition, color: LampColor) -> Result<Self, LampError> {
        if !position.accepts(color) {
            return Err(LampError::ColorNotAllowed { position, color });
        }
        let mut lamps = self.lamps;
        lamps[position.index()] = color;
        Ok(Self { lamps })
    }

    /// Check whether every lamp is off.
    pub fn is_dark(&self) -> bool {
        self.lamps.iter().all(|color| !color.is_lit())
    }

    /// Iterate over `(position, color)` pairs, top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = (LampPosition, LampColor)> + '_ {
        LampPosition::ALL
            .into_iter()
            .map(move |position| (position, self.lamp(position)))
    }
}

impl Default for SignalState {
    fn default() -> Self {
        Self::dark()
    }
}

impl TryFrom<[LampColor; LAMP_COUNT]> for SignalState {
    type Error = LampError;

    fn try_from(lamps: [LampColor; LAMP_COUNT]) -> Result<Self, Self::Error> {
        Self::new(lamps)
    }
}

impl From<SignalState> for [LampColor; LAMP_COUNT] {
    fn from(state: SignalState) -> Self {
        state.lamps
    }
}
