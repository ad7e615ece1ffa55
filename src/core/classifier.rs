//! Aspect classification over the canonical lamp table.
//!
//! Classification is an exact, order-sensitive lookup: a state presents an
//! aspect only when all four lamps equal that aspect's canonical vector.
//! The five canonical vectors are pairwise distinct, so lookup order does
//! not matter.

use super::aspect::SignalAspect;
use super::lamp::LampColor::{Green, Off, Red, Yellow};
use super::lamp::{LampColor, LAMP_COUNT};
use super::state::SignalState;

/// Canonical lamp vectors, lamp 1 first, one per aspect.
pub const CANONICAL_ASPECTS: [([LampColor; LAMP_COUNT], SignalAspect); 5] = [
    ([Off, Off, Green, Off], SignalAspect::Proceed),
    ([Yellow, Off, Off, Green], SignalAspect::ReduceSpeed),
    ([Off, Off, Off, Yellow], SignalAspect::Caution),
    ([Yellow, Off, Off, Yellow], SignalAspect::Alert),
    ([Off, Red, Off, Off], SignalAspect::Stop),
];

/// Classify a signal state.
///
/// Returns `None` when the lamps do not form any canonical aspect; that is
/// an ordinary outcome, not an error.
///
/// # Example
///
/// ```rust
/// use departure_signal::core::{classify, SignalAspect, SignalState};
/// use departure_signal::signal_state;
///
/// let state = signal_state!(Yellow, Off, Off, Green).unwrap();
/// assert_eq!(classify(&state), Some(SignalAspect::ReduceSpeed));
///
/// assert_eq!(classify(&SignalState::dark()), None);
/// ```
pub fn classify(state: &SignalState) -> Option<SignalAspect> {
    classify_colors(state.lamps())
}

/// Classify a raw lamp vector without checking position constraints.
pub fn classify_colors(colors: &[LampColor; LAMP_COUNT]) -> Option<SignalAspect> {
    CANONICAL_ASPECTS
        .iter()
        .find(|(canonical, _)| canonical == colors)
        .map(|(_, aspect)| *aspect)
}

/// Canonical state for an aspect.
pub fn aspect_to_state(aspect: SignalAspect) -> SignalState {
    let lamps = match aspect {
        SignalAspect::Proceed => CANONICAL_ASPECTS[0].0,
        SignalAspect::ReduceSpeed => CANONICAL_ASPECTS[1].0,
        SignalAspect::Caution => CANONICAL_ASPECTS[2].0,
        SignalAspect::Alert => CANONICAL_ASPECTS[3].0,
        SignalAspect::Stop => CANONICAL_ASPECTS[4].0,
    };
    // Canonical vectors always satisfy the position constraints.
    SignalState::from_checked(lamps)
}
