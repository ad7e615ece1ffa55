//! Lamp colors and the four lamp positions of the signal head.
//!
//! Each position carries its own restricted color vocabulary. Positions are
//! ordered top to bottom and are never interchangeable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of lamps on a departure signal head.
pub const LAMP_COUNT: usize = 4;

/// Color a single lamp may display.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LampColor {
    Yellow,
    Red,
    Green,
    Off,
}

impl LampColor {
    /// All colors, in declaration order.
    pub const ALL: [LampColor; 4] = [Self::Yellow, Self::Red, Self::Green, Self::Off];

    /// Check whether the lamp is lit.
    pub fn is_lit(self) -> bool {
        !matches!(self, Self::Off)
    }
}

/// One of the four ordered lamp positions, top to bottom.
///
/// # Example
///
/// ```rust
/// use departure_signal::core::{LampColor, LampPosition};
///
/// assert!(LampPosition::Second.accepts(LampColor::Red));
/// assert!(!LampPosition::Second.accepts(LampColor::Green));
/// assert_eq!(LampPosition::Fourth.allowed_colors().len(), 3);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LampPosition {
    First,
    Second,
    Third,
    Fourth,
}

impl LampPosition {
    /// All positions, top to bottom.
    pub const ALL: [LampPosition; LAMP_COUNT] =
        [Self::First, Self::Second, Self::Third, Self::Fourth];

    /// Zero-based index of this position within a lamp vector.
    pub fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
            Self::Third => 2,
            Self::Fourth => 3,
        }
    }

    /// One-based lamp number as printed on training material.
    pub fn number(self) -> usize {
        self.index() + 1
    }

    /// Colors this position is able to show, in picker order.
    pub fn allowed_colors(self) -> &'static [LampColor] {
        match self {
            Self::First => &[LampColor::Yellow, LampColor::Off],
            Self::Second => &[LampColor::Red, LampColor::Off],
            Self::Third => &[LampColor::Green, LampColor::Off],
            Self::Fourth => &[LampColor::Green, LampColor::Yellow, LampColor::Off],
        }
    }

    /// Check whether `color` is within this position's allowed set.
    pub fn accepts(self, color: LampColor) -> bool {
        self.allowed_colors().contains(&color)
    }
}

impl fmt::Display for LampPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lamp {}", self.number())
    }
}
