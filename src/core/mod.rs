//! Core signal types and classification.
//!
//! This module contains the pure core of the departure signal:
//! - Lamp colors and the four constrained lamp positions
//! - The validated four-lamp `SignalState`
//! - The five named aspects and the classification table
//! - Immutable change history
//!
//! Nothing in this module performs I/O or logs.

mod aspect;
pub mod classifier;
mod error;
mod history;
mod lamp;
mod state;

pub use aspect::SignalAspect;
pub use classifier::{aspect_to_state, classify, classify_colors, CANONICAL_ASPECTS};
pub use error::LampError;
pub use history::{ChangeCause, SignalChange, SignalHistory};
pub use lamp::{LampColor, LampPosition, LAMP_COUNT};
pub use state::SignalState;
