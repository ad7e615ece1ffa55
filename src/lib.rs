//! Departure Signal: aspect classification for a railway signal trainer
//!
//! A departure signal (出発信号機) has four lamps, each able to show only a
//! few colors. Five lamp combinations are canonical aspects; every other
//! combination presents nothing. This crate keeps that rule in a pure core
//! and wraps it in a small widget controller that a UI can drive.
//!
//! # Core Concepts
//!
//! - **SignalState**: four lamp colors, each valid for its position
//! - **classify**: exact lookup from a state to one of five aspects
//! - **DepartureSignal**: the widget, synchronizing lamp pickers and the
//!   aspect selector
//!
//! # Example
//!
//! ```rust
//! use departure_signal::core::{classify, SignalAspect};
//! use departure_signal::signal_state;
//! use departure_signal::widget::DepartureSignal;
//!
//! let state = signal_state!(Off, Off, Green, Off).unwrap();
//! assert_eq!(classify(&state), Some(SignalAspect::Proceed));
//!
//! let mut signal = DepartureSignal::new();
//! signal.select_aspect(Some(SignalAspect::Alert)).unwrap();
//! assert_eq!(classify(signal.lamps()), Some(SignalAspect::Alert));
//! ```

pub mod core;
pub mod display;
mod macros;
pub mod validation;
pub mod widget;

// Re-export commonly used types
pub use crate::core::{classify, LampColor, LampPosition, SignalAspect, SignalState};
pub use widget::{DepartureSignal, WidgetBuilder};
