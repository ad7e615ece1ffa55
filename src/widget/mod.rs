//! Interactive widget built on the pure core.
//!
//! The widget owns the single mutable lamp state and offers two ways to
//! drive it:
//! - lamp-first: set one lamp at a time, the aspect label follows
//! - aspect-first: pick an aspect by name, all lamps follow
//!
//! Aspect-first selection is only available in
//! [`InteractionMode::Bidirectional`].

pub mod builder;
pub mod error;
pub mod signal;
pub mod view;

pub use builder::{InteractionMode, WidgetBuilder, WidgetConfig};
pub use error::{BuildError, WidgetError};
pub use signal::{DepartureSignal, SignalUpdate};
pub use view::{LampView, SignalView};
