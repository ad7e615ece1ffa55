//! Widget and builder errors.

use crate::core::LampError;
use thiserror::Error;

/// Errors returned by widget interactions.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum WidgetError {
    #[error("Aspect selection is not offered in lamp-first mode")]
    AspectSelectionUnavailable,

    #[error(transparent)]
    Lamp(#[from] LampError),
}

/// Errors that can occur when building a widget.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Placeholder label is empty. Call .placeholder(text) with visible text")]
    EmptyPlaceholder,

    #[error("Placeholder {placeholder:?} is also the name of an aspect")]
    PlaceholderShadowsAspect { placeholder: String },
}
