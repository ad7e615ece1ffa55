//! Presentation-neutral snapshot of the widget.
//!
//! A UI layer draws the signal head from these values and feeds user input
//! back through `DepartureSignal::set_lamp` and `select_aspect`.

use crate::core::{LampColor, LampPosition, SignalAspect};
use crate::display::{DisplayName, Locale, Rgb};
use serde::Serialize;

/// One lamp and its picker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LampView {
    pub position: LampPosition,
    /// Picker label, e.g. `灯1`
    pub label: String,
    pub color: LampColor,
    pub color_name: &'static str,
    pub swatch: Rgb,
    /// Picker entries limited to the position's allowed colors
    pub choices: Vec<(LampColor, &'static str)>,
}

impl LampView {
    pub fn new(position: LampPosition, color: LampColor, locale: Locale) -> Self {
        Self {
            position,
            label: position.label(locale),
            color,
            color_name: color.display_name(locale),
            swatch: color.swatch(),
            choices: position
                .allowed_colors()
                .iter()
                .map(|choice| (*choice, choice.display_name(locale)))
                .collect(),
        }
    }
}

/// Everything needed to render the widget once.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignalView {
    pub title: &'static str,
    /// Lamps, top to bottom
    pub lamps: Vec<LampView>,
    pub aspect: Option<SignalAspect>,
    /// Aspect name or the placeholder
    pub aspect_label: String,
    /// Aspect selector entries; `None` when the selector is not offered
    pub aspect_choices: Option<Vec<(SignalAspect, &'static str)>>,
    pub selected: Option<SignalAspect>,
}
