//! Locale-keyed display names for lamps and aspects.
//!
//! Display strings are presentation data. They are kept apart from the enum
//! identities so classification never depends on a language.

use crate::core::{LampColor, LampPosition, SignalAspect};
use serde::{Deserialize, Serialize};

/// Label shown when the lamps present no aspect.
pub const DEFAULT_PLACEHOLDER: &str = "--------";

/// Language used for labels.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    /// Training-material wording (出発進行, 灯1, ...)
    #[default]
    Japanese,
    English,
}

/// Human-readable name of a value in a given locale.
///
/// # Example
///
/// ```rust
/// use departure_signal::core::SignalAspect;
/// use departure_signal::display::{DisplayName, Locale};
///
/// assert_eq!(SignalAspect::Alert.display_name(Locale::Japanese), "出発警戒");
/// assert_eq!(SignalAspect::Alert.display_name(Locale::English), "Departure Alert");
/// ```
pub trait DisplayName {
    fn display_name(&self, locale: Locale) -> &'static str;
}

impl DisplayName for LampColor {
    fn display_name(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Japanese, Self::Yellow) => "黄",
            (Locale::Japanese, Self::Red) => "赤",
            (Locale::Japanese, Self::Green) => "緑",
            (Locale::Japanese, Self::Off) => "消",
            (Locale::English, Self::Yellow) => "Yellow",
            (Locale::English, Self::Red) => "Red",
            (Locale::English, Self::Green) => "Green",
            (Locale::English, Self::Off) => "Off",
        }
    }
}

impl DisplayName for SignalAspect {
    fn display_name(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Japanese, Self::Proceed) => "出発進行",
            (Locale::Japanese, Self::ReduceSpeed) => "出発減速",
            (Locale::Japanese, Self::Caution) => "出発注意",
            (Locale::Japanese, Self::Alert) => "出発警戒",
            (Locale::Japanese, Self::Stop) => "出発停止",
            (Locale::English, Self::Proceed) => "Departure Proceed",
            (Locale::English, Self::ReduceSpeed) => "Departure Reduce Speed",
            (Locale::English, Self::Caution) => "Departure Caution",
            (Locale::English, Self::Alert) => "Departure Alert",
            (Locale::English, Self::Stop) => "Departure Stop",
        }
    }
}

impl LampPosition {
    /// Picker label for this lamp, e.g. `灯1` or `Lamp 1`.
    pub fn label(self, locale: Locale) -> String {
        match locale {
            Locale::Japanese => format!("灯{}", self.number()),
            Locale::English => format!("Lamp {}", self.number()),
        }
    }
}

/// Widget title.
pub fn title(locale: Locale) -> &'static str {
    match locale {
        Locale::Japanese => "出発信号機",
        Locale::English => "Departure Signal",
    }
}

/// RGB color of a lamp indicator.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#rrggbb` form.
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl LampColor {
    /// Indicator color to paint; an unlit lamp is black.
    pub fn swatch(self) -> Rgb {
        match self {
            Self::Yellow => Rgb(255, 204, 0),
            Self::Red => Rgb(255, 59, 48),
            Self::Green => Rgb(52, 199, 89),
            Self::Off => Rgb(0, 0, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn japanese_is_default_locale() {
        assert_eq!(Locale::default(), Locale::Japanese);
    }

    #[test]
    fn aspect_names_are_distinct_per_locale() {
        for locale in [Locale::Japanese, Locale::English] {
            let mut names: Vec<_> = SignalAspect::ALL
                .iter()
                .map(|a| a.display_name(locale))
                .collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), SignalAspect::ALL.len());
        }
    }

    #[test]
    fn placeholder_is_not_an_aspect_name() {
        for locale in [Locale::Japanese, Locale::English] {
            assert!(SignalAspect::ALL
                .iter()
                .all(|a| a.display_name(locale) != DEFAULT_PLACEHOLDER));
        }
    }

    #[test]
    fn lamp_labels_follow_locale() {
        assert_eq!(LampPosition::Second.label(Locale::Japanese), "灯2");
        assert_eq!(LampPosition::Second.label(Locale::English), "Lamp 2");
    }

    #[test]
    fn off_lamp_is_painted_black() {
        assert_eq!(LampColor::Off.swatch(), Rgb(0, 0, 0));
        assert_eq!(LampColor::Off.swatch().hex(), "#000000");
        assert_eq!(LampColor::Yellow.swatch().hex(), "#ffcc00");
    }

    #[test]
    fn color_names() {
        assert_eq!(LampColor::Green.display_name(Locale::Japanese), "緑");
        assert_eq!(LampColor::Off.display_name(Locale::English), "Off");
        assert_eq!(title(Locale::Japanese), "出発信号機");
    }
}
