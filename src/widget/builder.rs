//! Widget configuration and its builder.

use crate::core::{SignalAspect, SignalState};
use crate::display::{DisplayName, Locale, DEFAULT_PLACEHOLDER};
use crate::widget::error::BuildError;
use crate::widget::signal::DepartureSignal;
use serde::{Deserialize, Serialize};

/// How the user may drive the lamps.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionMode {
    /// Only per-lamp pickers; the aspect is a read-only label
    LampFirst,
    /// Per-lamp pickers plus an aspect selector kept in sync with them
    #[default]
    Bidirectional,
}

impl InteractionMode {
    pub fn offers_aspect_selection(self) -> bool {
        matches!(self, Self::Bidirectional)
    }
}

/// Settings fixed for the lifetime of a widget.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    pub locale: Locale,
    pub placeholder: String,
    pub mode: InteractionMode,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            mode: InteractionMode::default(),
        }
    }
}

impl WidgetConfig {
    /// Check the placeholder can never be mistaken for an aspect.
    pub fn validate(&self) -> Result<(), BuildError> {
        let visible = self.placeholder.trim();
        if visible.is_empty() {
            return Err(BuildError::EmptyPlaceholder);
        }
        let shadows = SignalAspect::ALL
            .iter()
            .any(|aspect| aspect.display_name(self.locale) == visible);
        if shadows {
            return Err(BuildError::PlaceholderShadowsAspect {
                placeholder: self.placeholder.clone(),
            });
        }
        Ok(())
    }
}

/// Builder for constructing a widget with a fluent API.
///
/// # Example
///
/// ```rust
/// use departure_signal::display::Locale;
/// use departure_signal::widget::{InteractionMode, WidgetBuilder};
///
/// let signal = WidgetBuilder::new()
///     .locale(Locale::English)
///     .placeholder("(no aspect)")
///     .mode(InteractionMode::LampFirst)
///     .build()
///     .unwrap();
///
/// assert_eq!(signal.aspect_label(), "(no aspect)");
/// ```
#[derive(Clone, Debug, Default)]
pub struct WidgetBuilder {
    config: WidgetConfig,
    initial: Option<SignalState>,
}

impl WidgetBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label language.
    pub fn locale(mut self, locale: Locale) -> Self {
        self.config.locale = locale;
        self
    }

    /// Set the label shown when no aspect matches.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.config.placeholder = placeholder.into();
        self
    }

    /// Set the interaction mode.
    pub fn mode(mut self, mode: InteractionMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Set the initial lamps (default: all off).
    pub fn initial(mut self, state: SignalState) -> Self {
        self.initial = Some(state);
        self
    }

    /// Build the widget.
    pub fn build(self) -> Result<DepartureSignal, BuildError> {
        self.config.validate()?;
        Ok(DepartureSignal::with_config(
            self.config,
            self.initial.unwrap_or_default(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_build_starts_dark() {
        let signal = WidgetBuilder::new().build().unwrap();
        assert!(signal.lamps().is_dark());
        assert_eq!(signal.config(), &WidgetConfig::default());
    }

    #[test]
    fn builder_rejects_empty_placeholder() {
        let result = WidgetBuilder::new().placeholder("   ").build();
        assert!(matches!(result, Err(BuildError::EmptyPlaceholder)));
    }

    #[test]
    fn builder_rejects_placeholder_equal_to_aspect_name() {
        let result = WidgetBuilder::new()
            .locale(Locale::Japanese)
            .placeholder("出発停止")
            .build();

        assert!(matches!(
            result,
            Err(BuildError::PlaceholderShadowsAspect { placeholder }) if placeholder == "出発停止"
        ));
    }

    #[test]
    fn builder_rejects_padded_aspect_name() {
        for placeholder in ["出発停止 ", " 出発停止", "\t出発進行\n"] {
            let result = WidgetBuilder::new()
                .locale(Locale::Japanese)
                .placeholder(placeholder)
                .build();

            assert!(
                matches!(
                    result,
                    Err(BuildError::PlaceholderShadowsAspect { placeholder: ref p }) if p.as_str() == placeholder
                ),
                "{placeholder:?} renders as an aspect name"
            );
        }
    }

    #[test]
    fn shadowing_depends_on_locale() {
        let result = WidgetBuilder::new()
            .locale(Locale::English)
            .placeholder("出発停止")
            .build();
        assert!(result.is_ok());
    }

    #[test]
    fn builder_sets_initial_state() {
        let stop = SignalAspect::Stop.canonical_state();
        let signal = WidgetBuilder::new().initial(stop).build().unwrap();

        assert_eq!(signal.lamps(), &stop);
        assert_eq!(signal.current_aspect(), Some(SignalAspect::Stop));
        assert_eq!(signal.selected_aspect(), Some(SignalAspect::Stop));
    }

    #[test]
    fn lamp_first_mode_hides_aspect_selection() {
        assert!(!InteractionMode::LampFirst.offers_aspect_selection());
        assert!(InteractionMode::Bidirectional.offers_aspect_selection());
    }

    #[test]
    fn config_serializes_correctly() {
        let config = WidgetConfig {
            locale: Locale::English,
            placeholder: "none".to_string(),
            mode: InteractionMode::LampFirst,
        };
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: WidgetConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
