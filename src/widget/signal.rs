//! The departure signal widget controller.

use crate::core::{
    classify, ChangeCause, LampColor, LampError, LampPosition, SignalAspect, SignalChange,
    SignalHistory, SignalState,
};
use crate::display::DisplayName;
use crate::widget::builder::{WidgetBuilder, WidgetConfig};
use crate::widget::error::WidgetError;
use crate::widget::view::{LampView, SignalView};
use chrono::Utc;
use tracing::debug;

/// Outcome of a single interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignalUpdate {
    /// Lamps before the interaction
    pub previous: SignalState,
    /// Lamps after the interaction
    pub current: SignalState,
    /// Aspect presented by `current`
    pub aspect: Option<SignalAspect>,
}

impl SignalUpdate {
    /// Check whether the interaction changed any lamp.
    pub fn changed(&self) -> bool {
        self.previous != self.current
    }
}

/// Interactive departure signal.
///
/// Owns the one mutable `SignalState` of the widget. Every interaction runs
/// to completion, re-classifies the lamps and keeps the aspect selector in
/// step with them.
///
/// # Example
///
/// ```rust
/// use departure_signal::core::{LampColor, LampPosition, SignalAspect};
/// use departure_signal::widget::DepartureSignal;
///
/// let mut signal = DepartureSignal::new();
/// assert_eq!(signal.aspect_label(), "--------");
///
/// signal.set_lamp(LampPosition::Third, LampColor::Green).unwrap();
/// assert_eq!(signal.current_aspect(), Some(SignalAspect::Proceed));
/// assert_eq!(signal.aspect_label(), "出発進行");
///
/// signal.select_aspect(Some(SignalAspect::Alert)).unwrap();
/// assert_eq!(signal.current_aspect(), Some(SignalAspect::Alert));
/// ```
#[derive(Clone, Debug)]
pub struct DepartureSignal {
    config: WidgetConfig,
    state: SignalState,
    selection: Option<SignalAspect>,
    history: SignalHistory,
}

impl DepartureSignal {
    /// Create a widget with default settings and all lamps off.
    pub fn new() -> Self {
        Self::with_config(WidgetConfig::default(), SignalState::dark())
    }

    /// Start a builder.
    pub fn builder() -> WidgetBuilder {
        WidgetBuilder::new()
    }

    pub(crate) fn with_config(config: WidgetConfig, initial: SignalState) -> Self {
        let selection = if config.mode.offers_aspect_selection() {
            classify(&initial)
        } else {
            None
        };
        Self {
            config,
            state: initial,
            selection,
            history: SignalHistory::new(),
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Current lamps.
    pub fn lamps(&self) -> &SignalState {
        &self.state
    }

    pub fn lamp(&self, position: LampPosition) -> LampColor {
        self.state.lamp(position)
    }

    /// Aspect presented by the current lamps.
    pub fn current_aspect(&self) -> Option<SignalAspect> {
        classify(&self.state)
    }

    /// Aspect shown in the selector; always `None` in lamp-first mode.
    pub fn selected_aspect(&self) -> Option<SignalAspect> {
        self.selection
    }

    /// Label for the current aspect, or the placeholder when none matches.
    pub fn aspect_label(&self) -> &str {
        match self.current_aspect() {
            Some(aspect) => aspect.display_name(self.config.locale),
            None => &self.config.placeholder,
        }
    }

    /// Changes applied so far.
    pub fn history(&self) -> &SignalHistory {
        &self.history
    }

    /// Set one lamp from its picker.
    ///
    /// The whole state is re-classified afterwards. In bidirectional mode
    /// the aspect selector follows the classification.
    pub fn set_lamp(
        &mut self,
        position: LampPosition,
        color: LampColor,
    ) -> Result<SignalUpdate, LampError> {
        let next = self.state.with_lamp(position, color).map_err(|err| {
            debug!(%position, ?color, error = %err, "lamp change rejected");
            err
        })?;

        let update = self.apply(next, ChangeCause::Lamp { position, color });
        if self.config.mode.offers_aspect_selection() {
            self.selection = update.aspect;
        }
        debug!(
            %position,
            ?color,
            aspect = update.aspect.map_or("none", SignalAspect::id),
            "lamp set"
        );
        Ok(update)
    }

    /// Pick an aspect by name, or clear the selector with `None`.
    ///
    /// Picking drives all four lamps to the aspect's canonical state.
    /// Clearing leaves the lamps as they are.
    pub fn select_aspect(
        &mut self,
        aspect: Option<SignalAspect>,
    ) -> Result<SignalUpdate, WidgetError> {
        if !self.config.mode.offers_aspect_selection() {
            debug!(
                aspect = aspect.map_or("none", SignalAspect::id),
                "aspect selection rejected in lamp-first mode"
            );
            return Err(WidgetError::AspectSelectionUnavailable);
        }

        self.selection = aspect;
        let update = match aspect {
            Some(aspect) => self.apply(aspect.canonical_state(), ChangeCause::Aspect(aspect)),
            None => SignalUpdate {
                previous: self.state,
                current: self.state,
                aspect: self.current_aspect(),
            },
        };
        debug!(
            aspect = aspect.map_or("none", SignalAspect::id),
            changed = update.changed(),
            "aspect selected"
        );
        Ok(update)
    }

    /// Snapshot of everything a UI needs to draw the widget.
    pub fn view(&self) -> SignalView {
        let locale = self.config.locale;
        let lamps = self
            .state
            .iter()
            .map(|(position, color)| LampView::new(position, color, locale))
            .collect();

        SignalView {
            title: crate::display::title(locale),
            lamps,
            aspect: self.current_aspect(),
            aspect_label: self.aspect_label().to_string(),
            aspect_choices: self.config.mode.offers_aspect_selection().then(|| {
                SignalAspect::ALL
                    .iter()
                    .map(|aspect| (*aspect, aspect.display_name(locale)))
                    .collect()
            }),
            selected: self.selection,
        }
    }

    fn apply(&mut self, next: SignalState, cause: ChangeCause) -> SignalUpdate {
        let previous = self.state;
        if next != previous {
            self.history.push(SignalChange {
                from: previous,
                to: next,
                cause,
                timestamp: Utc::now(),
            });
            self.state = next;
        }
        SignalUpdate {
            previous,
            current: next,
            aspect: classify(&next),
        }
    }
}

impl Default for DepartureSignal {
    fn default() -> Self {
        Self::new()
    }
}
