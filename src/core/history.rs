//! In-memory log of lamp changes made during one widget session.
//!
//! The public API is immutable: recording a change returns a new history and
//! leaves the original untouched. The widget that owns a history appends in
//! place. Nothing here is persisted.

use super::aspect::SignalAspect;
use super::classifier::classify;
use super::lamp::{LampColor, LampPosition};
use super::state::SignalState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What caused a change of lamp state.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeCause {
    /// A single lamp was set from its picker
    Lamp {
        position: LampPosition,
        color: LampColor,
    },
    /// An aspect was picked by name and all lamps were driven to it
    Aspect(SignalAspect),
}

/// Record of a single change of lamp state.
///
/// # Example
///
/// ```rust
/// use departure_signal::core::{ChangeCause, SignalAspect, SignalChange, SignalState};
/// use chrono::Utc;
///
/// let change = SignalChange {
///     from: SignalState::dark(),
///     to: SignalAspect::Stop.canonical_state(),
///     cause: ChangeCause::Aspect(SignalAspect::Stop),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(change.aspect(), Some(SignalAspect::Stop));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SignalChange {
    /// Lamps before the change
    pub from: SignalState,
    /// Lamps after the change
    pub to: SignalState,
    /// The user action behind the change
    pub cause: ChangeCause,
    /// When the change was applied
    pub timestamp: DateTime<Utc>,
}

impl SignalChange {
    /// Aspect presented after the change, if any.
    pub fn aspect(&self) -> Option<SignalAspect> {
        classify(&self.to)
    }
}

/// Ordered history of lamp changes.
///
/// # Example
///
/// ```rust
/// use departure_signal::core::{
///     ChangeCause, LampColor, LampPosition, SignalChange, SignalHistory, SignalState,
/// };
/// use chrono::Utc;
///
/// let dark = SignalState::dark();
/// let green = dark.with_lamp(LampPosition::Third, LampColor::Green).unwrap();
///
/// let history = SignalHistory::new().record(SignalChange {
///     from: dark,
///     to: green,
///     cause: ChangeCause::Lamp {
///         position: LampPosition::Third,
///         color: LampColor::Green,
///     },
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.path(), vec![&dark, &green]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SignalHistory {
    changes: Vec<SignalChange>,
}

impl SignalHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            changes: Vec::new(),
        }
    }

    /// Record a change, returning a new history.
    pub fn record(&self, change: SignalChange) -> Self {
        let mut changes = self.changes.clone();
        changes.push(change);
        Self { changes }
    }

    /// Append a change in place.
    pub(crate) fn push(&mut self, change: SignalChange) {
        self.changes.push(change);
    }

    /// States passed through: the first change's source, then each target.
    pub fn path(&self) -> Vec<&SignalState> {
        let mut path = Vec::with_capacity(self.changes.len() + 1);
        if let Some(first) = self.changes.first() {
            path.push(&first.from);
        }
        for change in &self.changes {
            path.push(&change.to);
        }
        path
    }

    /// Aspects presented along the path, `None` where nothing matched.
    pub fn aspects(&self) -> Vec<Option<SignalAspect>> {
        self.path().into_iter().map(classify).collect()
    }

    /// Time between the first and last change.
    ///
    /// Returns `None` for an empty history.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.changes.first(), self.changes.last()) {
            last.timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok()
        } else {
            None
        }
    }

    /// All recorded changes, oldest first.
    pub fn changes(&self) -> &[SignalChange] {
        &self.changes
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lamp_change(from: SignalState, position: LampPosition, color: LampColor) -> SignalChange {
        SignalChange {
            from,
            to: from.with_lamp(position, color).unwrap(),
            cause: ChangeCause::Lamp { position, color },
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = SignalHistory::new();
        assert!(history.is_empty());
        assert!(history.path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = SignalHistory::new();
        let change = lamp_change(SignalState::dark(), LampPosition::Second, LampColor::Red);

        let new_history = history.record(change);

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn push_appends_in_place() {
        let first = lamp_change(SignalState::dark(), LampPosition::Second, LampColor::Red);
        let second = lamp_change(first.to, LampPosition::Second, LampColor::Off);
        let mut history = SignalHistory::new();

        history.push(first.clone());
        history.push(second.clone());

        assert_eq!(history.changes(), &[first, second]);
        assert_eq!(history.path().len(), 3);
    }

    #[test]
    fn path_follows_changes_in_order() {
        let first = lamp_change(SignalState::dark(), LampPosition::First, LampColor::Yellow);
        let second = lamp_change(first.to, LampPosition::Fourth, LampColor::Yellow);
        let history = SignalHistory::new().record(first.clone()).record(second.clone());

        let path = history.path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &SignalState::dark());
        assert_eq!(path[1], &first.to);
        assert_eq!(path[2], &second.to);
    }

    #[test]
    fn aspects_classify_each_step() {
        let first = lamp_change(SignalState::dark(), LampPosition::First, LampColor::Yellow);
        let second = lamp_change(first.to, LampPosition::Fourth, LampColor::Yellow);
        let history = SignalHistory::new().record(first).record(second);

        assert_eq!(
            history.aspects(),
            vec![None, None, Some(SignalAspect::Alert)]
        );
    }

    #[test]
    fn single_change_has_zero_duration() {
        let history = SignalHistory::new().record(lamp_change(
            SignalState::dark(),
            LampPosition::Third,
            LampColor::Green,
        ));
        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn duration_spans_first_to_last() {
        let start = Utc::now();
        let mut first = lamp_change(SignalState::dark(), LampPosition::Third, LampColor::Green);
        first.timestamp = start;
        let mut second = lamp_change(first.to, LampPosition::Third, LampColor::Off);
        second.timestamp = start + chrono::Duration::milliseconds(250);

        let history = SignalHistory::new().record(first).record(second);
        assert_eq!(history.duration(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = SignalHistory::new().record(SignalChange {
            from: SignalState::dark(),
            to: SignalAspect::Caution.canonical_state(),
            cause: ChangeCause::Aspect(SignalAspect::Caution),
            timestamp: Utc::now(),
        });

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: SignalHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history.len(), deserialized.len());
        assert_eq!(history.changes()[0].to, deserialized.changes()[0].to);
        assert_eq!(history.changes()[0].cause, deserialized.changes()[0].cause);
    }
}
