//! The five named indications of a departure signal.

use super::classifier;
use super::state::SignalState;
use serde::{Deserialize, Serialize};

/// Overall indication presented to the train crew.
///
/// Each aspect is defined by exactly one canonical lamp configuration,
/// see [`classifier::CANONICAL_ASPECTS`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalAspect {
    /// 出発進行
    Proceed,
    /// 出発減速
    ReduceSpeed,
    /// 出発注意
    Caution,
    /// 出発警戒
    Alert,
    /// 出発停止
    Stop,
}

impl SignalAspect {
    /// All aspects, in selector order.
    pub const ALL: [SignalAspect; 5] = [
        Self::Proceed,
        Self::ReduceSpeed,
        Self::Caution,
        Self::Alert,
        Self::Stop,
    ];

    /// Stable identifier, independent of any display locale.
    ///
    /// Matches the serialized form; used as the aspect field in log events.
    pub fn id(self) -> &'static str {
        match self {
            Self::Proceed => "proceed",
            Self::ReduceSpeed => "reduce_speed",
            Self::Caution => "caution",
            Self::Alert => "alert",
            Self::Stop => "stop",
        }
    }

    /// The lamp configuration that presents this aspect.
    ///
    /// # Example
    ///
    /// ```rust
    /// use departure_signal::core::{LampColor, SignalAspect};
    ///
    /// let stop = SignalAspect::Stop.canonical_state();
    /// assert_eq!(
    ///     stop.lamps(),
    ///     &[LampColor::Off, LampColor::Red, LampColor::Off, LampColor::Off]
    /// );
    /// ```
    pub fn canonical_state(self) -> SignalState {
        classifier::aspect_to_state(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<_> = SignalAspect::ALL.iter().map(|a| a.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SignalAspect::ALL.len());
    }

    #[test]
    fn ids_match_serialized_form() {
        for aspect in SignalAspect::ALL {
            let json = serde_json::to_string(&aspect).unwrap();
            assert_eq!(json, format!("\"{}\"", aspect.id()));
        }
    }
}
