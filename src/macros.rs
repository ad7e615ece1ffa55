//! Macros for concise lamp configurations.

/// Build a validated `SignalState` from four color names, lamp 1 first.
///
/// Expands to `SignalState::new(..)`, so the result is a
/// `Result<SignalState, LampError>`.
///
/// # Example
///
/// ```
/// use departure_signal::core::{classify, SignalAspect};
/// use departure_signal::signal_state;
///
/// let stop = signal_state!(Off, Red, Off, Off).unwrap();
/// assert_eq!(classify(&stop), Some(SignalAspect::Stop));
///
/// assert!(signal_state!(Red, Off, Off, Off).is_err());
/// ```
#[macro_export]
macro_rules! signal_state {
    ($first:ident, $second:ident, $third:ident, $fourth:ident $(,)?) => {
        $crate::core::SignalState::new([
            $crate::core::LampColor::$first,
            $crate::core::LampColor::$second,
            $crate::core::LampColor::$third,
            $crate::core::LampColor::$fourth,
        ])
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LampColor, LampError, LampPosition};

    #[test]
    fn signal_state_macro_builds_valid_state() {
        let state = signal_state!(Yellow, Off, Off, Yellow).unwrap();
        assert_eq!(
            state.lamps(),
            &[LampColor::Yellow, LampColor::Off, LampColor::Off, LampColor::Yellow]
        );
    }

    #[test]
    fn signal_state_macro_rejects_invalid_state() {
        let result = signal_state!(Off, Off, Red, Off);
        assert_eq!(
            result,
            Err(LampError::ColorNotAllowed {
                position: LampPosition::Third,
                color: LampColor::Red,
            })
        );
    }

    #[test]
    fn signal_state_macro_allows_trailing_comma() {
        assert!(signal_state!(Off, Off, Off, Off,).unwrap().is_dark());
    }
}
