//! Per-key tracked state and completion messages

use std::error::Error;

/// Opaque error type for work supplied to the tracker.
///
/// The tracker never inspects work errors beyond their `Display` rendering,
/// so any boxable error fits.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Tracked state for a single action key.
///
/// Absent from the tracker's map until the key is first dispatched; readers
/// treat an absent entry as `ActionState::default()`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionState {
    /// Whether a dispatch for this key is currently in flight
    pub is_loading: bool,
    /// Description of the last failure, cleared on the next dispatch
    pub error: Option<String>,
}

impl ActionState {
    /// State for a key whose dispatch just started.
    pub(crate) fn loading() -> Self {
        Self {
            is_loading: true,
            error: None,
        }
    }
}

/// Completion message sent from a spawned work task back to the tracker.
///
/// Consumed once by the settle pump and discarded.
#[derive(Debug)]
pub(crate) struct Completion<K, R> {
    pub key: K,
    pub outcome: Result<R, BoxError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_idle() {
        let state = ActionState::default();
        assert!(!state.is_loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn loading_state_clears_error() {
        let state = ActionState::loading();
        assert!(state.is_loading);
        assert_eq!(state.error, None);
    }
}
