//! Test utilities for action-tracker applications
//!
//! [`RecordingHooks`] captures every hook invocation so tests can assert on
//! status ordering, outcome routing, and per-key lifecycles:
//!
//! ```ignore
//! use action_tracker::testing::RecordingHooks;
//!
//! let mut tracker = ActionTracker::new(RecordingHooks::default());
//! tracker.dispatch(Key::Fetch, async { Ok(Outcome::Count(1)) })?;
//! tracker.settle_all().await;
//!
//! assert_eq!(tracker.hooks().statuses, vec![(Key::Fetch, true), (Key::Fetch, false)]);
//! assert_eq!(tracker.hooks().successes.len(), 1);
//! ```

use std::error::Error;
use std::sync::{Arc, Mutex};

use crate::hooks::Hooks;
use crate::key::ActionKey;

/// Hook set that records everything it sees.
///
/// The typed `statuses` / `successes` / `errors` vectors support direct
/// equality assertions. `log` is a shared chronological trace
/// (`status:<label>:<flag>`, `success:<label>`, `error:<label>`) that
/// callbacks outside the hook set can append to, for tests that assert
/// ordering across the tracker and its aggregate callbacks.
pub struct RecordingHooks<K, R> {
    /// Every `(key, is_loading)` transition, in order
    pub statuses: Vec<(K, bool)>,
    /// Every success, with a clone of the produced value
    pub successes: Vec<(K, R)>,
    /// Every failure, with the error's display rendering
    pub errors: Vec<(K, String)>,
    /// Shared chronological event trace
    pub log: Arc<Mutex<Vec<String>>>,
}

impl<K, R> Default for RecordingHooks<K, R> {
    fn default() -> Self {
        Self {
            statuses: Vec::new(),
            successes: Vec::new(),
            errors: Vec::new(),
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<K, R> RecordingHooks<K, R> {
    fn trace(&self, entry: String) {
        if let Ok(mut log) = self.log.lock() {
            log.push(entry);
        }
    }
}

impl<K: ActionKey, R: Clone> Hooks<K, R> for RecordingHooks<K, R> {
    fn on_success(&mut self, key: K, value: &R) {
        self.trace(format!("success:{}", key.label()));
        self.successes.push((key, value.clone()));
    }

    fn on_error(&mut self, key: K, error: &(dyn Error + Send + Sync)) {
        self.trace(format!("error:{}", key.label()));
        self.errors.push((key, error.to_string()));
    }

    fn on_status(&mut self, key: K, is_loading: bool) {
        self.trace(format!("status:{}:{}", key.label(), is_loading));
        self.statuses.push((key, is_loading));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    enum TestKey {
        Fetch,
    }

    impl ActionKey for TestKey {
        fn label(&self) -> &'static str {
            "Fetch"
        }

        fn all() -> &'static [Self] {
            &[TestKey::Fetch]
        }

        fn from_label(label: &str) -> Option<Self> {
            (label == "Fetch").then_some(TestKey::Fetch)
        }
    }

    #[test]
    fn records_in_invocation_order() {
        let mut hooks: RecordingHooks<TestKey, u32> = RecordingHooks::default();

        hooks.on_status(TestKey::Fetch, true);
        hooks.on_success(TestKey::Fetch, &7);
        hooks.on_status(TestKey::Fetch, false);

        assert_eq!(
            hooks.statuses,
            vec![(TestKey::Fetch, true), (TestKey::Fetch, false)]
        );
        assert_eq!(hooks.successes, vec![(TestKey::Fetch, 7)]);
        assert_eq!(
            *hooks.log.lock().unwrap(),
            vec!["status:Fetch:true", "success:Fetch", "status:Fetch:false"]
        );
    }
}
