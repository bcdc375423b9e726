//! Lifecycle hooks for tracked dispatches
//!
//! Hooks are the tracker's extension seam: a capability object injected at
//! construction time receives every outcome and loading transition. Domain
//! state (the data a display layer renders) lives inside the hook
//! implementation and is read back through
//! [`ActionTracker::hooks`](crate::ActionTracker::hooks).

use std::error::Error;

use crate::key::ActionKey;

/// Callbacks invoked by the tracker around each dispatched operation.
///
/// All methods default to no-ops, so implementors only write the ones they
/// care about. The tracker records failure descriptions into its own state
/// map before calling [`on_error`](Hooks::on_error); an implementation
/// cannot lose that bookkeeping.
///
/// # Type Parameters
/// * `K` - The action key type
/// * `R` - The outcome type produced by work futures
pub trait Hooks<K: ActionKey, R> {
    /// Called once per successful dispatch with the produced value.
    fn on_success(&mut self, key: K, value: &R) {
        let _ = (key, value);
    }

    /// Called once per failed dispatch with the work's error.
    fn on_error(&mut self, key: K, error: &(dyn Error + Send + Sync)) {
        let _ = (key, error);
    }

    /// Called on every loading transition: `true` when the dispatch starts,
    /// `false` after its outcome has been routed.
    fn on_status(&mut self, key: K, is_loading: bool) {
        let _ = (key, is_loading);
    }
}

/// A no-op hook set that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHooks;

impl<K: ActionKey, R> Hooks<K, R> for NoopHooks {}

/// Hooks that log every transition and outcome (for debugging)
#[derive(Debug, Clone, Default)]
pub struct LoggingHooks {
    /// Whether to log loading transitions
    pub log_status: bool,
    /// Whether to log outcomes
    pub log_outcomes: bool,
}

impl LoggingHooks {
    /// Create logging hooks with default settings (outcomes only)
    pub fn new() -> Self {
        Self {
            log_status: false,
            log_outcomes: true,
        }
    }

    /// Create logging hooks that log transitions and outcomes
    pub fn verbose() -> Self {
        Self {
            log_status: true,
            log_outcomes: true,
        }
    }
}

impl<K: ActionKey, R> Hooks<K, R> for LoggingHooks {
    fn on_success(&mut self, key: K, _value: &R) {
        if self.log_outcomes {
            tracing::debug!(action = %key.label(), "Action succeeded");
        }
    }

    fn on_error(&mut self, key: K, error: &(dyn Error + Send + Sync)) {
        if self.log_outcomes {
            tracing::warn!(action = %key.label(), error = %error, "Action failed");
        }
    }

    fn on_status(&mut self, key: K, is_loading: bool) {
        if self.log_status {
            tracing::debug!(
                action = %key.label(),
                is_loading = is_loading,
                "Loading transition"
            );
        }
    }
}

/// Compose multiple hook sets into one
pub struct ComposedHooks<K: ActionKey, R> {
    hooks: Vec<Box<dyn Hooks<K, R>>>,
}

impl<K: ActionKey, R> std::fmt::Debug for ComposedHooks<K, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComposedHooks")
            .field("hooks_count", &self.hooks.len())
            .finish()
    }
}

impl<K: ActionKey, R> Default for ComposedHooks<K, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ActionKey, R> ComposedHooks<K, R> {
    /// Create an empty composition
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Add a hook set to the composition
    pub fn add<H: Hooks<K, R> + 'static>(&mut self, hooks: H) {
        self.hooks.push(Box::new(hooks));
    }
}

impl<K: ActionKey, R> Hooks<K, R> for ComposedHooks<K, R> {
    fn on_status(&mut self, key: K, is_loading: bool) {
        if is_loading {
            for hooks in &mut self.hooks {
                hooks.on_status(key, true);
            }
        } else {
            // Completion-side callbacks run in reverse order for proper nesting
            for hooks in self.hooks.iter_mut().rev() {
                hooks.on_status(key, false);
            }
        }
    }

    fn on_success(&mut self, key: K, value: &R) {
        for hooks in self.hooks.iter_mut().rev() {
            hooks.on_success(key, value);
        }
    }

    fn on_error(&mut self, key: K, error: &(dyn Error + Send + Sync)) {
        for hooks in self.hooks.iter_mut().rev() {
            hooks.on_error(key, error);
        }
    }
}
