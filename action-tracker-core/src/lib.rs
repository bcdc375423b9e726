//! Core traits and types for action-tracker
//!
//! This crate provides generic bookkeeping for named asynchronous
//! operations: per-action loading flags, captured failure descriptions, and
//! lifecycle hooks, independent of what the operations themselves do.
//!
//! # Core Concepts
//!
//! - **ActionKey**: enumerated identifier for one kind of async operation
//! - **ActionTracker**: owns per-key state, dispatches work, settles outcomes
//! - **Hooks**: injected capability object receiving outcomes and transitions
//! - **Outcome enum**: user-defined typed result channel for all actions
//!
//! # Basic Example
//!
//! ```ignore
//! use action_tracker_core::prelude::*;
//!
//! #[derive(ActionKey, Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum Key {
//!     FetchFollowers,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum Outcome {
//!     Followers(Vec<String>),
//! }
//!
//! #[derive(Default)]
//! struct AppHooks {
//!     followers: Vec<String>,
//! }
//!
//! impl Hooks<Key, Outcome> for AppHooks {
//!     fn on_success(&mut self, _key: Key, value: &Outcome) {
//!         let Outcome::Followers(list) = value;
//!         self.followers = list.clone();
//!     }
//! }
//!
//! let mut tracker = ActionTracker::new(AppHooks::default());
//! tracker.dispatch(Key::FetchFollowers, async {
//!     Ok(Outcome::Followers(fetch().await?))
//! })?;
//! tracker.settle_all().await;
//!
//! assert!(!tracker.is_loading(Key::FetchFollowers));
//! println!("{} followers", tracker.hooks().followers.len());
//! ```
//!
//! # Dispatch lifecycle
//!
//! `dispatch` sets the key loading and fires the status hook synchronously,
//! then spawns the work onto the tokio runtime. The spawned task sends its
//! outcome back over an internal channel; the owner applies completions with
//! the `settle_*` methods on its own single execution context, where the
//! success/error hook, the optional per-dispatch callback, and the closing
//! status notification run in that order. Observers polling
//! `is_loading`/`error_message` between settles therefore see exactly one
//! clean start/end pair per dispatch.

pub mod error;
pub mod hooks;
pub mod identity;
pub mod key;
pub mod state;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod tracker;

// Core trait exports
pub use key::ActionKey;

// State exports
pub use state::{ActionState, BoxError};

// Tracker exports
pub use tracker::ActionTracker;

// Hook exports
pub use hooks::{ComposedHooks, Hooks, LoggingHooks, NoopHooks};

// Identity exports
pub use identity::{format_timestamp, timestamp, trace_action};

// Error exports
pub use error::TrackerError;

// Testing exports (requires "testing" feature)
#[cfg(any(test, feature = "testing"))]
pub use testing::RecordingHooks;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::TrackerError;
    pub use crate::hooks::{ComposedHooks, Hooks, LoggingHooks, NoopHooks};
    pub use crate::identity::{format_timestamp, timestamp, trace_action};
    pub use crate::key::ActionKey;
    pub use crate::state::{ActionState, BoxError};
    pub use crate::tracker::ActionTracker;
    #[cfg(any(test, feature = "testing"))]
    pub use crate::testing::RecordingHooks;
}
