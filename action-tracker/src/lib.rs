//! action-tracker: per-action loading/error bookkeeping for async work
//!
//! Name an asynchronous operation with an enumerated key, dispatch it, and
//! poll its loading flag and last error from a display layer — without the
//! operation knowing anything about rendering, and without the display layer
//! knowing anything about transports.
//!
//! # Example
//! ```ignore
//! use action_tracker::prelude::*;
//!
//! #[derive(ActionKey, Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum Key {
//!     FetchFollowers,
//!     FetchFollowing,
//! }
//!
//! let mut tracker = ActionTracker::new(NoopHooks);
//! tracker.dispatch(Key::FetchFollowers, async { Ok(load().await?) })?;
//! tracker.settle_all().await;
//! ```

// Re-export everything from core
pub use action_tracker_core::*;

// Re-export derive macros
pub use action_tracker_macros::ActionKey;

/// Prelude for convenient imports
pub mod prelude {
    // Traits
    pub use action_tracker_core::{ActionKey, Hooks};

    // Tracker
    pub use action_tracker_core::{ActionState, ActionTracker, BoxError, TrackerError};

    // Hook implementations
    pub use action_tracker_core::{ComposedHooks, LoggingHooks, NoopHooks};

    // Identity helpers
    pub use action_tracker_core::{format_timestamp, timestamp, trace_action};

    // Derive macros
    pub use action_tracker_macros::ActionKey;
}
