use thiserror::Error;

/// Errors returned when a dispatch is rejected at submission.
///
/// Work failures never appear here; they are opaque to the tracker and are
/// surfaced through [`error_message`](crate::ActionTracker::error_message)
/// and the error hook.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrackerError {
    /// A dispatch was requested for a key that is already loading.
    #[error("action '{0}' is already in flight")]
    AlreadyInFlight(&'static str),

    /// A group contained the same key more than once.
    #[error("action '{0}' appears more than once in the group")]
    DuplicateInGroup(&'static str),
}
