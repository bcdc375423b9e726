//! Action keys and the typed outcome channel for the followers screen

use action_tracker::ActionKey;

use crate::model::Follower;

/// Data-fetch actions tracked with loading/error state
#[derive(ActionKey, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FetchKey {
    FetchFollowers,
    FetchFollowing,
}

/// UI actions (taps/navigation) - logged for analytics, never tracked
#[derive(ActionKey, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UiKey {
    OpenProfile,
    Refresh,
}

/// Typed outcomes for the fetch actions
///
/// One variant per fetch key keeps hook bodies free of downcasts: the
/// compiler knows which payload each action produced.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchOutcome {
    Followers(Vec<Follower>),
    Following(Vec<Follower>),
}
