//! Screen state accumulated from fetch outcomes
//!
//! The display layer reads these lists back through `tracker.hooks()`; only
//! the tracker ever writes them.

use action_tracker::Hooks;

use crate::keys::{FetchKey, FetchOutcome};
use crate::model::Follower;

/// Domain hooks for the followers screen
#[derive(Debug, Default)]
pub struct ListHooks {
    pub followers: Vec<Follower>,
    pub following: Vec<Follower>,
}

impl Hooks<FetchKey, FetchOutcome> for ListHooks {
    fn on_success(&mut self, _key: FetchKey, value: &FetchOutcome) {
        match value {
            FetchOutcome::Followers(list) => self.followers = list.clone(),
            FetchOutcome::Following(list) => self.following = list.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn follower(id: u64, login: &str) -> Follower {
        Follower {
            id,
            login: login.to_string(),
            avatar_url: format!("https://example.com/{}.png", login),
        }
    }

    #[test]
    fn success_routes_by_outcome_variant() {
        let mut hooks = ListHooks::default();

        hooks.on_success(
            FetchKey::FetchFollowers,
            &FetchOutcome::Followers(vec![follower(1, "mockUser")]),
        );
        assert_eq!(hooks.followers.len(), 1);
        assert_eq!(hooks.followers[0].login, "mockUser");
        assert!(hooks.following.is_empty());

        hooks.on_success(
            FetchKey::FetchFollowing,
            &FetchOutcome::Following(vec![follower(2, "octocat")]),
        );
        assert_eq!(hooks.following.len(), 1);
        assert_eq!(hooks.followers.len(), 1);
    }

    #[test]
    fn a_refetch_replaces_the_previous_list() {
        let mut hooks = ListHooks::default();

        hooks.on_success(
            FetchKey::FetchFollowers,
            &FetchOutcome::Followers(vec![follower(1, "a"), follower(2, "b")]),
        );
        hooks.on_success(
            FetchKey::FetchFollowers,
            &FetchOutcome::Followers(vec![follower(3, "c")]),
        );

        assert_eq!(hooks.followers.len(), 1);
        assert_eq!(hooks.followers[0].login, "c");
    }
}
