//! Screen-level flow tests with mocked work futures (no network)

use action_tracker::{ActionTracker, BoxError};
use followers_demo::hooks::ListHooks;
use followers_demo::keys::{FetchKey, FetchOutcome};
use followers_demo::model::Follower;

type Tracker = ActionTracker<FetchKey, FetchOutcome, ListHooks>;

fn mock_user() -> Follower {
    Follower {
        id: 1,
        login: "mockUser".to_string(),
        avatar_url: "https://example.com/avatar.png".to_string(),
    }
}

#[tokio::test]
async fn a_successful_fetch_fills_the_followers_list() {
    let mut tracker: Tracker = ActionTracker::new(ListHooks::default());

    tracker
        .dispatch(FetchKey::FetchFollowers, async {
            Ok(FetchOutcome::Followers(vec![mock_user()]))
        })
        .unwrap();
    assert!(tracker.is_loading(FetchKey::FetchFollowers));

    tracker.settle_all().await;

    assert!(!tracker.is_loading(FetchKey::FetchFollowers));
    assert_eq!(tracker.error_message(FetchKey::FetchFollowers), None);
    assert_eq!(tracker.hooks().followers.len(), 1);
    assert_eq!(tracker.hooks().followers[0].login, "mockUser");
}

#[tokio::test]
async fn a_connectivity_failure_shows_an_error_instead_of_content() {
    let mut tracker: Tracker = ActionTracker::new(ListHooks::default());

    tracker
        .dispatch(FetchKey::FetchFollowers, async {
            Err::<FetchOutcome, BoxError>("not connected to the internet".into())
        })
        .unwrap();
    tracker.settle_all().await;

    assert!(!tracker.is_loading(FetchKey::FetchFollowers));
    let message = tracker.error_message(FetchKey::FetchFollowers).unwrap();
    assert!(message.contains("not connected"));
    assert!(tracker.hooks().followers.is_empty());
}

#[tokio::test]
async fn both_listings_fetch_as_one_group() {
    let mut tracker: Tracker = ActionTracker::new(ListHooks::default());

    type Work = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<FetchOutcome, BoxError>> + Send>,
    >;
    let followers: Work =
        Box::pin(async { Ok(FetchOutcome::Followers(vec![mock_user()])) });
    let following: Work = Box::pin(async { Err("rate limited".into()) });

    tracker
        .dispatch_group(
            vec![
                (FetchKey::FetchFollowers, followers),
                (FetchKey::FetchFollowing, following),
            ],
            |succeeded, failed| {
                assert_eq!(succeeded, vec![FetchKey::FetchFollowers]);
                assert_eq!(failed, vec![FetchKey::FetchFollowing]);
            },
        )
        .unwrap();
    tracker.settle_all().await;

    assert_eq!(tracker.hooks().followers.len(), 1);
    assert!(tracker.hooks().following.is_empty());
    assert!(tracker
        .error_message(FetchKey::FetchFollowing)
        .unwrap()
        .contains("rate limited"));
}
