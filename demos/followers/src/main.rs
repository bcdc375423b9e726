//! Followers list - action-tracker example
//!
//! This demo exercises the full tracker pattern against a real API:
//! 1. A fetch key is dispatched with a work future (GitHub REST call)
//! 2. The tracker marks the key loading and spawns the work
//! 3. `settle_all` routes outcomes through the domain hooks
//! 4. The display reads loading/error/content state per key and renders
//!
//! UI actions (a simulated profile tap, a pull-to-refresh) are not tracked;
//! they only emit an analytics event with the key's label and a timestamp.
//!
//! # Usage
//!
//! ```sh
//! # Followers of the default user
//! cargo run -p followers-demo
//!
//! # Followers and following for a user, fetched as one group
//! cargo run -p followers-demo -- --user torvalds --following
//!
//! # Simulate opening the first follower's profile
//! cargo run -p followers-demo -- --open 0
//! ```

use std::error::Error;
use std::future::Future;
use std::pin::Pin;

use action_tracker::{trace_action, ActionTracker, BoxError};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use followers_demo::api;
use followers_demo::hooks::ListHooks;
use followers_demo::keys::{FetchKey, FetchOutcome, UiKey};

type FollowersTracker = ActionTracker<FetchKey, FetchOutcome, ListHooks>;

/// Work futures are boxed so group entries share one type
type Work = Pin<Box<dyn Future<Output = Result<FetchOutcome, BoxError>> + Send>>;

/// Followers list demo - action-tracker example
#[derive(Parser, Debug)]
#[command(name = "followers")]
#[command(about = "A followers listing demonstrating action-tracker patterns")]
struct Args {
    /// GitHub login to inspect
    #[arg(long, short, default_value = "octocat")]
    user: String,

    /// Also fetch who the user follows (runs both fetches as one group)
    #[arg(long, short)]
    following: bool,

    /// Fetch the followers list a second time (simulated pull-to-refresh)
    #[arg(long)]
    refresh: bool,

    /// Open the Nth follower's profile after fetching (simulated tap)
    #[arg(long)]
    open: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut tracker: FollowersTracker = ActionTracker::new(ListHooks::default());

    if args.following {
        tracker.dispatch_group(
            vec![
                (FetchKey::FetchFollowers, followers_work(&args.user)),
                (FetchKey::FetchFollowing, following_work(&args.user)),
            ],
            |succeeded, failed| {
                tracing::info!(
                    succeeded = succeeded.len(),
                    failed = failed.len(),
                    "Fetch group finished"
                );
            },
        )?;
    } else {
        tracker.dispatch(FetchKey::FetchFollowers, followers_work(&args.user))?;
    }

    for key in [FetchKey::FetchFollowers, FetchKey::FetchFollowing] {
        if tracker.is_loading(key) {
            println!("{}: loading...", section_title(key, &args.user));
        }
    }

    tracker.settle_all().await;
    render(&tracker, &args);

    if args.refresh {
        trace_action(UiKey::Refresh);
        tracker.dispatch(FetchKey::FetchFollowers, followers_work(&args.user))?;
        tracker.settle_all().await;
        render(&tracker, &args);
    }

    if let Some(index) = args.open {
        open_profile(&tracker, index);
    }

    Ok(())
}

fn followers_work(user: &str) -> Work {
    let user = user.to_string();
    Box::pin(async move {
        let listing = api::fetch_followers(&user).await?;
        Ok(FetchOutcome::Followers(listing))
    })
}

fn following_work(user: &str) -> Work {
    let user = user.to_string();
    Box::pin(async move {
        let listing = api::fetch_following(&user).await?;
        Ok(FetchOutcome::Following(listing))
    })
}

fn section_title(key: FetchKey, user: &str) -> String {
    match key {
        FetchKey::FetchFollowers => format!("Followers of {}", user),
        FetchKey::FetchFollowing => format!("Followed by {}", user),
    }
}

fn render(tracker: &FollowersTracker, args: &Args) {
    render_section(tracker, FetchKey::FetchFollowers, &args.user);
    if args.following {
        render_section(tracker, FetchKey::FetchFollowing, &args.user);
    }
}

/// Loading, error and content are mutually exclusive for a key; render
/// whichever state the tracker reports.
fn render_section(tracker: &FollowersTracker, key: FetchKey, user: &str) {
    let title = section_title(key, user);

    if tracker.is_loading(key) {
        println!("{}: loading...", title);
        return;
    }
    if let Some(message) = tracker.error_message(key) {
        println!("{}: error: {}", title, message);
        return;
    }

    let listing = match key {
        FetchKey::FetchFollowers => &tracker.hooks().followers,
        FetchKey::FetchFollowing => &tracker.hooks().following,
    };
    println!("{} ({}):", title, listing.len());
    for entry in listing {
        println!("  {:>10}  {}", entry.id, entry.login);
    }
}

fn open_profile(tracker: &FollowersTracker, index: usize) {
    match tracker.hooks().followers.get(index) {
        Some(follower) => {
            trace_action(UiKey::OpenProfile);
            println!("Opening profile of {} ({})", follower.login, follower.avatar_url);
        }
        None => eprintln!("No follower at index {}", index),
    }
}
