//! GitHub REST client
//!
//! Supplies the work futures dispatched through the tracker. The tracker
//! never sees this module's types beyond `Result<FetchOutcome, BoxError>`;
//! transport and decoding stay behind the dispatch boundary.

use crate::model::Follower;

const API_ROOT: &str = "https://api.github.com";

/// Fetch error type
#[derive(Debug)]
pub enum FetchError {
    Request(reqwest::Error),
    UserNotFound(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Request(e) => write!(f, "Listing request failed: {}", e),
            FetchError::UserNotFound(user) => write!(f, "User not found: {}", user),
        }
    }
}

impl std::error::Error for FetchError {}

/// Fetch the users following `user`.
pub async fn fetch_followers(user: &str) -> Result<Vec<Follower>, FetchError> {
    fetch_listing(user, "followers").await
}

/// Fetch the users `user` follows.
pub async fn fetch_following(user: &str) -> Result<Vec<Follower>, FetchError> {
    fetch_listing(user, "following").await
}

async fn fetch_listing(user: &str, relation: &str) -> Result<Vec<Follower>, FetchError> {
    let url = format!("{}/users/{}/{}", API_ROOT, user, relation);

    // GitHub rejects requests without a User-Agent
    let response = reqwest::Client::new()
        .get(&url)
        .header(reqwest::header::USER_AGENT, "followers-demo")
        .send()
        .await
        .map_err(FetchError::Request)?;

    if response.status() == reqwest::StatusCode::NOT_FOUND {
        return Err(FetchError::UserNotFound(user.to_string()));
    }

    let response = response.error_for_status().map_err(FetchError::Request)?;
    response.json().await.map_err(FetchError::Request)
}
