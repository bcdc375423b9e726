//! User summaries decoded from the GitHub REST API

use serde::Deserialize;

/// One entry of a followers/following listing
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Follower {
    pub id: u64,
    pub login: String,
    pub avatar_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_the_listing_wire_format() {
        let body = r#"[
            {"id": 1, "login": "mockUser", "avatar_url": "https://example.com/avatar.png"}
        ]"#;

        let listing: Vec<Follower> = serde_json::from_str(body).unwrap();

        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].id, 1);
        assert_eq!(listing[0].login, "mockUser");
        assert_eq!(listing[0].avatar_url, "https://example.com/avatar.png");
    }

    #[test]
    fn extra_fields_are_ignored() {
        // The real API returns far more per user than the screen needs
        let body = r#"[{"id": 2, "login": "octocat", "avatar_url": "https://example.com/a.png",
                        "type": "User", "site_admin": false}]"#;

        let listing: Vec<Follower> = serde_json::from_str(body).unwrap();
        assert_eq!(listing[0].login, "octocat");
    }
}
