use serde::{Deserialize, Serialize};
use url::Url;

/// A single shared link record in the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    /// Id assigned by the service on creation.
    #[serde(rename = "storyId")]
    pub id: String,
    pub title: String,
    pub author: String,
    pub url: String,
    /// Username of the poster.
    pub username: String,
    pub created_at: String,
}

impl Story {
    /// Hostname parsed out of the story URL, computed on demand and never
    /// stored.
    #[must_use]
    pub fn host_name(&self) -> Option<String> {
        Url::parse(&self.url)
            .ok()?
            .host_str()
            .map(std::string::ToString::to_string)
    }
}

/// The current user of the client. The service keys everything about a user
/// by username; `own_stories` arrives under the wire field `stories`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    /// Display name.
    pub name: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub favorites: Vec<Story>,
    #[serde(default, rename = "stories")]
    pub own_stories: Vec<Story>,
}

/// Bearer credential pair returned on login/signup. This is the only state
/// expected to survive a restart of the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub token: String,
}

/// Client-supplied story fields for create and update calls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoryDraft {
    pub title: String,
    pub author: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(url: &str) -> Story {
        Story {
            id: "s1".to_string(),
            title: "A title".to_string(),
            author: "An author".to_string(),
            url: url.to_string(),
            username: "poster".to_string(),
            created_at: "2020-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn host_name_returns_full_host() {
        let story = story("https://sub.example.com/a/b");
        assert_eq!(story.host_name().as_deref(), Some("sub.example.com"));
    }

    #[test]
    fn host_name_is_none_for_unparseable_url() {
        let story = story("not a url");
        assert_eq!(story.host_name(), None);
    }

    #[test]
    fn story_wire_names_are_camel_case() {
        let value = serde_json::to_value(story("http://x.com")).expect("serialize story");
        assert!(value.get("storyId").is_some());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("id").is_none());
    }

    #[test]
    fn user_own_stories_deserialize_from_stories_field() {
        let user: User = serde_json::from_str(
            r#"{
                "username": "alice",
                "name": "Alice",
                "createdAt": "2020-01-01T00:00:00Z",
                "favorites": [],
                "stories": [{
                    "storyId": "s1",
                    "title": "A title",
                    "author": "An author",
                    "url": "http://x.com",
                    "username": "alice",
                    "createdAt": "2020-01-01T00:00:00Z"
                }]
            }"#,
        )
        .expect("deserialize user");
        assert_eq!(user.own_stories.len(), 1);
        assert_eq!(user.own_stories[0].id, "s1");
    }
}
