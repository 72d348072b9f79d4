//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use postforge_core::domain::{Post, TopicSuggestion};

/// Request to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    pub email: String,
    pub fullname: String,
    pub password: String,
}

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request to continue with a Google ID token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleAuthRequest {
    pub token: String,
}

/// Response containing a user's public information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub fullname: String,
    pub username: String,
    pub email: String,
}

/// Response containing authentication tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Request to generate a post from a topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFromTopicRequest {
    pub topic: String,
    pub tone: Option<String>,
    pub cta: Option<String>,
}

/// Request to generate a post from a web page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFromUrlRequest {
    pub w_url: String,
    pub tone: Option<String>,
    pub cta: Option<String>,
}

/// Request to generate a post from a YouTube video.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFromYoutubeRequest {
    pub y_url: String,
    pub tone: Option<String>,
    pub cta: Option<String>,
}

/// Request to replace a post's content from the editor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditContentRequest {
    pub content: String,
}

/// Request for an AI-assisted rewrite of editor content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditAiRequest {
    pub content: String,
    /// Edit instruction; "improve" when omitted.
    pub prompt: Option<String>,
}

/// Response for an AI-assisted rewrite (nothing is persisted).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditAiResponse {
    pub result: String,
}

/// Request for topic suggestions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicsRequest {
    pub field: String,
    pub sub_field: String,
}

/// Response with topic suggestions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicsResponse {
    pub field: String,
    pub sub_field: String,
    pub suggestions: Vec<TopicSuggestion>,
}

/// Listing query parameters for GET /api/posts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListPostsQuery {
    pub frame: Option<String>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

/// A post as returned by the API, with the derived `time_ago` display field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub length: u32,
    pub created: DateTime<Utc>,
    pub edited: bool,
    pub time_ago: String,
}

impl PostResponse {
    pub fn from_post(post: &Post) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title.clone(),
            content: post.content.clone(),
            length: post.length,
            created: post.created,
            edited: post.edited,
            time_ago: time_ago(post.created, Utc::now()),
        }
    }
}

/// Human-readable elapsed time, from "just now" up to years.
fn time_ago(created: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - created).num_seconds().max(0);

    match seconds {
        s if s < 60 => "just now".to_string(),
        s if s < 3_600 => format!("{} mins ago", s / 60),
        s if s < 86_400 => format!("{} hours ago", s / 3_600),
        s if s < 2_592_000 => format!("{} days ago", s / 86_400),
        s if s < 31_536_000 => format!("{} months ago", s / 2_592_000),
        s => format!("{} years ago", s / 31_536_000),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    #[test]
    fn time_ago_thresholds() {
        let now = Utc::now();

        assert_eq!(time_ago(now - TimeDelta::seconds(30), now), "just now");
        assert_eq!(time_ago(now - TimeDelta::minutes(5), now), "5 mins ago");
        assert_eq!(time_ago(now - TimeDelta::hours(3), now), "3 hours ago");
        assert_eq!(time_ago(now - TimeDelta::days(2), now), "2 days ago");
        assert_eq!(time_ago(now - TimeDelta::days(90), now), "3 months ago");
        assert_eq!(time_ago(now - TimeDelta::days(800), now), "2 years ago");
    }

    #[test]
    fn future_timestamps_read_as_just_now() {
        let now = Utc::now();
        assert_eq!(time_ago(now + TimeDelta::minutes(5), now), "just now");
    }
}
