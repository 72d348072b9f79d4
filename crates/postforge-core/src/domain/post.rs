use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a generated or hand-written social post owned by one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    /// Character count of `content` unless the generator reported one.
    pub length: u32,
    /// Set once at creation, never bumped on update.
    pub created: DateTime<Utc>,
    /// Flips the first time content diverges from its original value.
    pub edited: bool,
}

impl Post {
    /// Create a new post with length computed from the content.
    pub fn new(user_id: Uuid, title: String, content: String) -> Self {
        let length = content.chars().count() as u32;
        Self::with_length(user_id, title, content, length)
    }

    /// Create a new post with an explicitly reported length.
    pub fn with_length(user_id: Uuid, title: String, content: String, length: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            title,
            content,
            length,
            created: Utc::now(),
            edited: false,
        }
    }

    /// Replace the post's content wholesale, marking it edited on first
    /// divergence. Length falls back to the new content's character count.
    pub fn replace_content(&mut self, content: String, length: Option<u32>) {
        if content != self.content {
            self.edited = true;
        }
        self.length = length.unwrap_or_else(|| content.chars().count() as u32);
        self.content = content;
    }
}

/// Listing order for a user's posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostOrder {
    NewestFirst,
    OldestFirst,
}

impl PostOrder {
    /// Parse the `frame` query parameter; anything but `most_recent` means oldest-first.
    pub fn from_frame(frame: &str) -> Self {
        if frame == "most_recent" {
            Self::NewestFirst
        } else {
            Self::OldestFirst
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_post_computes_length_and_is_unedited() {
        let post = Post::new(
            Uuid::new_v4(),
            "Title".to_string(),
            "<p>Hello</p>".to_string(),
        );

        assert_eq!(post.length, 12);
        assert!(!post.edited);
    }

    #[test]
    fn replace_content_marks_edited_once_diverged() {
        let mut post = Post::new(Uuid::new_v4(), "Title".to_string(), "<p>One</p>".to_string());

        post.replace_content("<p>One</p>".to_string(), None);
        assert!(!post.edited, "identical content is not an edit");

        post.replace_content("<p>Two</p>".to_string(), None);
        assert!(post.edited);
        assert_eq!(post.length, 10);
    }

    #[test]
    fn replace_content_prefers_reported_length() {
        let mut post = Post::new(Uuid::new_v4(), "Title".to_string(), "<p>One</p>".to_string());

        post.replace_content("<p>Longer content</p>".to_string(), Some(7));
        assert_eq!(post.length, 7);
    }

    #[test]
    fn frame_parsing() {
        assert_eq!(PostOrder::from_frame("most_recent"), PostOrder::NewestFirst);
        assert_eq!(PostOrder::from_frame("oldest"), PostOrder::OldestFirst);
    }
}
