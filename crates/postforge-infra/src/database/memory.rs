//! In-memory repositories - used when no database is configured.
//!
//! Data is lost on process restart; suitable for development and tests, not
//! for multi-instance deployments.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use postforge_core::domain::{Post, PostOrder, User};
use postforge_core::error::RepoError;
use postforge_core::ports::{BaseRepository, PostRepository, UserRepository};

/// In-memory user repository backed by a `RwLock<HashMap>`.
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn save(&self, user: User) -> Result<User, RepoError> {
        self.users.write().await.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        match self.users.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned())
    }
}

/// In-memory post repository backed by a `RwLock<HashMap>`.
pub struct InMemoryPostRepository {
    posts: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        Ok(self.posts.read().await.get(&id).cloned())
    }

    async fn save(&self, post: Post) -> Result<Post, RepoError> {
        self.posts.write().await.insert(post.id, post.clone());
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        match self.posts.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list_by_user(
        &self,
        user_id: Uuid,
        order: PostOrder,
        page: u64,
        per_page: u64,
    ) -> Result<Vec<Post>, RepoError> {
        let posts = self.posts.read().await;

        let mut owned: Vec<Post> = posts
            .values()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect();

        match order {
            PostOrder::NewestFirst => owned.sort_by(|a, b| b.created.cmp(&a.created)),
            PostOrder::OldestFirst => owned.sort_by(|a, b| a.created.cmp(&b.created)),
        }

        Ok(owned
            .into_iter()
            .skip((page * per_page) as usize)
            .take(per_page as usize)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_for(user_id: Uuid, title: &str) -> Post {
        Post::new(
            user_id,
            title.to_string(),
            format!("<p>Content for {title}</p>"),
        )
    }

    #[tokio::test]
    async fn save_find_delete_roundtrip() {
        let repo = InMemoryPostRepository::new();
        let post = post_for(Uuid::new_v4(), "First");
        let id = post.id;

        repo.save(post).await.unwrap();
        assert!(repo.find_by_id(id).await.unwrap().is_some());

        repo.delete(id).await.unwrap();
        assert!(repo.find_by_id(id).await.unwrap().is_none());
        assert!(matches!(repo.delete(id).await, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn list_is_scoped_ordered_and_paged() {
        let repo = InMemoryPostRepository::new();
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();

        for title in ["one", "two", "three"] {
            repo.save(post_for(owner, title)).await.unwrap();
        }
        repo.save(post_for(stranger, "other")).await.unwrap();

        let newest = repo
            .list_by_user(owner, PostOrder::NewestFirst, 0, 10)
            .await
            .unwrap();
        assert_eq!(newest.len(), 3);
        assert!(newest.windows(2).all(|w| w[0].created >= w[1].created));

        let paged = repo
            .list_by_user(owner, PostOrder::OldestFirst, 1, 2)
            .await
            .unwrap();
        assert_eq!(paged.len(), 1);
    }

    #[tokio::test]
    async fn users_are_found_by_email() {
        let repo = InMemoryUserRepository::new();
        let user = User::new(
            "someone@example.com".to_string(),
            "Someone".to_string(),
            None,
        );

        repo.save(user).await.unwrap();

        assert!(
            repo.find_by_email("someone@example.com")
                .await
                .unwrap()
                .is_some()
        );
        assert!(repo.find_by_email("nobody@example.com").await.unwrap().is_none());
    }
}
