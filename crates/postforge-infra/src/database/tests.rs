use crate::database::entity::{post, user};
use crate::database::postgres_repo::{PostgresPostRepository, PostgresUserRepository};
use postforge_core::domain::{Post, PostOrder, User};
use postforge_core::ports::{BaseRepository, PostRepository, UserRepository};
use sea_orm::{DatabaseBackend, MockDatabase};

fn post_model(post_id: uuid::Uuid, user_id: uuid::Uuid) -> post::Model {
    post::Model {
        id: post_id,
        user_id,
        title: "Test Post".to_owned(),
        content: "<p>Content</p>".to_owned(),
        length: 14,
        created: chrono::Utc::now().into(),
        edited: false,
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let post_id = uuid::Uuid::new_v4();
    let user_id = uuid::Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post_model(post_id, user_id)]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

    assert!(result.is_some());
    let found = result.unwrap();
    assert_eq!(found.title, "Test Post");
    assert_eq!(found.id, post_id);
    assert_eq!(found.length, 14);
    assert!(!found.edited);
}

#[tokio::test]
async fn test_list_posts_by_user() {
    let user_id = uuid::Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![
            post_model(uuid::Uuid::new_v4(), user_id),
            post_model(uuid::Uuid::new_v4(), user_id),
        ]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let posts = repo
        .list_by_user(user_id, PostOrder::NewestFirst, 0, 10)
        .await
        .unwrap();

    assert_eq!(posts.len(), 2);
    assert!(posts.iter().all(|p| p.user_id == user_id));
}

#[tokio::test]
async fn test_find_user_by_email() {
    let now = chrono::Utc::now();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![user::Model {
            id: uuid::Uuid::new_v4(),
            email: "writer@example.com".to_owned(),
            fullname: "Writer".to_owned(),
            password_hash: None,
            created_at: now.into(),
            updated_at: now.into(),
        }]])
        .into_connection();

    let repo = PostgresUserRepository::new(db);

    let result: Option<User> = repo.find_by_email("writer@example.com").await.unwrap();

    assert!(result.is_some());
    assert_eq!(result.unwrap().fullname, "Writer");
}
