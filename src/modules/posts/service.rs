use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use lema_core::AppError;
use lema_models::{CreatePostDto, NewPost, Post};
use tracing::instrument;

use super::repository::PostRepository;
use crate::modules::with_deadline;

#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
    deadline: Duration,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>, deadline: Duration) -> Self {
        Self { repo, deadline }
    }

    #[instrument(skip(self, dto), fields(user_id = dto.user_id))]
    pub async fn create_post(&self, dto: CreatePostDto) -> Result<Post, AppError> {
        let post = NewPost::from_dto(dto, Utc::now());
        with_deadline(self.deadline, "create_post", self.repo.create(post)).await
    }

    #[instrument(skip(self))]
    pub async fn get_post(&self, id: i64) -> Result<Post, AppError> {
        with_deadline(self.deadline, "get_post", self.repo.get(id)).await
    }

    /// Posts owned by `user_id`, oldest first. Unknown users simply have none.
    #[instrument(skip(self))]
    pub async fn get_posts(&self, user_id: i64) -> Result<Vec<Post>, AppError> {
        with_deadline(self.deadline, "list_posts", self.repo.list_by_user(user_id)).await
    }

    #[instrument(skip(self))]
    pub async fn delete_post(&self, id: i64) -> Result<(), AppError> {
        with_deadline(self.deadline, "delete_post", self.repo.delete(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::http::StatusCode;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryPosts {
        posts: Mutex<Vec<Post>>,
        next_id: Mutex<i64>,
    }

    #[async_trait]
    impl PostRepository for InMemoryPosts {
        async fn create(&self, post: NewPost) -> Result<Post, sqlx::Error> {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            let post = Post {
                id: *next_id,
                user_id: post.user_id,
                title: post.title,
                body: post.body,
                created_at: post.created_at,
                updated_at: post.created_at,
            };
            self.posts.lock().unwrap().push(post.clone());
            Ok(post)
        }

        async fn get(&self, id: i64) -> Result<Post, sqlx::Error> {
            self.posts
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.id == id)
                .cloned()
                .ok_or(sqlx::Error::RowNotFound)
        }

        async fn list_by_user(&self, user_id: i64) -> Result<Vec<Post>, sqlx::Error> {
            Ok(self
                .posts
                .lock()
                .unwrap()
                .iter()
                .filter(|p| p.user_id == user_id)
                .cloned()
                .collect())
        }

        async fn delete(&self, id: i64) -> Result<(), sqlx::Error> {
            self.posts.lock().unwrap().retain(|p| p.id != id);
            Ok(())
        }
    }

    /// Never answers, to exercise the deadline.
    struct StalledPosts;

    #[async_trait]
    impl PostRepository for StalledPosts {
        async fn create(&self, _post: NewPost) -> Result<Post, sqlx::Error> {
            std::future::pending().await
        }

        async fn get(&self, _id: i64) -> Result<Post, sqlx::Error> {
            std::future::pending().await
        }

        async fn list_by_user(&self, _user_id: i64) -> Result<Vec<Post>, sqlx::Error> {
            std::future::pending().await
        }

        async fn delete(&self, _id: i64) -> Result<(), sqlx::Error> {
            std::future::pending().await
        }
    }

    fn service() -> PostService {
        PostService::new(Arc::new(InMemoryPosts::default()), Duration::from_secs(5))
    }

    fn dto(user_id: i64, title: &str) -> CreatePostDto {
        CreatePostDto {
            title: title.to_string(),
            body: "body".to_string(),
            user_id,
        }
    }

    #[tokio::test]
    async fn test_create_post_stamps_timestamps() {
        let service = service();
        let before = Utc::now();

        let post = service.create_post(dto(1, "Hello")).await.unwrap();

        assert!(post.created_at >= before);
        assert_eq!(post.created_at, post.updated_at);
    }

    #[tokio::test]
    async fn test_deleted_post_is_not_found() {
        let service = service();
        let post = service.create_post(dto(1, "Hello")).await.unwrap();

        service.delete_post(post.id).await.unwrap();
        service.delete_post(post.id).await.unwrap();

        let err = service.get_post(post.id).await.unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_posts_for_unknown_user_is_empty() {
        let service = service();
        service.create_post(dto(1, "Hello")).await.unwrap();

        assert!(service.get_posts(2).await.unwrap().is_empty());
        assert_eq!(service.get_posts(1).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_stalled_store_hits_deadline() {
        let service = PostService::new(Arc::new(StalledPosts), Duration::from_millis(20));

        let err = service.get_post(1).await.unwrap_err();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error.to_string(), "internal server error");
    }
}
