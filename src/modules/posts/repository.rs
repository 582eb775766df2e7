use async_trait::async_trait;
use lema_models::{NewPost, Post};
use sqlx::SqlitePool;

/// Storage for posts.
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, post: NewPost) -> Result<Post, sqlx::Error>;
    async fn get(&self, id: i64) -> Result<Post, sqlx::Error>;
    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Post>, sqlx::Error>;
    /// Absent ids are not an error.
    async fn delete(&self, id: i64) -> Result<(), sqlx::Error>;
}

#[derive(Clone, Debug)]
pub struct SqlxPostRepository {
    db: SqlitePool,
}

impl SqlxPostRepository {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for SqlxPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, sqlx::Error> {
        sqlx::query_as::<_, Post>(
            r#"INSERT INTO posts (user_id, title, body, created_at, updated_at)
               VALUES (?, ?, ?, ?, ?)
               RETURNING id, user_id, title, body, created_at, updated_at"#,
        )
        .bind(post.user_id)
        .bind(&post.title)
        .bind(&post.body)
        .bind(post.created_at)
        .bind(post.created_at)
        .fetch_one(&self.db)
        .await
    }

    async fn get(&self, id: i64) -> Result<Post, sqlx::Error> {
        sqlx::query_as::<_, Post>(
            "SELECT id, user_id, title, body, created_at, updated_at FROM posts WHERE id = ?",
        )
        .bind(id)
        .fetch_one(&self.db)
        .await
    }

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Post>, sqlx::Error> {
        sqlx::query_as::<_, Post>(
            r#"SELECT id, user_id, title, body, created_at, updated_at
               FROM posts
               WHERE user_id = ?
               ORDER BY id"#,
        )
        .bind(user_id)
        .fetch_all(&self.db)
        .await
    }

    async fn delete(&self, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(())
    }
}
