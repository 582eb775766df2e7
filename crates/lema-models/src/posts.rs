//! Post models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for `POST /api/v1/posts`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreatePostDto {
    #[validate(length(min = 1, max = 255, message = "title must be between 1 and 255 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "body must not be empty"))]
    pub body: String,
    /// Owning user. `user_id` is accepted as well.
    #[serde(rename = "userId", alias = "user_id")]
    #[validate(range(min = 1, message = "userId must be a positive integer"))]
    pub user_id: i64,
}

/// A post ready to be inserted, with its timestamps already stamped.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub user_id: i64,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl NewPost {
    pub fn from_dto(dto: CreatePostDto, created_at: DateTime<Utc>) -> Self {
        Self {
            user_id: dto.user_id,
            title: dto.title,
            body: dto.body,
            created_at,
        }
    }
}

/// Query parameters for `GET /api/v1/posts`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PostFilterParams {
    /// Owner whose posts are listed
    pub user_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_post_dto_reads_camel_case_user_id() {
        let dto: CreatePostDto =
            serde_json::from_str(r#"{"title":"Hello","body":"World","userId":4}"#).unwrap();
        assert_eq!(dto.user_id, 4);
    }

    #[test]
    fn test_create_post_dto_accepts_snake_case_alias() {
        let dto: CreatePostDto =
            serde_json::from_str(r#"{"title":"Hello","body":"World","user_id":9}"#).unwrap();
        assert_eq!(dto.user_id, 9);
    }

    #[test]
    fn test_create_post_dto_validation() {
        let dto = CreatePostDto {
            title: String::new(),
            body: "text".to_string(),
            user_id: 0,
        };
        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn test_new_post_from_dto() {
        let now = Utc::now();
        let dto = CreatePostDto {
            title: "Title".to_string(),
            body: "Body".to_string(),
            user_id: 2,
        };
        let new_post = NewPost::from_dto(dto, now);
        assert_eq!(new_post.user_id, 2);
        assert_eq!(new_post.created_at, now);
    }

    #[test]
    fn test_post_serializes_snake_case() {
        let now = Utc::now();
        let post = Post {
            id: 1,
            user_id: 2,
            title: "t".to_string(),
            body: "b".to_string(),
            created_at: now,
            updated_at: now,
        };
        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["user_id"], 2);
        assert!(value["created_at"].is_string());
    }
}
