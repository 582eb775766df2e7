//! User and address models.

use chrono::{DateTime, Utc};
use lema_core::PageMeta;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Address {
    pub id: i64,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    /// Owning user; always equals the user's `id`
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub phone: String,
    pub address: Address,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A `users` row joined with its `addresses` row.
#[derive(Debug, FromRow)]
pub struct UserWithAddressRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub address_id: i64,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub address_user_id: i64,
    pub address_created_at: DateTime<Utc>,
    pub address_updated_at: DateTime<Utc>,
}

impl From<UserWithAddressRow> for User {
    fn from(row: UserWithAddressRow) -> Self {
        User {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            username: row.username,
            phone: row.phone,
            address: Address {
                id: row.address_id,
                street: row.street,
                city: row.city,
                state: row.state,
                zipcode: row.zipcode,
                user_id: row.address_user_id,
                created_at: row.address_created_at,
                updated_at: row.address_updated_at,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateAddressDto {
    #[validate(length(min = 1, max = 255))]
    pub street: String,
    #[validate(length(min = 1, max = 100))]
    pub city: String,
    #[validate(length(min = 1, max = 100))]
    pub state: String,
    #[validate(length(min = 1, max = 20))]
    pub zipcode: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUserDto {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 100))]
    pub username: String,
    #[validate(length(min = 1, max = 50))]
    pub phone: String,
    #[validate(nested)]
    pub address: CreateAddressDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    #[serde(flatten)]
    pub meta: PageMeta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserCount {
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use lema_core::PageRequest;

    fn sample_row() -> UserWithAddressRow {
        let now = Utc::now();
        UserWithAddressRow {
            id: 7,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            username: "ada".to_string(),
            phone: "555-0100".to_string(),
            created_at: now,
            updated_at: now,
            address_id: 3,
            street: "12 Analytical Way".to_string(),
            city: "London".to_string(),
            state: "Greater London".to_string(),
            zipcode: "N1 9GU".to_string(),
            address_user_id: 7,
            address_created_at: now,
            address_updated_at: now,
        }
    }

    #[test]
    fn test_row_into_user_nests_address() {
        let user: User = sample_row().into();
        assert_eq!(user.id, 7);
        assert_eq!(user.address.id, 3);
        assert_eq!(user.address.user_id, user.id);
        assert_eq!(user.address.city, "London");
    }

    #[test]
    fn test_paginated_users_flattens_meta() {
        let page = PaginatedUsers {
            users: vec![sample_row().into()],
            meta: PageMeta::new(1, &PageRequest::default()).unwrap(),
        };
        let value = serde_json::to_value(&page).unwrap();

        assert_eq!(value["count"], 1);
        assert_eq!(value["total_pages"], 1);
        assert_eq!(value["page"], 1);
        assert_eq!(value["limit"], 10);
        assert_eq!(value["has_next"], false);
        assert_eq!(value["has_prev"], false);
        assert_eq!(value["users"][0]["address"]["user_id"], 7);
    }

    #[test]
    fn test_create_user_dto_validates_email_and_address() {
        let dto = CreateUserDto {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "not-an-email".to_string(),
            username: "ada".to_string(),
            phone: "555-0100".to_string(),
            address: CreateAddressDto {
                street: String::new(),
                city: "London".to_string(),
                state: "Greater London".to_string(),
                zipcode: "N1 9GU".to_string(),
            },
        };

        let errors = dto.validate().unwrap_err();
        let errors = errors.errors();
        assert!(errors.contains_key("email"));
        assert!(errors.contains_key("address"));
    }
}
