use async_trait::async_trait;
use chrono::Utc;
use lema_core::PageRequest;
use lema_models::{Address, CreateUserDto, User, UserWithAddressRow};
use sqlx::SqlitePool;

const SELECT_USER_WITH_ADDRESS: &str = r#"
    SELECT
        u.id, u.first_name, u.last_name, u.email, u.username, u.phone,
        u.created_at, u.updated_at,
        a.id AS address_id, a.street, a.city, a.state, a.zipcode,
        a.user_id AS address_user_id,
        a.created_at AS address_created_at,
        a.updated_at AS address_updated_at
    FROM users u
    INNER JOIN addresses a ON a.user_id = u.id
"#;

/// Storage for users and their addresses.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts the user and its address in one transaction.
    async fn create(&self, dto: CreateUserDto) -> Result<User, sqlx::Error>;
    async fn get(&self, id: i64) -> Result<User, sqlx::Error>;
    async fn list(&self, page: &PageRequest) -> Result<Vec<User>, sqlx::Error>;
    async fn count(&self) -> Result<i64, sqlx::Error>;
    /// Removes the user, its address and its posts. Absent ids are not an error.
    async fn delete(&self, id: i64) -> Result<(), sqlx::Error>;
}

#[derive(Clone, Debug)]
pub struct SqlxUserRepository {
    db: SqlitePool,
}

impl SqlxUserRepository {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    async fn create(&self, dto: CreateUserDto) -> Result<User, sqlx::Error> {
        let now = Utc::now();
        let mut tx = self.db.begin().await?;

        let user_id: i64 = sqlx::query_scalar(
            r#"INSERT INTO users (first_name, last_name, email, username, phone, created_at, updated_at)
               VALUES (?, ?, ?, ?, ?, ?, ?)
               RETURNING id"#,
        )
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&dto.email)
        .bind(&dto.username)
        .bind(&dto.phone)
        .bind(now)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        let address = sqlx::query_as::<_, Address>(
            r#"INSERT INTO addresses (street, city, state, zipcode, user_id, created_at, updated_at)
               VALUES (?, ?, ?, ?, ?, ?, ?)
               RETURNING id, street, city, state, zipcode, user_id, created_at, updated_at"#,
        )
        .bind(&dto.address.street)
        .bind(&dto.address.city)
        .bind(&dto.address.state)
        .bind(&dto.address.zipcode)
        .bind(user_id)
        .bind(now)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(User {
            id: user_id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            username: dto.username,
            phone: dto.phone,
            address,
            created_at: now,
            updated_at: now,
        })
    }

    async fn get(&self, id: i64) -> Result<User, sqlx::Error> {
        let sql = format!("{SELECT_USER_WITH_ADDRESS} WHERE u.id = ?");
        let row = sqlx::query_as::<_, UserWithAddressRow>(&sql)
            .bind(id)
            .fetch_one(&self.db)
            .await?;

        Ok(row.into())
    }

    async fn list(&self, page: &PageRequest) -> Result<Vec<User>, sqlx::Error> {
        let sql = format!("{SELECT_USER_WITH_ADDRESS} ORDER BY u.id LIMIT ? OFFSET ?");
        let rows = sqlx::query_as::<_, UserWithAddressRow>(&sql)
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(&self.db)
            .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.db)
            .await
    }

    async fn delete(&self, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lema_models::CreateAddressDto;

    fn new_user(n: usize) -> CreateUserDto {
        CreateUserDto {
            first_name: format!("First{n}"),
            last_name: format!("Last{n}"),
            email: format!("user{n}@example.com"),
            username: format!("user{n}"),
            phone: format!("555-{n:04}"),
            address: CreateAddressDto {
                street: format!("{n} Main Street"),
                city: "Springfield".to_string(),
                state: "IL".to_string(),
                zipcode: "62701".to_string(),
            },
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_create_inserts_one_address_for_user(pool: SqlitePool) {
        let repo = SqlxUserRepository::new(pool.clone());
        let user = repo.create(new_user(1)).await.unwrap();

        assert_eq!(user.address.user_id, user.id);

        let addresses: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM addresses WHERE user_id = ?")
                .bind(user.id)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(addresses, 1);

        let fetched = repo.get(user.id).await.unwrap();
        assert_eq!(fetched, user);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_duplicate_email_rolls_back(pool: SqlitePool) {
        let repo = SqlxUserRepository::new(pool.clone());
        repo.create(new_user(1)).await.unwrap();

        let mut duplicate = new_user(2);
        duplicate.email = "user1@example.com".to_string();
        assert!(repo.create(duplicate).await.is_err());

        assert_eq!(repo.count().await.unwrap(), 1);
        let addresses: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM addresses")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(addresses, 1);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_list_pages_in_id_order(pool: SqlitePool) {
        let repo = SqlxUserRepository::new(pool);
        for n in 1..=7 {
            repo.create(new_user(n)).await.unwrap();
        }

        let page = PageRequest { page: 2, limit: 3 };
        let users = repo.list(&page).await.unwrap();

        let usernames: Vec<_> = users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(usernames, vec!["user4", "user5", "user6"]);
        assert_eq!(repo.count().await.unwrap(), 7);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_get_missing_user(pool: SqlitePool) {
        let repo = SqlxUserRepository::new(pool);
        assert!(matches!(
            repo.get(404).await.unwrap_err(),
            sqlx::Error::RowNotFound
        ));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_delete_cascades_and_is_idempotent(pool: SqlitePool) {
        let repo = SqlxUserRepository::new(pool.clone());
        let user = repo.create(new_user(1)).await.unwrap();

        repo.delete(user.id).await.unwrap();
        repo.delete(user.id).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 0);
        let addresses: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM addresses")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(addresses, 0);
    }
}
