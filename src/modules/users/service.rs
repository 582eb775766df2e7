use std::sync::Arc;
use std::time::Duration;

use lema_core::{AppError, PageMeta, PageRequest};
use lema_models::{CreateUserDto, PaginatedUsers, User};
use tracing::instrument;

use super::repository::UserRepository;
use crate::modules::with_deadline;

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
    deadline: Duration,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>, deadline: Duration) -> Self {
        Self { repo, deadline }
    }

    #[instrument(skip(self, dto), fields(username = %dto.username))]
    pub async fn create_user(&self, dto: CreateUserDto) -> Result<User, AppError> {
        with_deadline(self.deadline, "create_user", self.repo.create(dto)).await
    }

    #[instrument(skip(self))]
    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        with_deadline(self.deadline, "get_user", self.repo.get(id)).await
    }

    #[instrument(skip(self))]
    pub async fn get_users(&self, page: PageRequest) -> Result<PaginatedUsers, AppError> {
        let users = with_deadline(self.deadline, "list_users", self.repo.list(&page)).await?;
        let count = with_deadline(self.deadline, "count_users", self.repo.count()).await?;
        let meta = PageMeta::new(count, &page).map_err(AppError::bad_request)?;

        Ok(PaginatedUsers { users, meta })
    }

    #[instrument(skip(self))]
    pub async fn get_user_count(&self) -> Result<i64, AppError> {
        with_deadline(self.deadline, "count_users", self.repo.count()).await
    }

    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        with_deadline(self.deadline, "delete_user", self.repo.delete(id)).await
    }
}
