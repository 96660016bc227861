use crate::domain::repository::UserRepository;
use crate::domain::types::{NewUser, User};
use crate::error::ApiError;

// ── ListUsers ────────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ListUsersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<User>, ApiError> {
        self.repo.list().await
    }
}

// ── CreateUser ───────────────────────────────────────────────────────────────

pub struct CreateUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> CreateUserUseCase<R> {
    pub async fn execute(&self, input: NewUser) -> Result<i32, ApiError> {
        let id = self.repo.create(&input).await?;
        tracing::info!(user_id = id, "user created");
        Ok(id)
    }
}
