use crate::domain::repository::PeopleRepository;
use crate::domain::types::{NewPeople, People};
use crate::error::ApiError;

// ── ListPeople ───────────────────────────────────────────────────────────────

pub struct ListPeopleUseCase<R: PeopleRepository> {
    pub repo: R,
}

impl<R: PeopleRepository> ListPeopleUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<People>, ApiError> {
        self.repo.list().await
    }
}

// ── GetPeople ────────────────────────────────────────────────────────────────

pub struct GetPeopleUseCase<R: PeopleRepository> {
    pub repo: R,
}

impl<R: PeopleRepository> GetPeopleUseCase<R> {
    pub async fn execute(&self, people_id: i32) -> Result<People, ApiError> {
        self.repo
            .find_by_id(people_id)
            .await?
            .ok_or(ApiError::NoCoincidence)
    }
}

// ── CreatePeople ─────────────────────────────────────────────────────────────

pub struct CreatePeopleUseCase<R: PeopleRepository> {
    pub repo: R,
}

impl<R: PeopleRepository> CreatePeopleUseCase<R> {
    pub async fn execute(&self, input: NewPeople) -> Result<i32, ApiError> {
        let id = self.repo.create(&input).await?;
        tracing::info!(people_id = id, "people created");
        Ok(id)
    }
}
