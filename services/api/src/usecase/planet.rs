use crate::domain::repository::PlanetRepository;
use crate::domain::types::{NewPlanet, Planet};
use crate::error::ApiError;

// ── ListPlanets ──────────────────────────────────────────────────────────────

pub struct ListPlanetsUseCase<R: PlanetRepository> {
    pub repo: R,
}

impl<R: PlanetRepository> ListPlanetsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Planet>, ApiError> {
        self.repo.list().await
    }
}

// ── GetPlanet ────────────────────────────────────────────────────────────────

pub struct GetPlanetUseCase<R: PlanetRepository> {
    pub repo: R,
}

impl<R: PlanetRepository> GetPlanetUseCase<R> {
    pub async fn execute(&self, planet_id: i32) -> Result<Planet, ApiError> {
        self.repo
            .find_by_id(planet_id)
            .await?
            .ok_or(ApiError::NoCoincidence)
    }
}

// ── CreatePlanet ─────────────────────────────────────────────────────────────

pub struct CreatePlanetUseCase<R: PlanetRepository> {
    pub repo: R,
}

impl<R: PlanetRepository> CreatePlanetUseCase<R> {
    pub async fn execute(&self, input: NewPlanet) -> Result<i32, ApiError> {
        let id = self.repo.create(&input).await?;
        tracing::info!(planet_id = id, "planet created");
        Ok(id)
    }
}
