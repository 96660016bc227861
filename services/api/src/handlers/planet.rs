use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use crate::domain::types::{NewPlanet, Planet};
use crate::error::ApiError;
use crate::handlers::{CreatedResponse, parse_id};
use crate::handlers::body::JsonObject;
use crate::state::AppState;
use crate::usecase::planet::{CreatePlanetUseCase, GetPlanetUseCase, ListPlanetsUseCase};

#[derive(Debug, Serialize)]
pub struct PlanetResponse {
    pub id: i32,
    pub name: Option<String>,
    pub climate: String,
    pub terrain: String,
    pub population: i32,
}

impl From<Planet> for PlanetResponse {
    fn from(planet: Planet) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            climate: planet.climate,
            terrain: planet.terrain,
            population: planet.population,
        }
    }
}

// ── GET /planet ──────────────────────────────────────────────────────────────

pub async fn list_planets(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlanetResponse>>, ApiError> {
    let usecase = ListPlanetsUseCase {
        repo: state.planet_repo(),
    };
    let planets = usecase.execute().await?;
    Ok(Json(planets.into_iter().map(PlanetResponse::from).collect()))
}

// ── GET /planet/{id} ─────────────────────────────────────────────────────────

pub async fn get_planet(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<PlanetResponse>, ApiError> {
    let planet_id = parse_id(&raw_id, ApiError::NoCoincidence)?;
    let usecase = GetPlanetUseCase {
        repo: state.planet_repo(),
    };
    let planet = usecase.execute(planet_id).await?;
    Ok(Json(planet.into()))
}

// ── POST /planet ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreatePlanetRequest {
    pub name: Option<String>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<i32>,
}

pub async fn create_planet(
    State(state): State<AppState>,
    JsonObject(body): JsonObject<CreatePlanetRequest>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let usecase = CreatePlanetUseCase {
        repo: state.planet_repo(),
    };
    let id = usecase
        .execute(NewPlanet {
            name: body.name,
            climate: body.climate,
            terrain: body.terrain,
            population: body.population,
        })
        .await?;
    Ok(Json(CreatedResponse {
        message: "Planet correctly added",
        id,
    }))
}
