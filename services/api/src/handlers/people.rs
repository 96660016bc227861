use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use crate::domain::types::{NewPeople, People};
use crate::error::ApiError;
use crate::handlers::{CreatedResponse, parse_id};
use crate::handlers::body::JsonObject;
use crate::state::AppState;
use crate::usecase::people::{CreatePeopleUseCase, GetPeopleUseCase, ListPeopleUseCase};

#[derive(Debug, Serialize)]
pub struct PeopleResponse {
    pub id: i32,
    pub name: Option<String>,
    pub gender: String,
    pub birth_year: String,
    pub skin_color: String,
}

impl From<People> for PeopleResponse {
    fn from(people: People) -> Self {
        Self {
            id: people.id,
            name: people.name,
            gender: people.gender,
            birth_year: people.birth_year,
            skin_color: people.skin_color,
        }
    }
}

// ── GET /people ──────────────────────────────────────────────────────────────

pub async fn list_people(
    State(state): State<AppState>,
) -> Result<Json<Vec<PeopleResponse>>, ApiError> {
    let usecase = ListPeopleUseCase {
        repo: state.people_repo(),
    };
    let people = usecase.execute().await?;
    Ok(Json(people.into_iter().map(PeopleResponse::from).collect()))
}

// ── GET /people/{id} ─────────────────────────────────────────────────────────

pub async fn get_people(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<PeopleResponse>, ApiError> {
    let people_id = parse_id(&raw_id, ApiError::NoCoincidence)?;
    let usecase = GetPeopleUseCase {
        repo: state.people_repo(),
    };
    let people = usecase.execute(people_id).await?;
    Ok(Json(people.into()))
}

// ── POST /people ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreatePeopleRequest {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<String>,
    pub skin_color: Option<String>,
}

pub async fn create_people(
    State(state): State<AppState>,
    JsonObject(body): JsonObject<CreatePeopleRequest>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let usecase = CreatePeopleUseCase {
        repo: state.people_repo(),
    };
    let id = usecase
        .execute(NewPeople {
            name: body.name,
            gender: body.gender,
            birth_year: body.birth_year,
            skin_color: body.skin_color,
        })
        .await?;
    Ok(Json(CreatedResponse {
        message: "People correctly added",
        id,
    }))
}
