use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::domain::types::{Favorite, FavoriteTarget, UserFavorites};
use crate::error::ApiError;
use crate::handlers::people::PeopleResponse;
use crate::handlers::planet::PlanetResponse;
use crate::handlers::{CreatedResponse, MessageResponse, parse_id};
use crate::state::AppState;
use crate::usecase::favorite::{AddFavoriteUseCase, DeleteFavoriteUseCase, ListFavoritesUseCase};

#[derive(Debug, Serialize)]
pub struct FavoriteResponse {
    pub id: i32,
    pub user_id: i32,
    pub planet: Option<PlanetResponse>,
    pub people: Option<PeopleResponse>,
}

impl From<Favorite> for FavoriteResponse {
    fn from(favorite: Favorite) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            planet: favorite.planet.map(PlanetResponse::from),
            people: favorite.people.map(PeopleResponse::from),
        }
    }
}

/// One element of the `GET /users/favorites` array: planet favorites are
/// listed flat, then the people favorites follow as a single nested array.
/// Existing clients depend on this shape.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum FavoritesEntry {
    Planet(FavoriteResponse),
    People(Vec<FavoriteResponse>),
}

fn favorites_entries(favorites: UserFavorites) -> Vec<FavoritesEntry> {
    let mut entries: Vec<FavoritesEntry> = favorites
        .planets
        .into_iter()
        .map(|f| FavoritesEntry::Planet(f.into()))
        .collect();
    entries.push(FavoritesEntry::People(
        favorites.people.into_iter().map(FavoriteResponse::from).collect(),
    ));
    entries
}

// ── GET /users/favorites ─────────────────────────────────────────────────────

pub async fn list_favorites(
    State(state): State<AppState>,
) -> Result<Json<Vec<FavoritesEntry>>, ApiError> {
    let usecase = ListFavoritesUseCase {
        users: state.user_repo(),
        favorites: state.favorite_repo(),
    };
    let favorites = usecase.execute().await?;
    Ok(Json(favorites_entries(favorites)))
}

// ── POST /favorite/{planet,people}/{id} ──────────────────────────────────────

async fn add_favorite(
    state: AppState,
    target: FavoriteTarget,
) -> Result<Json<CreatedResponse>, ApiError> {
    let usecase = AddFavoriteUseCase {
        users: state.user_repo(),
        planets: state.planet_repo(),
        people: state.people_repo(),
        favorites: state.favorite_repo(),
    };
    let id = usecase.execute(target).await?;
    Ok(Json(CreatedResponse {
        message: "Favorite correctly added",
        id,
    }))
}

pub async fn add_favorite_planet(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let planet_id = parse_id(&raw_id, ApiError::PlanetNotFound)?;
    add_favorite(state, FavoriteTarget::Planet(planet_id)).await
}

pub async fn add_favorite_people(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let people_id = parse_id(&raw_id, ApiError::PeopleNotFound)?;
    add_favorite(state, FavoriteTarget::People(people_id)).await
}

// ── DELETE /favorite/{planet,people}/{id} ────────────────────────────────────

async fn delete_favorite(
    state: AppState,
    target: FavoriteTarget,
) -> Result<Json<MessageResponse>, ApiError> {
    let usecase = DeleteFavoriteUseCase {
        favorites: state.favorite_repo(),
    };
    usecase.execute(target).await?;
    Ok(Json(MessageResponse {
        message: "Favorite correctly deleted",
    }))
}

pub async fn delete_favorite_planet(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let planet_id = parse_id(&raw_id, ApiError::FavoriteNotFound)?;
    delete_favorite(state, FavoriteTarget::Planet(planet_id)).await
}

pub async fn delete_favorite_people(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let people_id = parse_id(&raw_id, ApiError::FavoriteNotFound)?;
    delete_favorite(state, FavoriteTarget::People(people_id)).await
}
