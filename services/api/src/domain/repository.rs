#![allow(async_fn_in_trait)]

use crate::domain::types::{
    FavoriteLink, FavoriteTarget, NewPeople, NewPlanet, NewUser, People, Planet, User,
    UserFavorites,
};
use crate::error::ApiError;

/// Repository for accounts.
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, ApiError>;

    /// The user with the lowest id. Favorites are always attached to it.
    async fn find_first(&self) -> Result<Option<User>, ApiError>;

    /// Insert and commit. Returns the new id.
    async fn create(&self, user: &NewUser) -> Result<i32, ApiError>;
}

/// Repository for characters.
pub trait PeopleRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<People>, ApiError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<People>, ApiError>;

    /// Insert and commit. Returns the new id.
    async fn create(&self, people: &NewPeople) -> Result<i32, ApiError>;
}

/// Repository for planets.
pub trait PlanetRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Planet>, ApiError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Planet>, ApiError>;

    /// Insert and commit. Returns the new id.
    async fn create(&self, planet: &NewPlanet) -> Result<i32, ApiError>;
}

/// Repository for the user/planet/character join.
pub trait FavoriteRepository: Send + Sync {
    /// Insert and commit. Returns the new id.
    async fn create(&self, user_id: i32, target: FavoriteTarget) -> Result<i32, ApiError>;

    /// Lowest-id favorite pointing at `target`, whoever owns it.
    async fn find_first_by_target(
        &self,
        target: FavoriteTarget,
    ) -> Result<Option<FavoriteLink>, ApiError>;

    /// Delete a favorite. Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, ApiError>;

    async fn list_by_user(&self, user_id: i32) -> Result<UserFavorites, ApiError>;
}
