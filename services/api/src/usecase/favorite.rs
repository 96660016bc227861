use crate::domain::repository::{
    FavoriteRepository, PeopleRepository, PlanetRepository, UserRepository,
};
use crate::domain::types::{FavoriteTarget, User, UserFavorites};
use crate::error::ApiError;

/// The single tenant: every favorite belongs to the lowest-id user.
async fn owner<U: UserRepository>(users: &U) -> Result<User, ApiError> {
    users.find_first().await?.ok_or(ApiError::UserNotFound)
}

// ── AddFavorite ──────────────────────────────────────────────────────────────

pub struct AddFavoriteUseCase<U, P, Q, F>
where
    U: UserRepository,
    P: PlanetRepository,
    Q: PeopleRepository,
    F: FavoriteRepository,
{
    pub users: U,
    pub planets: P,
    pub people: Q,
    pub favorites: F,
}

impl<U, P, Q, F> AddFavoriteUseCase<U, P, Q, F>
where
    U: UserRepository,
    P: PlanetRepository,
    Q: PeopleRepository,
    F: FavoriteRepository,
{
    /// Attach `target` to the first user. The target is checked before
    /// anything is written.
    pub async fn execute(&self, target: FavoriteTarget) -> Result<i32, ApiError> {
        match target {
            FavoriteTarget::Planet(id) => {
                if self.planets.find_by_id(id).await?.is_none() {
                    return Err(ApiError::PlanetNotFound);
                }
            }
            FavoriteTarget::People(id) => {
                if self.people.find_by_id(id).await?.is_none() {
                    return Err(ApiError::PeopleNotFound);
                }
            }
        }
        let user = owner(&self.users).await?;
        let id = self.favorites.create(user.id, target).await?;
        tracing::info!(favorite_id = id, user_id = user.id, ?target, "favorite added");
        Ok(id)
    }
}

// ── DeleteFavorite ───────────────────────────────────────────────────────────

pub struct DeleteFavoriteUseCase<F: FavoriteRepository> {
    pub favorites: F,
}

impl<F: FavoriteRepository> DeleteFavoriteUseCase<F> {
    /// Remove the first favorite pointing at `target`, regardless of owner.
    pub async fn execute(&self, target: FavoriteTarget) -> Result<(), ApiError> {
        let link = self
            .favorites
            .find_first_by_target(target)
            .await?
            .ok_or(ApiError::FavoriteNotFound)?;
        if !self.favorites.delete(link.id).await? {
            return Err(ApiError::FavoriteNotFound);
        }
        tracing::info!(favorite_id = link.id, user_id = link.user_id, "favorite deleted");
        Ok(())
    }
}

// ── ListFavorites ────────────────────────────────────────────────────────────

pub struct ListFavoritesUseCase<U: UserRepository, F: FavoriteRepository> {
    pub users: U,
    pub favorites: F,
}

impl<U: UserRepository, F: FavoriteRepository> ListFavoritesUseCase<U, F> {
    pub async fn execute(&self) -> Result<UserFavorites, ApiError> {
        let user = owner(&self.users).await?;
        self.favorites.list_by_user(user.id).await
    }
}
