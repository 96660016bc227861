use std::collections::HashMap;

use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    ColumnTrait, DatabaseConnection, EntityTrait, PrimaryKeyTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};

use holonet_api_schema::{favorite, people, planet, user};

use crate::domain::repository::{
    FavoriteRepository, PeopleRepository, PlanetRepository, UserRepository,
};
use crate::domain::types::{
    Favorite, FavoriteLink, FavoriteTarget, NewPeople, NewPlanet, NewUser, People, Planet, User,
    UserFavorites,
};
use crate::error::ApiError;

// ── Transactions ─────────────────────────────────────────────────────────────

/// Insert one row in its own transaction. A driver failure rolls back and
/// comes back as [`ApiError::Commit`].
async fn insert_committed<A>(
    db: &DatabaseConnection,
    model: A,
    what: &'static str,
) -> Result<i32, ApiError>
where
    A: ActiveModelTrait + Send,
    <A::Entity as EntityTrait>::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
{
    let txn = db
        .begin()
        .await
        .with_context(|| format!("begin {what} insert"))?;
    match <A::Entity as EntityTrait>::insert(model).exec(&txn).await {
        Ok(inserted) => {
            txn.commit().await.map_err(ApiError::Commit)?;
            Ok(inserted.last_insert_id)
        }
        Err(e) => {
            txn.rollback()
                .await
                .with_context(|| format!("roll back {what} insert"))?;
            Err(ApiError::Commit(e))
        }
    }
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn list(&self) -> Result<Vec<User>, ApiError> {
        let models = user::Entity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .context("list users")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn find_first(&self) -> Result<Option<User>, ApiError> {
        let model = user::Entity::find()
            .order_by_asc(user::Column::Id)
            .one(&self.db)
            .await
            .context("find first user")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, new: &NewUser) -> Result<i32, ApiError> {
        let model = user::ActiveModel {
            id: NotSet,
            email: new.email.clone().map_or(NotSet, Set),
            password: new.password.clone().map_or(NotSet, Set),
            is_active: new.is_active.map_or(NotSet, Set),
        };
        insert_committed(&self.db, model, "user").await
    }
}

fn user_from_model(model: user::Model) -> User {
    User {
        id: model.id,
        email: model.email,
        is_active: model.is_active,
    }
}

// ── People repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPeopleRepository {
    pub db: DatabaseConnection,
}

impl PeopleRepository for DbPeopleRepository {
    async fn list(&self) -> Result<Vec<People>, ApiError> {
        let models = people::Entity::find()
            .order_by_asc(people::Column::Id)
            .all(&self.db)
            .await
            .context("list people")?;
        Ok(models.into_iter().map(people_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<People>, ApiError> {
        let model = people::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find people by id")?;
        Ok(model.map(people_from_model))
    }

    async fn create(&self, new: &NewPeople) -> Result<i32, ApiError> {
        let model = people::ActiveModel {
            id: NotSet,
            name: Set(new.name.clone()),
            gender: new.gender.clone().map_or(NotSet, Set),
            birth_year: new.birth_year.clone().map_or(NotSet, Set),
            skin_color: new.skin_color.clone().map_or(NotSet, Set),
        };
        insert_committed(&self.db, model, "people").await
    }
}

fn people_from_model(model: people::Model) -> People {
    People {
        id: model.id,
        name: model.name,
        gender: model.gender,
        birth_year: model.birth_year,
        skin_color: model.skin_color,
    }
}

// ── Planet repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPlanetRepository {
    pub db: DatabaseConnection,
}

impl PlanetRepository for DbPlanetRepository {
    async fn list(&self) -> Result<Vec<Planet>, ApiError> {
        let models = planet::Entity::find()
            .order_by_asc(planet::Column::Id)
            .all(&self.db)
            .await
            .context("list planets")?;
        Ok(models.into_iter().map(planet_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Planet>, ApiError> {
        let model = planet::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find planet by id")?;
        Ok(model.map(planet_from_model))
    }

    async fn create(&self, new: &NewPlanet) -> Result<i32, ApiError> {
        let model = planet::ActiveModel {
            id: NotSet,
            name: Set(new.name.clone()),
            climate: new.climate.clone().map_or(NotSet, Set),
            terrain: new.terrain.clone().map_or(NotSet, Set),
            population: new.population.map_or(NotSet, Set),
        };
        insert_committed(&self.db, model, "planet").await
    }
}

fn planet_from_model(model: planet::Model) -> Planet {
    Planet {
        id: model.id,
        name: model.name,
        climate: model.climate,
        terrain: model.terrain,
        population: model.population,
    }
}

// ── Favorite repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbFavoriteRepository {
    pub db: DatabaseConnection,
}

impl FavoriteRepository for DbFavoriteRepository {
    async fn create(&self, user_id: i32, target: FavoriteTarget) -> Result<i32, ApiError> {
        let (planet_id, people_id) = match target {
            FavoriteTarget::Planet(id) => (Some(id), None),
            FavoriteTarget::People(id) => (None, Some(id)),
        };
        let model = favorite::ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            planet_id: Set(planet_id),
            people_id: Set(people_id),
        };
        insert_committed(&self.db, model, "favorite").await
    }

    async fn find_first_by_target(
        &self,
        target: FavoriteTarget,
    ) -> Result<Option<FavoriteLink>, ApiError> {
        let condition = match target {
            FavoriteTarget::Planet(id) => favorite::Column::PlanetId.eq(id),
            FavoriteTarget::People(id) => favorite::Column::PeopleId.eq(id),
        };
        let model = favorite::Entity::find()
            .filter(condition)
            .order_by_asc(favorite::Column::Id)
            .one(&self.db)
            .await
            .context("find favorite by target")?;
        Ok(model.map(|m| FavoriteLink {
            id: m.id,
            user_id: m.user_id,
            planet_id: m.planet_id,
            people_id: m.people_id,
        }))
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiError> {
        let txn = self.db.begin().await.context("begin favorite delete")?;
        match favorite::Entity::delete_by_id(id).exec(&txn).await {
            Ok(result) => {
                txn.commit().await.map_err(ApiError::Commit)?;
                Ok(result.rows_affected > 0)
            }
            Err(e) => {
                txn.rollback().await.context("roll back favorite delete")?;
                Err(ApiError::Commit(e))
            }
        }
    }

    async fn list_by_user(&self, user_id: i32) -> Result<UserFavorites, ApiError> {
        let rows = favorite::Entity::find()
            .filter(favorite::Column::UserId.eq(user_id))
            .order_by_asc(favorite::Column::Id)
            .all(&self.db)
            .await
            .context("list favorites by user")?;

        let planet_ids: Vec<i32> = rows.iter().filter_map(|f| f.planet_id).collect();
        let people_ids: Vec<i32> = rows.iter().filter_map(|f| f.people_id).collect();

        let planets: HashMap<i32, Planet> = planet::Entity::find()
            .filter(planet::Column::Id.is_in(planet_ids))
            .all(&self.db)
            .await
            .context("load favorite planets")?
            .into_iter()
            .map(|m| (m.id, planet_from_model(m)))
            .collect();
        let people: HashMap<i32, People> = people::Entity::find()
            .filter(people::Column::Id.is_in(people_ids))
            .all(&self.db)
            .await
            .context("load favorite people")?
            .into_iter()
            .map(|m| (m.id, people_from_model(m)))
            .collect();

        let mut favorites = UserFavorites::default();
        for row in rows {
            let favorite = Favorite {
                id: row.id,
                user_id: row.user_id,
                planet: row.planet_id.and_then(|id| planets.get(&id).cloned()),
                people: row.people_id.and_then(|id| people.get(&id).cloned()),
            };
            if row.planet_id.is_some() {
                favorites.planets.push(favorite.clone());
            }
            if row.people_id.is_some() {
                favorites.people.push(favorite);
            }
        }
        Ok(favorites)
    }
}
