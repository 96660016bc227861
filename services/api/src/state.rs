use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbFavoriteRepository, DbPeopleRepository, DbPlanetRepository, DbUserRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn people_repo(&self) -> DbPeopleRepository {
        DbPeopleRepository {
            db: self.db.clone(),
        }
    }

    pub fn planet_repo(&self) -> DbPlanetRepository {
        DbPlanetRepository {
            db: self.db.clone(),
        }
    }

    pub fn favorite_repo(&self) -> DbFavoriteRepository {
        DbFavoriteRepository {
            db: self.db.clone(),
        }
    }
}
