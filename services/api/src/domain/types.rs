/// An account. The password stays in the database and never reaches this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
}

/// A character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct People {
    pub id: i32,
    pub name: Option<String>,
    pub gender: String,
    pub birth_year: String,
    pub skin_color: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Planet {
    pub id: i32,
    pub name: Option<String>,
    pub climate: String,
    pub terrain: String,
    pub population: i32,
}

/// Fields accepted on user creation. `None` is written as NULL, so a missing
/// required field fails at commit time.
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_active: Option<bool>,
}

/// Fields accepted on character creation. Same NULL rules as [`NewUser`].
#[derive(Debug, Clone, Default)]
pub struct NewPeople {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<String>,
    pub skin_color: Option<String>,
}

/// Fields accepted on planet creation. Same NULL rules as [`NewUser`].
#[derive(Debug, Clone, Default)]
pub struct NewPlanet {
    pub name: Option<String>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<i32>,
}

/// What a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
    Planet(i32),
    People(i32),
}

/// A stored favorite row, without its related records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteLink {
    pub id: i32,
    pub user_id: i32,
    pub planet_id: Option<i32>,
    pub people_id: Option<i32>,
}

/// A favorite with its related records loaded. A relation is `None` when the
/// row does not reference one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub planet: Option<Planet>,
    pub people: Option<People>,
}

/// One user's favorites, split by target kind. A row referencing both a
/// planet and a character appears in both lists.
#[derive(Debug, Clone, Default)]
pub struct UserFavorites {
    pub planets: Vec<Favorite>,
    pub people: Vec<Favorite>,
}
