use sea_orm_migration::prelude::*;

mod m20261016_000001_create_user;
mod m20261016_000002_create_people;
mod m20261016_000003_create_planet;
mod m20261016_000004_create_favorite;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261016_000001_create_user::Migration),
            Box::new(m20261016_000002_create_people::Migration),
            Box::new(m20261016_000003_create_planet::Migration),
            Box::new(m20261016_000004_create_favorite::Migration),
        ]
    }
}
