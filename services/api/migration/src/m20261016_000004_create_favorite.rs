use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favorite::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Favorite::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Favorite::UserId).integer().not_null())
                    .col(ColumnDef::new(Favorite::PlanetId).integer().null())
                    .col(ColumnDef::new(Favorite::PeopleId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Favorite::Table, Favorite::UserId)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Favorite::Table, Favorite::PlanetId)
                            .to(Planet::Table, Planet::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Favorite::Table, Favorite::PeopleId)
                            .to(People::Table, People::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Deletes look favorites up by target, never by owner.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_favorite_planet_id")
                    .table(Favorite::Table)
                    .col(Favorite::PlanetId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_favorite_people_id")
                    .table(Favorite::Table)
                    .col(Favorite::PeopleId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Favorite::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Favorite {
    Table,
    Id,
    UserId,
    PlanetId,
    PeopleId,
}

#[derive(Iden)]
enum User {
    Table,
    Id,
}

#[derive(Iden)]
enum Planet {
    Table,
    Id,
}

#[derive(Iden)]
enum People {
    Table,
    Id,
}
