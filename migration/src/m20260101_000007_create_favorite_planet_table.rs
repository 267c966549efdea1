use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000002_create_favorite_list_table::FavoriteList;
use super::m20260101_000004_create_planet_table::Planet;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoritePlanet::Table)
                    .if_not_exists()
                    .col(integer(FavoritePlanet::FavoritelistId))
                    .col(integer(FavoritePlanet::PlanetId))
                    .primary_key(
                        Index::create()
                            .col(FavoritePlanet::FavoritelistId)
                            .col(FavoritePlanet::PlanetId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_planet_favoritelist_id")
                            .from(FavoritePlanet::Table, FavoritePlanet::FavoritelistId)
                            .to(FavoriteList::Table, FavoriteList::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_planet_planet_id")
                            .from(FavoritePlanet::Table, FavoritePlanet::PlanetId)
                            .to(Planet::Table, Planet::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FavoritePlanet::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FavoritePlanet {
    Table,
    FavoritelistId,
    PlanetId,
}
