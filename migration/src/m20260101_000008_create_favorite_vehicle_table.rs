use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000002_create_favorite_list_table::FavoriteList;
use super::m20260101_000005_create_vehicle_table::Vehicle;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoriteVehicle::Table)
                    .if_not_exists()
                    .col(integer(FavoriteVehicle::FavoritelistId))
                    .col(integer(FavoriteVehicle::VehicleId))
                    .primary_key(
                        Index::create()
                            .col(FavoriteVehicle::FavoritelistId)
                            .col(FavoriteVehicle::VehicleId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_vehicle_favoritelist_id")
                            .from(FavoriteVehicle::Table, FavoriteVehicle::FavoritelistId)
                            .to(FavoriteList::Table, FavoriteList::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_vehicle_vehicle_id")
                            .from(FavoriteVehicle::Table, FavoriteVehicle::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FavoriteVehicle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FavoriteVehicle {
    Table,
    FavoritelistId,
    VehicleId,
}
