use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoriteList::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoriteList::Id))
                    .col(integer_uniq(FavoriteList::UserId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_list_user_id")
                            .from(FavoriteList::Table, FavoriteList::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FavoriteList::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FavoriteList {
    Table,
    Id,
    UserId,
}
