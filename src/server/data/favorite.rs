//! Favorite list repository.
//!
//! Owns the `favorite_list` table and the three `favorite_*` join tables. Lists are
//! loaded with their contents through batched queries: one for the lists, one per
//! join table and one per catalog table, regardless of how many lists are requested.

use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::{
    model::catalog::CatalogKind,
    server::{
        data::catalog::CatalogRepository,
        model::{catalog::CatalogItem, favorite::FavoriteList},
    },
};

pub struct FavoriteListRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteListRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the raw favorite list row owned by a user.
    pub async fn find_model_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::favorite_list::Model>, DbErr> {
        entity::prelude::FavoriteList::find()
            .filter(entity::favorite_list::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Returns the user's favorite list, inserting an empty one if none exists.
    ///
    /// The insert uses `ON CONFLICT (user_id) DO NOTHING`, so a list created by a
    /// concurrent request is picked up by the follow-up select instead of failing.
    ///
    /// # Returns
    /// - `Ok(Model)` - Existing or newly created list row
    /// - `Err(DbErr)` - Database error, including a foreign key failure when the user
    ///   does not exist
    pub async fn get_or_create(&self, user_id: i32) -> Result<entity::favorite_list::Model, DbErr> {
        let result = entity::prelude::FavoriteList::insert(entity::favorite_list::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::favorite_list::Column::UserId)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await;
        inserted(result)?;

        self.find_model_by_user_id(user_id).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!("favorite list of user {}", user_id))
        })
    }

    /// Loads the favorite lists of several users with all their items.
    ///
    /// # Returns
    /// - `Ok(HashMap)` - Lists keyed by owning user id; users without a list are absent
    /// - `Err(DbErr)` - Database error during any of the batched queries
    pub async fn get_by_user_ids(
        &self,
        user_ids: &[i32],
    ) -> Result<HashMap<i32, FavoriteList>, DbErr> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let models = entity::prelude::FavoriteList::find()
            .filter(entity::favorite_list::Column::UserId.is_in(user_ids.iter().copied()))
            .all(self.db)
            .await?;

        if models.is_empty() {
            return Ok(HashMap::new());
        }

        let list_ids: Vec<i32> = models.iter().map(|m| m.id).collect();
        let mut lists: HashMap<i32, FavoriteList> = models
            .into_iter()
            .map(|m| (m.id, FavoriteList::empty(m)))
            .collect();

        let catalog_repo = CatalogRepository::new(self.db);
        for kind in CatalogKind::ALL {
            let links = self.get_links(kind, &list_ids).await?;
            if links.is_empty() {
                continue;
            }

            let mut item_ids: Vec<i32> = links.iter().map(|(_, item_id)| *item_id).collect();
            item_ids.sort_unstable();
            item_ids.dedup();

            let items: HashMap<i32, CatalogItem> = catalog_repo
                .get_by_ids(kind, &item_ids)
                .await?
                .into_iter()
                .map(|item| (item.id, item))
                .collect();

            for (list_id, item_id) in links {
                if let (Some(list), Some(item)) = (lists.get_mut(&list_id), items.get(&item_id)) {
                    list.items_mut(kind).push(item.clone());
                }
            }
        }

        Ok(lists
            .into_values()
            .map(|list| (list.user_id, list))
            .collect())
    }

    /// Loads one user's favorite list with all its items.
    pub async fn find_by_user_id(&self, user_id: i32) -> Result<Option<FavoriteList>, DbErr> {
        Ok(self.get_by_user_ids(&[user_id]).await?.remove(&user_id))
    }

    /// Links an item to a favorite list unless it is already linked.
    ///
    /// Written as a single `INSERT .. ON CONFLICT DO NOTHING` on the composite key, so
    /// concurrent adds of the same item both succeed.
    ///
    /// # Returns
    /// - `Ok(true)` - A new association row was written
    /// - `Ok(false)` - The item was already in the list
    /// - `Err(DbErr)` - Database error during insert
    pub async fn add_item(
        &self,
        list_id: i32,
        kind: CatalogKind,
        item_id: i32,
    ) -> Result<bool, DbErr> {
        let result = match kind {
            CatalogKind::Character => {
                entity::prelude::FavoriteCharacter::insert(entity::favorite_character::ActiveModel {
                    favoritelist_id: ActiveValue::Set(list_id),
                    character_id: ActiveValue::Set(item_id),
                })
                .on_conflict(
                    OnConflict::columns([
                        entity::favorite_character::Column::FavoritelistId,
                        entity::favorite_character::Column::CharacterId,
                    ])
                    .do_nothing()
                    .to_owned(),
                )
                .exec_without_returning(self.db)
                .await
            }
            CatalogKind::Planet => {
                entity::prelude::FavoritePlanet::insert(entity::favorite_planet::ActiveModel {
                    favoritelist_id: ActiveValue::Set(list_id),
                    planet_id: ActiveValue::Set(item_id),
                })
                .on_conflict(
                    OnConflict::columns([
                        entity::favorite_planet::Column::FavoritelistId,
                        entity::favorite_planet::Column::PlanetId,
                    ])
                    .do_nothing()
                    .to_owned(),
                )
                .exec_without_returning(self.db)
                .await
            }
            CatalogKind::Vehicle => {
                entity::prelude::FavoriteVehicle::insert(entity::favorite_vehicle::ActiveModel {
                    favoritelist_id: ActiveValue::Set(list_id),
                    vehicle_id: ActiveValue::Set(item_id),
                })
                .on_conflict(
                    OnConflict::columns([
                        entity::favorite_vehicle::Column::FavoritelistId,
                        entity::favorite_vehicle::Column::VehicleId,
                    ])
                    .do_nothing()
                    .to_owned(),
                )
                .exec_without_returning(self.db)
                .await
            }
        };

        inserted(result)
    }

    /// Unlinks an item from a favorite list.
    ///
    /// # Returns
    /// - `Ok(true)` - The association row was deleted
    /// - `Ok(false)` - The item was not in the list
    pub async fn remove_item(
        &self,
        list_id: i32,
        kind: CatalogKind,
        item_id: i32,
    ) -> Result<bool, DbErr> {
        let result = match kind {
            CatalogKind::Character => {
                entity::prelude::FavoriteCharacter::delete_by_id((list_id, item_id))
                    .exec(self.db)
                    .await?
            }
            CatalogKind::Planet => {
                entity::prelude::FavoritePlanet::delete_by_id((list_id, item_id))
                    .exec(self.db)
                    .await?
            }
            CatalogKind::Vehicle => {
                entity::prelude::FavoriteVehicle::delete_by_id((list_id, item_id))
                    .exec(self.db)
                    .await?
            }
        };

        Ok(result.rows_affected > 0)
    }

    /// Deletes a user's favorite list together with all of its join rows.
    ///
    /// # Returns
    /// - `Ok(true)` - A list existed and was deleted
    /// - `Ok(false)` - The user had no favorite list
    pub async fn delete_by_user_id(&self, user_id: i32) -> Result<bool, DbErr> {
        let Some(list) = self.find_model_by_user_id(user_id).await? else {
            return Ok(false);
        };

        entity::prelude::FavoriteCharacter::delete_many()
            .filter(entity::favorite_character::Column::FavoritelistId.eq(list.id))
            .exec(self.db)
            .await?;

        entity::prelude::FavoritePlanet::delete_many()
            .filter(entity::favorite_planet::Column::FavoritelistId.eq(list.id))
            .exec(self.db)
            .await?;

        entity::prelude::FavoriteVehicle::delete_many()
            .filter(entity::favorite_vehicle::Column::FavoritelistId.eq(list.id))
            .exec(self.db)
            .await?;

        entity::prelude::FavoriteList::delete_by_id(list.id)
            .exec(self.db)
            .await?;

        Ok(true)
    }

    /// Gets `(list_id, item_id)` pairs of one kind for the given lists, ordered by item id.
    async fn get_links(
        &self,
        kind: CatalogKind,
        list_ids: &[i32],
    ) -> Result<Vec<(i32, i32)>, DbErr> {
        let list_ids = list_ids.iter().copied();
        let links = match kind {
            CatalogKind::Character => entity::prelude::FavoriteCharacter::find()
                .filter(entity::favorite_character::Column::FavoritelistId.is_in(list_ids))
                .order_by_asc(entity::favorite_character::Column::CharacterId)
                .all(self.db)
                .await?
                .into_iter()
                .map(|link| (link.favoritelist_id, link.character_id))
                .collect(),
            CatalogKind::Planet => entity::prelude::FavoritePlanet::find()
                .filter(entity::favorite_planet::Column::FavoritelistId.is_in(list_ids))
                .order_by_asc(entity::favorite_planet::Column::PlanetId)
                .all(self.db)
                .await?
                .into_iter()
                .map(|link| (link.favoritelist_id, link.planet_id))
                .collect(),
            CatalogKind::Vehicle => entity::prelude::FavoriteVehicle::find()
                .filter(entity::favorite_vehicle::Column::FavoritelistId.is_in(list_ids))
                .order_by_asc(entity::favorite_vehicle::Column::VehicleId)
                .all(self.db)
                .await?
                .into_iter()
                .map(|link| (link.favoritelist_id, link.vehicle_id))
                .collect(),
        };

        Ok(links)
    }
}

/// Maps the outcome of an `ON CONFLICT DO NOTHING` insert to whether a row was written.
fn inserted(result: Result<u64, DbErr>) -> Result<bool, DbErr> {
    match result {
        Ok(rows) => Ok(rows > 0),
        Err(DbErr::RecordNotInserted) => Ok(false),
        Err(e) => Err(e),
    }
}
