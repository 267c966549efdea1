//! Catalog repository for characters, planets and vehicles.
//!
//! The three catalog tables share one shape, so a single repository dispatches on
//! `CatalogKind` and returns the shared `CatalogItem` domain model.

use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{model::catalog::CatalogKind, server::model::catalog::CatalogItem};

pub struct CatalogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CatalogRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every item of a kind in storage order.
    ///
    /// # Returns
    /// - `Ok(Vec<CatalogItem>)` - All items ordered by id (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self, kind: CatalogKind) -> Result<Vec<CatalogItem>, DbErr> {
        let items = match kind {
            CatalogKind::Character => entity::prelude::Character::find()
                .order_by_asc(entity::character::Column::Id)
                .all(self.db)
                .await?
                .into_iter()
                .map(CatalogItem::from)
                .collect(),
            CatalogKind::Planet => entity::prelude::Planet::find()
                .order_by_asc(entity::planet::Column::Id)
                .all(self.db)
                .await?
                .into_iter()
                .map(CatalogItem::from)
                .collect(),
            CatalogKind::Vehicle => entity::prelude::Vehicle::find()
                .order_by_asc(entity::vehicle::Column::Id)
                .all(self.db)
                .await?
                .into_iter()
                .map(CatalogItem::from)
                .collect(),
        };

        Ok(items)
    }

    /// Gets a single item by id.
    ///
    /// # Returns
    /// - `Ok(Some(CatalogItem))` - Item found
    /// - `Ok(None)` - No item of that kind with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(
        &self,
        kind: CatalogKind,
        id: i32,
    ) -> Result<Option<CatalogItem>, DbErr> {
        let item = match kind {
            CatalogKind::Character => entity::prelude::Character::find_by_id(id)
                .one(self.db)
                .await?
                .map(CatalogItem::from),
            CatalogKind::Planet => entity::prelude::Planet::find_by_id(id)
                .one(self.db)
                .await?
                .map(CatalogItem::from),
            CatalogKind::Vehicle => entity::prelude::Vehicle::find_by_id(id)
                .one(self.db)
                .await?
                .map(CatalogItem::from),
        };

        Ok(item)
    }

    /// Gets all items of a kind whose id is in `ids`, ordered by id.
    ///
    /// Ids with no matching row are skipped. Used to load the contents of favorite
    /// lists in one query per kind.
    pub async fn get_by_ids(
        &self,
        kind: CatalogKind,
        ids: &[i32],
    ) -> Result<Vec<CatalogItem>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids = ids.iter().copied();
        let items = match kind {
            CatalogKind::Character => entity::prelude::Character::find()
                .filter(entity::character::Column::Id.is_in(ids))
                .order_by_asc(entity::character::Column::Id)
                .all(self.db)
                .await?
                .into_iter()
                .map(CatalogItem::from)
                .collect(),
            CatalogKind::Planet => entity::prelude::Planet::find()
                .filter(entity::planet::Column::Id.is_in(ids))
                .order_by_asc(entity::planet::Column::Id)
                .all(self.db)
                .await?
                .into_iter()
                .map(CatalogItem::from)
                .collect(),
            CatalogKind::Vehicle => entity::prelude::Vehicle::find()
                .filter(entity::vehicle::Column::Id.is_in(ids))
                .order_by_asc(entity::vehicle::Column::Id)
                .all(self.db)
                .await?
                .into_iter()
                .map(CatalogItem::from)
                .collect(),
        };

        Ok(items)
    }

    /// Checks whether an item of the given kind exists.
    pub async fn exists(&self, kind: CatalogKind, id: i32) -> Result<bool, DbErr> {
        let count = match kind {
            CatalogKind::Character => {
                entity::prelude::Character::find()
                    .filter(entity::character::Column::Id.eq(id))
                    .count(self.db)
                    .await?
            }
            CatalogKind::Planet => {
                entity::prelude::Planet::find()
                    .filter(entity::planet::Column::Id.eq(id))
                    .count(self.db)
                    .await?
            }
            CatalogKind::Vehicle => {
                entity::prelude::Vehicle::find()
                    .filter(entity::vehicle::Column::Id.eq(id))
                    .count(self.db)
                    .await?
            }
        };

        Ok(count > 0)
    }
}
