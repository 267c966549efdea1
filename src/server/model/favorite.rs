//! Favorite list domain models and parameters.

use crate::model::{catalog::CatalogKind, favorite::FavoriteListDto};

use super::catalog::CatalogItem;

/// A user's favorite list with every referenced catalog item loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteList {
    pub id: i32,
    pub user_id: i32,
    pub characters: Vec<CatalogItem>,
    pub planets: Vec<CatalogItem>,
    pub vehicles: Vec<CatalogItem>,
}

impl FavoriteList {
    /// Creates a list with no favorites yet.
    pub fn empty(model: entity::favorite_list::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            characters: Vec::new(),
            planets: Vec::new(),
            vehicles: Vec::new(),
        }
    }

    pub(crate) fn items_mut(&mut self, kind: CatalogKind) -> &mut Vec<CatalogItem> {
        match kind {
            CatalogKind::Character => &mut self.characters,
            CatalogKind::Planet => &mut self.planets,
            CatalogKind::Vehicle => &mut self.vehicles,
        }
    }

    /// Serializes each related entity rather than the collections themselves.
    pub fn into_dto(self) -> FavoriteListDto {
        FavoriteListDto {
            id: self.id,
            planets: self.planets.into_iter().map(CatalogItem::into_dto).collect(),
            characters: self
                .characters
                .into_iter()
                .map(CatalogItem::into_dto)
                .collect(),
            vehicles: self.vehicles.into_iter().map(CatalogItem::into_dto).collect(),
        }
    }
}

/// Parameters for adding or removing a favorite.
#[derive(Debug, Clone, Copy)]
pub struct FavoriteParam {
    /// Owner of the favorite list.
    pub user_id: i32,
    /// Which catalog table `item_id` refers to.
    pub kind: CatalogKind,
    /// ID of the character, planet or vehicle.
    pub item_id: i32,
}
