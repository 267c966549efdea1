//! Catalog domain model shared by characters, planets and vehicles.

use crate::model::catalog::CatalogItemDto;

/// A character, planet or vehicle. All three tables share this shape.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl CatalogItem {
    pub fn into_dto(self) -> CatalogItemDto {
        CatalogItemDto {
            id: self.id,
            name: self.name,
            description: self.description,
        }
    }
}

impl From<entity::character::Model> for CatalogItem {
    fn from(model: entity::character::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
        }
    }
}

impl From<entity::planet::Model> for CatalogItem {
    fn from(model: entity::planet::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
        }
    }
}

impl From<entity::vehicle::Model> for CatalogItem {
    fn from(model: entity::vehicle::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
        }
    }
}
