//! Catalog service for characters, planets and vehicles.

use sea_orm::DatabaseConnection;

use crate::{
    model::catalog::CatalogKind,
    server::{data::catalog::CatalogRepository, error::AppError, model::catalog::CatalogItem},
};

pub struct CatalogService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every item of a kind in storage order.
    pub async fn get_all(&self, kind: CatalogKind) -> Result<Vec<CatalogItem>, AppError> {
        let items = CatalogRepository::new(self.db).get_all(kind).await?;
        Ok(items)
    }

    /// Retrieves one item, returning `None` when it does not exist.
    pub async fn get_by_id(
        &self,
        kind: CatalogKind,
        id: i32,
    ) -> Result<Option<CatalogItem>, AppError> {
        let item = CatalogRepository::new(self.db).get_by_id(kind, id).await?;
        Ok(item)
    }
}
