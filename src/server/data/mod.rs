//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Every repository is generic over `ConnectionTrait`, so the same queries run against
//! the connection pool or inside a request-scoped `DatabaseTransaction`.

pub mod catalog;
pub mod favorite;
pub mod user;

#[cfg(test)]
mod test;
