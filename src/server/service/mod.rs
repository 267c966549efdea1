//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Existence checks and not-found mapping
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Transaction Management**: Mutations run inside one transaction that commits on
//!   success and rolls back when dropped on any error path

pub mod catalog;
pub mod favorite;
pub mod user;

#[cfg(test)]
mod test;
