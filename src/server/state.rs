//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds:
//! - Database connection pool for data persistence
//! - The generated OpenAPI document, served at `/openapi.json` and used for the sitemap

use sea_orm::DatabaseConnection;
use std::sync::Arc;
use utoipa::openapi::OpenApi;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<OpenApi>` is a reference-counted pointer
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// OpenAPI document describing every registered route.
    pub api_doc: Arc<OpenApi>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `api_doc` - OpenAPI document assembled by the router
    pub fn new(db: DatabaseConnection, api_doc: Arc<OpenApi>) -> Self {
        Self { db, api_doc }
    }
}
