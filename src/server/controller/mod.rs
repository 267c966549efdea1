//! HTTP request handlers.
//!
//! Controllers extract path and body parameters, call a service, and convert the
//! returned domain models into DTOs. Extractor rejections are routed through
//! `AppError` so malformed requests get the same JSON error body as every other failure.

use crate::server::error::AppError;

pub mod catalog;
pub mod favorite;
pub mod sitemap;
pub mod user;

#[cfg(test)]
mod test;

/// Narrows a path id to the `i32` key type.
///
/// Any integer is accepted by the route; one outside the key range names no row and
/// is reported as `"<resource> not found"`.
pub(crate) fn row_id(id: i64, resource: impl std::fmt::Display) -> Result<i32, AppError> {
    i32::try_from(id).map_err(|_| AppError::NotFound(format!("{} not found", resource)))
}
